use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, builder::RangedU64ValueParser};
use mindscope_core::domain::{
    common::{DatabaseConfig, MindscopeConfig, ModelConfig},
    encoding::UnseenCategoryPolicy,
    questionnaire::entities::FeatureSchema,
    training::value_objects::TrainingConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "mindscope-api", version, about = "MindScope questionnaire and journal API")]
pub struct Args {
    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres",
        hide_env_values = true
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "mindscope")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 5001)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Expose Prometheus metrics on `/metrics`.
    #[arg(long = "metrics", env = "SERVER_METRICS", default_value_t = true, action = ArgAction::Set)]
    pub metrics: bool,

    #[arg(long = "tls-cert", env = "SERVER_TLS_CERT", requires = "tls_key")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long = "tls-key", env = "SERVER_TLS_KEY", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ModelArgs {
    #[arg(long = "artifacts-dir", env = "ARTIFACTS_DIR", default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    #[arg(
        long = "dataset-path",
        env = "DATASET_PATH",
        default_value = "mental_health_questionnaire.csv"
    )]
    pub dataset_path: PathBuf,

    /// Train and predict with `stress` and `anxiety`, and return suggestions.
    #[arg(long = "extended-features", env = "EXTENDED_FEATURES")]
    pub extended_features: bool,

    /// Reject answers the encoders have never seen instead of encoding them as 0.
    #[arg(long = "strict-categories", env = "STRICT_CATEGORIES")]
    pub strict_categories: bool,

    #[arg(
        long = "n-estimators",
        env = "N_ESTIMATORS",
        default_value_t = 100,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub n_estimators: usize,

    #[arg(long = "seed", env = "TRAINING_SEED", default_value_t = 42)]
    pub seed: u64,

    /// Fraction of rows held out for evaluation, strictly between 0 and 1.
    #[arg(long = "test-size", env = "TEST_SIZE", default_value_t = 0.2, value_parser = parse_test_size)]
    pub test_size: f64,

    #[arg(
        long = "max-depth",
        env = "MAX_DEPTH",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

fn parse_test_size(value: &str) -> Result<f64, String> {
    let size: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if size > 0.0 && size < 1.0 {
        Ok(size)
    } else {
        Err(format!("{size} is not between 0 and 1"))
    }
}

impl From<&ModelArgs> for ModelConfig {
    fn from(args: &ModelArgs) -> Self {
        Self {
            artifacts_dir: args.artifacts_dir.clone(),
            dataset_path: args.dataset_path.clone(),
            schema: if args.extended_features {
                FeatureSchema::Extended
            } else {
                FeatureSchema::Standard
            },
            unseen_category_policy: if args.strict_categories {
                UnseenCategoryPolicy::Reject
            } else {
                UnseenCategoryPolicy::Default
            },
            training: TrainingConfig {
                n_estimators: args.n_estimators,
                seed: args.seed,
                test_size: args.test_size,
                max_depth: args.max_depth,
            },
        }
    }
}

impl From<Args> for MindscopeConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            model: ModelConfig::from(&args.model),
        }
    }
}
