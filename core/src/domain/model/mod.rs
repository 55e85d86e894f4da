pub mod entities;
pub mod forest;
pub mod registry;
pub mod suggestions;

pub use entities::TrainedModel;
pub use forest::{ForestParams, RandomForest};
pub use registry::{ModelRegistry, ModelSnapshot};
pub use suggestions::SuggestionTable;
