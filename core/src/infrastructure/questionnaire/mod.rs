pub mod mappers;
pub mod repositories;

pub use repositories::{
    prediction_repository::PostgresPredictionRepository,
    response_repository::PostgresQuestionnaireResponseRepository,
};
