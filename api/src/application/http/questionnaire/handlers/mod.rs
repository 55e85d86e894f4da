pub mod get_predictions;
pub mod submit_questionnaire;
