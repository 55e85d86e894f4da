pub mod prediction_repository;
pub mod response_repository;
