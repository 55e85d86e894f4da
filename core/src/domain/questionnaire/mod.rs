pub mod entities;
pub mod ports;
pub mod scoring;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use scoring::{QuestionnaireScorer, ScreeningResult};
pub use value_objects::*;
