pub mod chat;
pub mod common;
pub mod diagnostics;
pub mod encoding;
pub mod journal;
pub mod model;
pub mod questionnaire;
pub mod training;
