pub mod chat;
pub mod diagnostics;
pub mod journal;
pub mod questionnaire;
pub mod server;
pub mod training;
