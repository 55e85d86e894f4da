pub mod artifacts;
pub mod chat;
pub mod dataset;
pub mod db;
pub mod diagnostics;
pub mod journal;
pub mod questionnaire;
