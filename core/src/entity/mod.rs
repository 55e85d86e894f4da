pub mod chat_history;
pub mod journal_entries;
pub mod predictions;
pub mod questionnaire_responses;
