pub mod mappers;
pub mod repositories;

pub use repositories::journal_repository::PostgresJournalRepository;
