pub mod journal_repository;
