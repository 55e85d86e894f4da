pub mod chat_repository;
