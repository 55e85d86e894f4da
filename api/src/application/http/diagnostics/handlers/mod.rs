pub mod get_memory;
