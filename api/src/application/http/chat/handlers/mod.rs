pub mod store_chat;
