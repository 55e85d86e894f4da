pub mod entities;
pub mod ports;
pub mod services;

pub use entities::ChatMessage;
pub use ports::*;
