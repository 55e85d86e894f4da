pub mod entities;
pub mod ports;
pub mod services;

pub use entities::MemoryUsage;
pub use ports::*;
