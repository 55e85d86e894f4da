use crate::domain::{common::entities::app_errors::CoreError, diagnostics::entities::MemoryUsage};

#[cfg_attr(test, mockall::automock)]
pub trait MemoryProbe: Send + Sync {
    fn memory_usage(&self) -> Result<MemoryUsage, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticsService: Send + Sync {
    fn memory_usage(&self) -> Result<MemoryUsage, CoreError>;
}
