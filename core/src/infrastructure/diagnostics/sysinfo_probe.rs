use sysinfo::{System, get_current_pid};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnostics::{entities::MemoryUsage, ports::MemoryProbe},
};

/// Reads the current process' memory counters from the OS.
#[derive(Debug, Clone, Default)]
pub struct SysinfoMemoryProbe;

impl SysinfoMemoryProbe {
    pub fn new() -> Self {
        Self
    }
}

impl MemoryProbe for SysinfoMemoryProbe {
    fn memory_usage(&self) -> Result<MemoryUsage, CoreError> {
        let pid = get_current_pid().map_err(|e| {
            error!("Failed to resolve current pid: {}", e);
            CoreError::InternalServerError
        })?;

        let mut system = System::new();
        system.refresh_process(pid);

        let process = system.process(pid).ok_or_else(|| {
            error!(%pid, "current process not visible to sysinfo");
            CoreError::InternalServerError
        })?;

        Ok(MemoryUsage::from_bytes(
            process.memory(),
            process.virtual_memory(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_nonzero_resident_memory() {
        let usage = SysinfoMemoryProbe::new().memory_usage().unwrap();
        assert!(usage.rss_mb > 0.0);
    }
}
