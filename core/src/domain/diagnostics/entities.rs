use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Resident and virtual memory of the running process, in megabytes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemoryUsage {
    #[serde(rename = "rss_MB")]
    pub rss_mb: f64,
    #[serde(rename = "vms_MB")]
    pub vms_mb: f64,
}

impl MemoryUsage {
    pub fn from_bytes(rss: u64, vms: u64) -> Self {
        Self {
            rss_mb: round_mb(rss),
            vms_mb: round_mb(vms),
        }
    }
}

fn round_mb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
}
