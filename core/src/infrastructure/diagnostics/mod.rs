pub mod sysinfo_probe;

pub use sysinfo_probe::SysinfoMemoryProbe;
