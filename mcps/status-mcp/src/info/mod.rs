//! Host and process information collection

pub mod memory;
pub mod network;
pub mod os;
pub mod process;
pub mod uptime;

/// Placeholder for values the OS does not report
pub const UNKNOWN: &str = "unknown";
