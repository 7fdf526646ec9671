//! Combined status snapshot

use serde::{Deserialize, Serialize};

use super::MemoryUsage;
use crate::config::VersionInfo;

/// Name and age of the current process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Process name
    pub name: String,
    /// Human-readable running time (e.g., "2 hours, 5 minutes")
    pub running_time: String,
    /// Running time in whole seconds
    pub running_seconds: u64,
}

/// Everything the reporter knows, for status pages and health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Primary non-loopback address, empty when none resolves
    pub ip_address: String,
    /// Human-readable platform descriptor
    pub system_info: String,
    /// OS version
    pub system_version: String,
    /// Current process
    pub process: ProcessInfo,
    /// Process memory, absent when the query failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryUsage>,
    /// Why the memory query failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_error: Option<String>,
    /// Requests served so far
    pub requests_served: u64,
    /// Application and bundle versions
    pub versions: VersionInfo,
}
