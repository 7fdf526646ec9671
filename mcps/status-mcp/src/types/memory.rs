//! Process memory types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::info::memory::format_bytes;

/// Memory used by the current process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryUsage {
    /// Resident set size in bytes
    pub resident_bytes: u64,
    /// Virtual memory size in bytes
    pub virtual_bytes: u64,
}

impl fmt::Display for MemoryUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "resident {} ({} bytes), virtual {}",
            format_bytes(self.resident_bytes),
            self.resident_bytes,
            format_bytes(self.virtual_bytes)
        )
    }
}
