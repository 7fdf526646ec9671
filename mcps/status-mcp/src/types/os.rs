//! OS information types

use serde::{Deserialize, Serialize};

/// Operating system information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsInfo {
    /// Distribution or OS name (e.g., "Ubuntu", "Windows", "Darwin")
    pub name: Option<String>,
    /// OS version
    pub version: Option<String>,
    /// Kernel version
    pub kernel_version: Option<String>,
    /// CPU architecture (e.g., "x86_64", "aarch64")
    pub architecture: String,
}
