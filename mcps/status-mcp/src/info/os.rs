//! OS information collection

use sysinfo::System;

use super::UNKNOWN;
use crate::types::OsInfo;

/// Get operating system information
pub fn get_os_info() -> OsInfo {
    OsInfo {
        name: System::name(),
        version: System::os_version(),
        kernel_version: System::kernel_version(),
        architecture: std::env::consts::ARCH.to_string(),
    }
}

/// One-line platform descriptor, e.g. "Ubuntu 22.04 (Linux 6.1.0, x86_64)"
pub fn describe(info: &OsInfo) -> String {
    let name = info.name.as_deref().unwrap_or(UNKNOWN);
    let kernel = match &info.kernel_version {
        Some(kernel) => format!("{} {}", std::env::consts::OS, kernel),
        None => std::env::consts::OS.to_string(),
    };

    match &info.version {
        Some(version) => format!("{} {} ({}, {})", name, version, kernel, info.architecture),
        None => format!("{} ({}, {})", name, kernel, info.architecture),
    }
}

/// OS version, or the placeholder when unavailable
pub fn version_or_unknown(info: &OsInfo) -> String {
    info.version.clone().unwrap_or_else(|| UNKNOWN.to_string())
}
