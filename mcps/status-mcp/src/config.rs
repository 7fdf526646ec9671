//! Reporter configuration
//!
//! Version strings are baked in at build time (`STATUS_APP_VERSION`,
//! `STATUS_BUNDLE_VERSION` in the compile environment) and may be overridden
//! at runtime through environment variables of the same names.

use serde::{Deserialize, Serialize};

/// Version reported when none is configured
pub const FALLBACK_VERSION: &str = "0.1.12";

/// Environment variable holding the application version
pub const APP_VERSION_ENV: &str = "STATUS_APP_VERSION";

/// Environment variable holding the bundle/build version
pub const BUNDLE_VERSION_ENV: &str = "STATUS_BUNDLE_VERSION";

const BUILD_APP_VERSION: Option<&str> = option_env!("STATUS_APP_VERSION");
const BUILD_BUNDLE_VERSION: Option<&str> = option_env!("STATUS_BUNDLE_VERSION");

/// Application and bundle versions of the running artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Application (marketing) version
    pub application: String,
    /// Bundle/build version
    pub bundle: String,
}

impl VersionInfo {
    /// Resolve versions, substituting [`FALLBACK_VERSION`] for missing or blank values
    pub fn resolve(application: Option<&str>, bundle: Option<&str>) -> Self {
        Self {
            application: non_blank(application).unwrap_or(FALLBACK_VERSION).to_string(),
            bundle: non_blank(bundle).unwrap_or(FALLBACK_VERSION).to_string(),
        }
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::resolve(BUILD_APP_VERSION, BUILD_BUNDLE_VERSION)
    }
}

/// Configuration for the system info reporter
#[derive(Debug, Clone, Default)]
pub struct ReporterConfig {
    pub versions: VersionInfo,
}

impl ReporterConfig {
    /// Build-time defaults, overridden by non-blank environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(version) = std::env::var(APP_VERSION_ENV) {
            if let Some(v) = non_blank(Some(&version)) {
                config.versions.application = v.to_string();
            }
        }

        if let Ok(version) = std::env::var(BUNDLE_VERSION_ENV) {
            if let Some(v) = non_blank(Some(&version)) {
                config.versions.bundle = v.to_string();
            }
        }

        config
    }

    /// Config with explicit versions
    pub fn with_versions(application: Option<&str>, bundle: Option<&str>) -> Self {
        Self {
            versions: VersionInfo::resolve(application, bundle),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
