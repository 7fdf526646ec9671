//! Reporter error types

use status_common::{IntoMcpError, McpError};
use thiserror::Error;

/// Errors surfaced by the reporter
///
/// Only resource queries can fail; every other query degrades to a placeholder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReporterError {
    /// An OS-level resource query (memory statistics, process table) could not be completed
    #[error("failed to query {resource}: {reason}")]
    ResourceQuery {
        resource: &'static str,
        reason: String,
    },
}

impl ReporterError {
    pub fn resource_query(resource: &'static str, reason: impl Into<String>) -> Self {
        ReporterError::ResourceQuery {
            resource,
            reason: reason.into(),
        }
    }
}

/// Result alias for reporter queries
pub type ReporterResult<T> = Result<T, ReporterError>;

impl IntoMcpError for ReporterError {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(self.to_string(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_query_display() {
        let err = ReporterError::resource_query("process memory", "permission denied");
        assert_eq!(
            err.to_string(),
            "failed to query process memory: permission denied"
        );
    }

    #[test]
    fn test_into_mcp_error_keeps_message() {
        let err = ReporterError::resource_query("process memory", "unsupported platform");
        let mcp = err.into_mcp_error();
        assert!(mcp.message.contains("unsupported platform"));
    }
}
