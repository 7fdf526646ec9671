//! MCP Server exposing the status reporter

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use status_common::{json_success, text_success, McpError, ResultExt};

use crate::reporter::SystemInfoReporter;

/// Port assumed by `get_server_url` when none is given
pub const DEFAULT_PORT: u16 = 8080;

/// The Status MCP Server
///
/// Every tool call counts as one served request.
#[derive(Clone)]
pub struct StatusMcpServer {
    reporter: SystemInfoReporter,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ServerUrlParams {
    #[schemars(description = "Port the host server listens on (default 8080)")]
    pub port: Option<u16>,
}

#[derive(Debug, Serialize)]
struct AddressResponse {
    ip_address: String,
}

#[derive(Debug, Serialize)]
struct SystemResponse {
    system_info: String,
    system_version: String,
}

#[derive(Debug, Serialize)]
struct RequestsResponse {
    requests_served: u64,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl StatusMcpServer {
    pub fn new() -> Self {
        Self::with_reporter(SystemInfoReporter::default())
    }

    /// Server reading its versions from the environment
    pub fn from_env() -> Self {
        Self::with_reporter(SystemInfoReporter::from_env())
    }

    /// Server sharing an existing reporter (and its request counter)
    pub fn with_reporter(reporter: SystemInfoReporter) -> Self {
        Self {
            reporter,
            tool_router: Self::tool_router(),
        }
    }

    pub fn reporter(&self) -> &SystemInfoReporter {
        &self.reporter
    }

    #[tool(
        description = "Get a full status snapshot: IP address, OS, process name and running time, memory, requests served, and versions"
    )]
    async fn get_status(&self) -> Result<CallToolResult, McpError> {
        self.reporter.add_request();
        json_success(&self.reporter.snapshot())
    }

    #[tool(description = "Get the primary non-loopback IP address of this host (empty if none)")]
    async fn get_ip_address(&self) -> Result<CallToolResult, McpError> {
        self.reporter.add_request();
        json_success(&AddressResponse {
            ip_address: self.reporter.ip_address(),
        })
    }

    #[tool(description = "Get the URL this host is reachable at for a given port")]
    async fn get_server_url(
        &self,
        Parameters(params): Parameters<ServerUrlParams>,
    ) -> Result<CallToolResult, McpError> {
        self.reporter.add_request();
        let port = params.port.unwrap_or(DEFAULT_PORT);
        Ok(text_success(self.reporter.server_url(port)))
    }

    #[tool(description = "Get a human-readable OS/platform descriptor and the OS version")]
    async fn get_system_info(&self) -> Result<CallToolResult, McpError> {
        self.reporter.add_request();
        json_success(&SystemResponse {
            system_info: self.reporter.system_info(),
            system_version: self.reporter.system_version(),
        })
    }

    #[tool(description = "Get the current process name and how long it has been running")]
    async fn get_process_info(&self) -> Result<CallToolResult, McpError> {
        self.reporter.add_request();
        json_success(&self.reporter.process_info())
    }

    #[tool(description = "Get resident and virtual memory used by the current process")]
    async fn get_memory_info(&self) -> Result<CallToolResult, McpError> {
        self.reporter.add_request();
        let usage = self.reporter.memory_usage().to_mcp_err()?;
        json_success(&usage)
    }

    #[tool(description = "Get the number of requests served, including this one")]
    async fn get_requests_served(&self) -> Result<CallToolResult, McpError> {
        self.reporter.add_request();
        json_success(&RequestsResponse {
            requests_served: self.reporter.request_count(),
        })
    }

    #[tool(description = "Get the application and bundle versions")]
    async fn get_versions(&self) -> Result<CallToolResult, McpError> {
        self.reporter.add_request();
        json_success(self.reporter.versions())
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for StatusMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Status MCP Server - reports this process's IP address, OS, running time, \
                 memory usage, requests served, and versions."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for StatusMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReporterConfig;
    use crate::error::{ReporterError, ReporterResult};
    use crate::probe::ProcessProbe;
    use crate::types::MemoryUsage;
    use rmcp::model::RawContent;

    struct NoMemoryProbe;

    impl ProcessProbe for NoMemoryProbe {
        fn memory_usage(&self) -> ReporterResult<MemoryUsage> {
            Err(ReporterError::resource_query("process memory", "unsupported platform"))
        }

        fn process_name(&self) -> Option<String> {
            None
        }
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_list_tools() {
        let server = StatusMcpServer::new();
        let tools = server.tool_router.list_all();

        assert_eq!(tools.len(), 8);

        let tool_names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(tool_names.contains(&"get_status"));
        assert!(tool_names.contains(&"get_memory_info"));
        assert!(tool_names.contains(&"get_requests_served"));
        assert!(tool_names.contains(&"get_versions"));
    }

    #[tokio::test]
    async fn test_each_call_counts_as_request() {
        let server = StatusMcpServer::new();
        server.get_ip_address().await.unwrap();
        server.get_system_info().await.unwrap();

        let result = server.get_requests_served().await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(body["requests_served"], 3);
        assert_eq!(server.reporter().requests_served(), "3");
    }

    #[tokio::test]
    async fn test_get_versions() {
        let reporter =
            SystemInfoReporter::new(ReporterConfig::with_versions(Some("3.1.0"), Some("12")));
        let server = StatusMcpServer::with_reporter(reporter);

        let result = server.get_versions().await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(body["application"], "3.1.0");
        assert_eq!(body["bundle"], "12");
    }

    #[tokio::test]
    async fn test_get_memory_info_success() {
        let server = StatusMcpServer::new();
        let result = server.get_memory_info().await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert!(body["resident_bytes"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_get_memory_info_failure_is_error() {
        let reporter = SystemInfoReporter::with_probe(ReporterConfig::default(), NoMemoryProbe);
        let server = StatusMcpServer::with_reporter(reporter);

        let err = server.get_memory_info().await.unwrap_err();
        assert!(err.message.contains("unsupported platform"));
        // The failed call was still served
        assert_eq!(server.reporter().request_count(), 1);
    }

    #[tokio::test]
    async fn test_get_status_reports_memory_error() {
        let reporter = SystemInfoReporter::with_probe(ReporterConfig::default(), NoMemoryProbe);
        let server = StatusMcpServer::with_reporter(reporter);

        let result = server.get_status().await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert!(body.get("memory").is_none());
        assert!(body["memory_error"]
            .as_str()
            .unwrap()
            .contains("unsupported platform"));
        assert_eq!(body["requests_served"], 1);
    }

    #[tokio::test]
    async fn test_get_server_url_default_port() {
        let server = StatusMcpServer::new();
        let result = server
            .get_server_url(Parameters(ServerUrlParams { port: None }))
            .await
            .unwrap();
        assert!(text_of(&result).ends_with(":8080"));
    }

    #[tokio::test]
    async fn test_get_process_info() {
        let server = StatusMcpServer::new();
        let result = server.get_process_info().await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert!(!body["name"].as_str().unwrap().is_empty());
    }
}
