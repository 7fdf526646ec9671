//! Status Common - shared plumbing for status servers
//!
//! - **Initialization**: [`init_tracing`] and the `serve_stdio!` macro
//! - **Results**: [`json_success`] / [`text_success`] for tool responses
//! - **Errors**: [`IntoMcpError`] and [`ResultExt`] to turn domain errors into MCP errors
//!
//! ```rust,ignore
//! // main.rs
//! status_common::serve_stdio!(StatusMcpServer::from_env(), "status_mcp");
//!
//! // tool handler
//! fn get_versions(&self) -> Result<CallToolResult, McpError> {
//!     json_success(&self.reporter.versions())
//! }
//! ```

pub mod error;
pub mod init;
pub mod result;

pub use error::{IntoMcpError, ResultExt};
pub use init::init_tracing;
pub use result::{json_success, text_success};

pub use rmcp::ErrorData as McpError;

// Used by `serve_stdio!` expansions in downstream crates
#[doc(hidden)]
pub use rmcp;
#[doc(hidden)]
pub use tracing;
