//! Status MCP Server
//!
//! Serves the process status reporter over stdio.
//!
//! Versions come from `STATUS_APP_VERSION` / `STATUS_BUNDLE_VERSION`, falling
//! back to the values baked in at build time.

use status_mcp::StatusMcpServer;

status_common::serve_stdio!(StatusMcpServer::from_env(), "status_mcp");
