//! Server initialization
//!
//! Tracing setup and the `serve_stdio!` macro shared by the status servers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines, selected with `LOG_FORMAT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything other than `json` is text
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }

    /// Read the format from the `LOG_FORMAT` environment variable
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Initialize tracing for a status server
///
/// Logs go to stderr because stdout carries the MCP protocol. `RUST_LOG`
/// filters as usual; `<crate_name>=info` is always added as a directive.
///
/// ```rust,ignore
/// status_common::init_tracing("status_mcp")?;
/// ```
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?,
    }

    Ok(())
}

/// Generate a `main` that serves an MCP server over stdio
///
/// `$server` is an expression building the server, so binaries can pick
/// their own constructor (`Server::new()`, `Server::from_env()`, ...).
/// The calling crate must depend on `tokio`.
///
/// ```rust,ignore
/// status_common::serve_stdio!(StatusMcpServer::from_env(), "status_mcp");
/// ```
#[macro_export]
macro_rules! serve_stdio {
    ($server:expr, $crate_name:expr) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use $crate::rmcp::ServiceExt;

            $crate::init_tracing($crate_name)?;

            $crate::tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));

            let server = $server;
            let service = server.serve($crate::rmcp::transport::stdio()).await?;

            $crate::tracing::info!("Server running, waiting for requests...");

            service.waiting().await?;

            $crate::tracing::info!("Server shutting down");
            Ok(())
        }
    };
}
