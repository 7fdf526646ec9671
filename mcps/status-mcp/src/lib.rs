//! Status MCP Library
//!
//! Reports facts about the running process and its host: primary IP address,
//! OS descriptor and version, process name and running time, memory usage,
//! a served-request counter, and application/bundle versions.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use status_mcp::{ReporterConfig, SystemInfoReporter};
//!
//! let reporter = SystemInfoReporter::new(ReporterConfig::from_env());
//!
//! // in each request handler
//! reporter.add_request();
//!
//! // on the status page
//! let snapshot = reporter.snapshot();
//! match reporter.memory_info() {
//!     Ok(memory) => println!("{memory}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `status-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "status": { "command": "./status-mcp" } } }
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod info;
pub mod probe;
pub mod reporter;
pub mod server;
pub mod types;

pub use config::{ReporterConfig, VersionInfo, FALLBACK_VERSION};
pub use counter::RequestCounter;
pub use error::{ReporterError, ReporterResult};
pub use info::process::SysinfoProbe;
pub use probe::ProcessProbe;
pub use reporter::SystemInfoReporter;
pub use server::{ServerUrlParams, StatusMcpServer};
pub use types::{MemoryUsage, OsInfo, ProcessInfo, StatusSnapshot};
