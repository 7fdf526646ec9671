//! Seam between the reporter and the OS process APIs

use crate::error::ReporterResult;
use crate::types::MemoryUsage;

/// Source of current-process facts
///
/// The live implementation is [`SysinfoProbe`](crate::info::process::SysinfoProbe);
/// tests substitute their own to force failures.
pub trait ProcessProbe: Send + Sync {
    /// Memory used by the current process
    fn memory_usage(&self) -> ReporterResult<MemoryUsage>;

    /// Name of the current process, if it can be determined
    fn process_name(&self) -> Option<String>;

    /// When the current process started, in seconds since the Unix epoch
    ///
    /// `None` when the OS does not report it; the reporter then measures from
    /// its own construction.
    fn start_time(&self) -> Option<u64> {
        None
    }
}
