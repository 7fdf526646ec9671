//! The system info reporter service

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tracing::{trace, warn};

use crate::config::{ReporterConfig, VersionInfo};
use crate::counter::RequestCounter;
use crate::error::ReporterResult;
use crate::info::{self, process::SysinfoProbe, UNKNOWN};
use crate::probe::ProcessProbe;
use crate::types::{MemoryUsage, ProcessInfo, StatusSnapshot};

/// Read-only snapshots of the host and process, plus the served-request counter
///
/// Cloning is cheap and every clone shares the same counter, so one reporter
/// can be handed to each request handler. The running time is measured from
/// the process start reported by the probe, or from construction when the
/// probe cannot tell.
#[derive(Clone)]
pub struct SystemInfoReporter {
    inner: Arc<Inner>,
}

struct Inner {
    versions: VersionInfo,
    requests: RequestCounter,
    started: Instant,
    /// Longest running time handed out, in milliseconds
    longest_run_ms: AtomicU64,
    probe: Box<dyn ProcessProbe>,
}

impl SystemInfoReporter {
    /// Reporter backed by the live process table
    pub fn new(config: ReporterConfig) -> Self {
        Self::with_probe(config, SysinfoProbe::new())
    }

    /// Reporter using configuration from the environment
    pub fn from_env() -> Self {
        Self::new(ReporterConfig::from_env())
    }

    /// Reporter with a custom process probe
    pub fn with_probe(config: ReporterConfig, probe: impl ProcessProbe + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                versions: config.versions,
                requests: RequestCounter::new(),
                started: Instant::now(),
                longest_run_ms: AtomicU64::new(0),
                probe: Box::new(probe),
            }),
        }
    }

    /// Primary non-loopback address, or an empty string when none resolves
    pub fn ip_address(&self) -> String {
        info::network::primary_ip_address()
            .map(|addr| addr.to_string())
            .unwrap_or_default()
    }

    /// URL the host is reachable at on `port`, using `localhost` without an address
    pub fn server_url(&self, port: u16) -> String {
        match info::network::primary_ip_address() {
            Some(addr) if addr.is_ipv6() => format!("http://[{}]:{}", addr, port),
            Some(addr) => format!("http://{}:{}", addr, port),
            None => format!("http://localhost:{}", port),
        }
    }

    /// Human-readable OS/platform descriptor
    pub fn system_info(&self) -> String {
        info::os::describe(&info::os::get_os_info())
    }

    /// OS version string
    pub fn system_version(&self) -> String {
        info::os::version_or_unknown(&info::os::get_os_info())
    }

    /// Name of the current process
    pub fn process_name(&self) -> String {
        self.inner
            .probe
            .process_name()
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Elapsed wall-clock time since the process started
    ///
    /// Never smaller than a value returned by an earlier call, even if the
    /// system clock steps backwards.
    pub fn running_time(&self) -> Duration {
        let elapsed = match self.inner.probe.start_time() {
            Some(start) => {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default();
                now.saturating_sub(Duration::from_secs(start))
            }
            None => self.inner.started.elapsed(),
        };

        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let previous = self
            .inner
            .longest_run_ms
            .fetch_max(elapsed_ms, Ordering::Relaxed);
        Duration::from_millis(previous.max(elapsed_ms))
    }

    /// Formatted elapsed time since the process started
    pub fn process_running_time(&self) -> String {
        info::uptime::format_duration(self.running_time().as_secs())
    }

    /// Structured memory usage of the current process
    pub fn memory_usage(&self) -> ReporterResult<MemoryUsage> {
        self.inner.probe.memory_usage().map_err(|e| {
            warn!(error = %e, "Memory query failed");
            e
        })
    }

    /// Formatted memory usage of the current process
    ///
    /// Fails with [`ReporterError::ResourceQuery`](crate::ReporterError::ResourceQuery)
    /// when the OS cannot supply a reading.
    pub fn memory_info(&self) -> ReporterResult<String> {
        self.memory_usage().map(|usage| usage.to_string())
    }

    /// Number of requests served so far
    pub fn request_count(&self) -> u64 {
        self.inner.requests.get()
    }

    /// Number of requests served so far, as text
    pub fn requests_served(&self) -> String {
        self.request_count().to_string()
    }

    /// Record one served request
    pub fn add_request(&self) {
        let total = self.inner.requests.increment();
        trace!(total, "Request recorded");
    }

    pub fn application_version(&self) -> String {
        self.inner.versions.application.clone()
    }

    pub fn bundle_version(&self) -> String {
        self.inner.versions.bundle.clone()
    }

    pub fn versions(&self) -> &VersionInfo {
        &self.inner.versions
    }

    pub fn process_info(&self) -> ProcessInfo {
        let running = self.running_time().as_secs();
        ProcessInfo {
            name: self.process_name(),
            running_time: info::uptime::format_duration(running),
            running_seconds: running,
        }
    }

    /// Everything at once, for status pages
    pub fn snapshot(&self) -> StatusSnapshot {
        let os = info::os::get_os_info();
        let (memory, memory_error) = match self.memory_usage() {
            Ok(usage) => (Some(usage), None),
            Err(e) => (None, Some(e.to_string())),
        };

        StatusSnapshot {
            ip_address: self.ip_address(),
            system_info: info::os::describe(&os),
            system_version: info::os::version_or_unknown(&os),
            process: self.process_info(),
            memory,
            memory_error,
            requests_served: self.request_count(),
            versions: self.inner.versions.clone(),
        }
    }
}

impl Default for SystemInfoReporter {
    fn default() -> Self {
        Self::new(ReporterConfig::default())
    }
}
