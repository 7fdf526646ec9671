//! Current-process queries backed by sysinfo

use std::sync::{Mutex, OnceLock};

use sysinfo::{ProcessesToUpdate, System};

use crate::error::{ReporterError, ReporterResult};
use crate::probe::ProcessProbe;
use crate::types::MemoryUsage;

const MEMORY: &str = "process memory";

/// [`ProcessProbe`] reading the live process table
pub struct SysinfoProbe {
    system: Mutex<System>,
    start_time: OnceLock<u64>,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new()),
            start_time: OnceLock::new(),
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProbe for SysinfoProbe {
    fn memory_usage(&self) -> ReporterResult<MemoryUsage> {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| ReporterError::resource_query(MEMORY, e))?;

        let mut system = self
            .system
            .lock()
            .map_err(|_| ReporterError::resource_query(MEMORY, "system handle poisoned"))?;

        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

        let process = system.process(pid).ok_or_else(|| {
            ReporterError::resource_query(MEMORY, format!("pid {} not in process table", pid))
        })?;

        let usage = MemoryUsage {
            resident_bytes: process.memory(),
            virtual_bytes: process.virtual_memory(),
        };

        // Unsupported platforms report zero rather than failing
        if usage.resident_bytes == 0 {
            return Err(ReporterError::resource_query(
                MEMORY,
                "no memory statistics reported for this platform",
            ));
        }

        Ok(usage)
    }

    fn process_name(&self) -> Option<String> {
        self.table_name().or_else(executable_name)
    }

    fn start_time(&self) -> Option<u64> {
        if let Some(start) = self.start_time.get() {
            return Some(*start);
        }
        let start = self.table_start_time()?;
        Some(*self.start_time.get_or_init(|| start))
    }
}

impl SysinfoProbe {
    /// Name recorded in the process table
    fn table_name(&self) -> Option<String> {
        let pid = sysinfo::get_current_pid().ok()?;
        let mut system = self.system.lock().ok()?;
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

        system
            .process(pid)
            .map(|p| p.name().to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
    }

    /// Start time recorded in the process table; zero means unknown
    fn table_start_time(&self) -> Option<u64> {
        let pid = sysinfo::get_current_pid().ok()?;
        let mut system = self.system.lock().ok()?;
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

        system
            .process(pid)
            .map(|p| p.start_time())
            .filter(|&start| start > 0)
    }
}

/// File stem of the running executable
fn executable_name() -> Option<String> {
    std::env::current_exe()
        .ok()?
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
