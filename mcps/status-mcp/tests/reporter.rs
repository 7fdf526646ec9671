//! Integration tests for the status reporter
//!
//! These exercise the public API the way a host server would: one reporter
//! shared by many concurrent handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use status_mcp::{
    MemoryUsage, ProcessProbe, ReporterConfig, ReporterError, ReporterResult, SysinfoProbe,
    SystemInfoReporter, FALLBACK_VERSION,
};

/// Probe whose memory query can be switched to fail
struct SwitchableProbe {
    fail: Arc<AtomicBool>,
    live: SysinfoProbe,
}

impl ProcessProbe for SwitchableProbe {
    fn memory_usage(&self) -> ReporterResult<MemoryUsage> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ReporterError::resource_query(
                "process memory",
                "operation not permitted",
            ));
        }
        self.live.memory_usage()
    }

    fn process_name(&self) -> Option<String> {
        self.live.process_name()
    }
}

#[test]
fn ten_threads_of_ten_requests_count_one_hundred() {
    let reporter = SystemInfoReporter::default();
    assert_eq!(reporter.requests_served(), "0");

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let reporter = reporter.clone();
            std::thread::spawn(move || {
                for _ in 0..10 {
                    reporter.add_request();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(reporter.requests_served(), "100");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_tasks_lose_no_updates() {
    let reporter = SystemInfoReporter::default();

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let reporter = reporter.clone();
            tokio::spawn(async move {
                for _ in 0..20 {
                    reporter.add_request();
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(reporter.request_count(), 1000);
}

#[test]
fn memory_failure_is_reported_then_recovers() {
    let fail = Arc::new(AtomicBool::new(false));
    let reporter = SystemInfoReporter::with_probe(
        ReporterConfig::default(),
        SwitchableProbe {
            fail: Arc::clone(&fail),
            live: SysinfoProbe::new(),
        },
    );

    let reading = reporter.memory_usage().unwrap();
    assert!(reading.resident_bytes > 0);

    fail.store(true, Ordering::SeqCst);
    match reporter.memory_info() {
        Err(ReporterError::ResourceQuery { resource, reason }) => {
            assert_eq!(resource, "process memory");
            assert_eq!(reason, "operation not permitted");
        }
        other => panic!("expected resource query error, got {:?}", other),
    }

    fail.store(false, Ordering::SeqCst);
    assert!(reporter.memory_info().is_ok());
}

#[test]
fn versions_fall_back_when_unconfigured() {
    let reporter = SystemInfoReporter::new(ReporterConfig::with_versions(None, Some("  ")));
    assert_eq!(reporter.application_version(), "0.1.12");
    assert_eq!(reporter.bundle_version(), FALLBACK_VERSION);
}

#[test]
fn running_time_does_not_go_backwards() {
    let reporter = SystemInfoReporter::default();
    let first = reporter.running_time();
    std::thread::sleep(Duration::from_millis(1100));
    let second = reporter.running_time();

    assert!(second >= first);
    assert!(second.as_secs() >= 1);
    assert_ne!(reporter.process_running_time(), "0 seconds");
}

#[test]
fn running_time_includes_time_before_reporter_was_built() {
    std::thread::sleep(Duration::from_millis(2100));

    let reporter = SystemInfoReporter::new(ReporterConfig::default());

    // Process start times have whole-second resolution
    assert!(reporter.running_time() >= Duration::from_secs(1));
    assert_ne!(reporter.process_running_time(), "0 seconds");
    assert!(reporter.process_info().running_seconds >= 1);
}

#[test]
fn snapshot_serializes_to_json() {
    let reporter = SystemInfoReporter::default();
    reporter.add_request();

    let json = serde_json::to_value(reporter.snapshot()).unwrap();
    assert_eq!(json["requests_served"], 1);
    assert!(json["versions"]["application"].is_string());
    assert!(json["process"]["running_seconds"].is_u64());
}
