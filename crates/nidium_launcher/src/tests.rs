//! Scenario tests for the launch contract
//!
//! End-to-end checks over the adapter, resolver, and loader together,
//! using a recording host shell and a counting engine double.

use std::sync::{Arc, Mutex};
use std::thread;

use crate::error::{LaunchError, Result};
use crate::lifecycle::{HostShell, LaunchPhase, LifecycleAdapter};
use crate::loader::{NativeRuntime, RuntimeLoader};
use crate::request::LaunchRequest;

/// Records every shell call in order
#[derive(Default)]
struct RecordingShell {
    calls: Vec<&'static str>,
}

impl HostShell for RecordingShell {
    fn finish(&mut self) -> Result<()> {
        self.calls.push("finish");
        Ok(())
    }

    fn delegate_create(&mut self) -> Result<()> {
        self.calls.push("delegate_create");
        Ok(())
    }
}

/// Counts mapping attempts across adapters and threads
struct CountingEngine {
    loads: Arc<Mutex<u32>>,
}

impl NativeRuntime for CountingEngine {
    fn map_into_process(&self) -> Result<()> {
        *self.loads.lock().unwrap() += 1;
        Ok(())
    }

    fn library(&self) -> &str {
        "nidium_android"
    }
}

#[test]
fn test_launch_with_document() {
    let request = LaunchRequest::new().with_extra("nml", "/storage/app.nml");
    let mut shell = RecordingShell::default();
    let mut adapter = LifecycleAdapter::new();

    let phase = adapter.on_create(&request, &mut shell).unwrap();
    assert_eq!(phase, LaunchPhase::Delegated);
    assert_eq!(shell.calls, ["delegate_create"]);

    let args = adapter.provide_arguments().unwrap();
    assert_eq!(args.as_slice(), ["/storage/app.nml"]);
}

#[test]
fn test_launch_without_document_aborts() {
    let request = LaunchRequest::new();
    let mut shell = RecordingShell::default();
    let mut adapter = LifecycleAdapter::new();

    let phase = adapter.on_create(&request, &mut shell).unwrap();
    assert_eq!(phase, LaunchPhase::Aborted);

    // Termination requested, framework never delegated to, no argv ever built
    assert_eq!(shell.calls, ["finish"]);
    assert!(adapter.provide_arguments().is_none());
}

#[test]
fn test_termination_precedes_delegation() {
    // A request whose extra is under a different key resolves to nothing
    let request = LaunchRequest::new().with_extra("url", "https://nidium.com");
    let mut shell = RecordingShell::default();
    let mut adapter = LifecycleAdapter::new();

    adapter.on_create(&request, &mut shell).unwrap();
    assert!(!shell.calls.contains(&"delegate_create"));
    assert_eq!(shell.calls.first(), Some(&"finish"));
}

#[test]
fn test_two_activities_one_load() {
    let loads = Arc::new(Mutex::new(0));
    let engine = CountingEngine {
        loads: Arc::clone(&loads),
    };
    let loader = RuntimeLoader::new();

    for nml in ["/storage/first.nml", "/storage/second.nml"] {
        loader.ensure_loaded(&engine).unwrap();

        let request = LaunchRequest::new().with_extra("nml", nml);
        let mut shell = RecordingShell::default();
        let mut adapter = LifecycleAdapter::new();

        let phase = adapter.on_create(&request, &mut shell).unwrap();
        assert_eq!(phase, LaunchPhase::Delegated);
        // Each activity resolves its own value
        assert_eq!(adapter.provide_arguments().unwrap().as_slice(), [nml]);
    }

    assert_eq!(*loads.lock().unwrap(), 1);
}

#[test]
fn test_concurrent_ensure_loaded() {
    let loads = Arc::new(Mutex::new(0));
    let loader = Arc::new(RuntimeLoader::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let loader = Arc::clone(&loader);
            let loads = Arc::clone(&loads);
            thread::spawn(move || {
                let engine = CountingEngine { loads };
                loader.ensure_loaded(&engine).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(loader.is_loaded());
    assert_eq!(*loads.lock().unwrap(), 1);
}

#[test]
fn test_missing_argument_never_escapes_as_host_error() {
    let request = LaunchRequest::new();
    let mut shell = RecordingShell::default();
    let mut adapter = LifecycleAdapter::new();

    // The abort path is an Ok outcome for the caller; only host failures err
    assert!(adapter.on_create(&request, &mut shell).is_ok());
}

#[test]
fn test_finish_failure_propagates() {
    struct BrokenShell;

    impl HostShell for BrokenShell {
        fn finish(&mut self) -> Result<()> {
            Err(LaunchError::Host("activity already gone".to_string()))
        }

        fn delegate_create(&mut self) -> Result<()> {
            Ok(())
        }
    }

    let request = LaunchRequest::new();
    let mut adapter = LifecycleAdapter::new();
    let err = adapter.on_create(&request, &mut BrokenShell).unwrap_err();
    assert!(matches!(err, LaunchError::Host(_)));
    assert_eq!(adapter.phase(), LaunchPhase::Aborted);
}
