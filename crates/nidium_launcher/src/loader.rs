//! One-shot native runtime loading
//!
//! Activities may be recreated within one process, but the engine library
//! must be mapped exactly once. The latch is an explicit, thread-safe
//! value rather than a ride on static-initializer semantics, so tests can
//! hold their own loaders while the activity path shares the process-wide
//! one.

use std::sync::OnceLock;

use crate::error::Result;

/// The engine as seen by the shim: an opaque load effect.
///
/// The Android glue implements this with `System.loadLibrary`; tests
/// substitute counting doubles.
pub trait NativeRuntime {
    /// Map the engine's code and symbols into the process address space
    fn map_into_process(&self) -> Result<()>;

    /// Library base name, for logs
    fn library(&self) -> &str;
}

/// Idempotent load guard.
///
/// The first `ensure_loaded` call performs the mapping; every later call,
/// from any thread, observes the first outcome without re-running the
/// effect. A failed load stays failed for the life of the loader.
pub struct RuntimeLoader {
    outcome: OnceLock<Result<()>>,
}

impl RuntimeLoader {
    pub const fn new() -> Self {
        Self {
            outcome: OnceLock::new(),
        }
    }

    /// Process-wide loader backing the activity path
    pub fn global() -> &'static RuntimeLoader {
        static GLOBAL: RuntimeLoader = RuntimeLoader::new();
        &GLOBAL
    }

    /// Whether a mapping has completed successfully
    pub fn is_loaded(&self) -> bool {
        matches!(self.outcome.get(), Some(Ok(())))
    }

    /// Map the runtime at most once; later calls observe the first outcome
    pub fn ensure_loaded(&self, runtime: &dyn NativeRuntime) -> Result<()> {
        match self.outcome.get() {
            Some(Ok(())) => {
                tracing::debug!(library = runtime.library(), "native runtime already mapped");
            }
            Some(Err(err)) => {
                tracing::debug!(
                    library = runtime.library(),
                    error = %err,
                    "native runtime load already failed, not retrying"
                );
            }
            None => {}
        }
        let outcome = self.outcome.get_or_init(|| {
            tracing::info!(library = runtime.library(), "mapping native runtime into process");
            runtime.map_into_process()
        });
        match outcome {
            Ok(()) => Ok(()),
            Err(err) => Err(err.clone()),
        }
    }
}

impl Default for RuntimeLoader {
    fn default() -> Self {
        Self::new()
    }
}
