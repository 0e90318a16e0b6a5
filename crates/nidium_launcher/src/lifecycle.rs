//! Activity lifecycle adaptation
//!
//! Bridges the host's activity-creation callback and its pull-based
//! argument query onto the resolver. The adapter is not a framework
//! subclass: it implements a small capability surface (`on_create`,
//! `provide_arguments`) and reaches the framework through [`HostShell`].

use crate::config::LaunchConfig;
use crate::error::{LaunchError, Result};
use crate::request::LaunchRequest;
use crate::resolver::{resolve, ArgumentVector};

/// Where an activity instance is in its launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    /// Creation callback received, nothing resolved yet
    Created,
    /// Document argument resolved, framework not yet delegated to
    ArgumentsResolved,
    /// Framework creation logic invoked; it pulls the argv when ready
    Delegated,
    /// No usable document argument; termination requested
    Aborted,
}

/// What the host framework offers the adapter
pub trait HostShell {
    /// Request activity termination
    fn finish(&mut self) -> Result<()>;

    /// Run the framework's own creation logic. This is where the native
    /// handshake starts; the framework calls back for arguments once it is
    /// ready to start the engine.
    fn delegate_create(&mut self) -> Result<()>;
}

/// Per-activity launch adapter
///
/// One adapter per activity creation; recreated activities get a fresh
/// instance and resolve their own argument.
pub struct LifecycleAdapter {
    config: LaunchConfig,
    phase: LaunchPhase,
    nml: Option<String>,
    /// Phase transitions in order, for debugging
    history: Vec<(LaunchPhase, LaunchPhase)>,
}

impl LifecycleAdapter {
    pub fn new() -> Self {
        Self::with_config(LaunchConfig::default())
    }

    pub fn with_config(config: LaunchConfig) -> Self {
        Self {
            config,
            phase: LaunchPhase::Created,
            nml: None,
            history: Vec::new(),
        }
    }

    pub fn phase(&self) -> LaunchPhase {
        self.phase
    }

    pub fn is_in(&self, phase: LaunchPhase) -> bool {
        self.phase == phase
    }

    /// Transition history in order
    pub fn history(&self) -> &[(LaunchPhase, LaunchPhase)] {
        &self.history
    }

    fn advance(&mut self, to: LaunchPhase) {
        self.history.push((self.phase, to));
        self.phase = to;
    }

    /// Host activity-creation callback.
    ///
    /// A missing document is fully handled here: the activity is asked to
    /// finish, `delegate_create` is never invoked, and the returned phase
    /// is [`LaunchPhase::Aborted`]. Termination always precedes delegation,
    /// never follows it: an engine must not start with no document to open.
    ///
    /// `Err` means a host call itself failed, not a missing argument.
    pub fn on_create(
        &mut self,
        request: &LaunchRequest,
        shell: &mut dyn HostShell,
    ) -> Result<LaunchPhase> {
        if self.phase != LaunchPhase::Created {
            return Err(LaunchError::Host(format!(
                "on_create in phase {:?}: activities are created once",
                self.phase
            )));
        }

        match resolve(request, &self.config.extra_key) {
            Ok(nml) => {
                tracing::debug!(nml = %nml, "launch argument resolved");
                self.nml = Some(nml);
                self.advance(LaunchPhase::ArgumentsResolved);
            }
            Err(_missing) => {
                tracing::warn!(
                    key = %self.config.extra_key,
                    "no launch argument, aborting activity"
                );
                self.advance(LaunchPhase::Aborted);
                shell.finish()?;
                return Ok(LaunchPhase::Aborted);
            }
        }

        if let Err(err) = shell.delegate_create() {
            tracing::error!(error = %err, "framework delegation failed");
            self.advance(LaunchPhase::Aborted);
            return Err(err);
        }
        self.advance(LaunchPhase::Delegated);
        Ok(LaunchPhase::Delegated)
    }

    /// Pull-based argv query from the framework.
    ///
    /// `None` until an argument has been resolved; aborted activities never
    /// supply arguments.
    pub fn provide_arguments(&self) -> Option<ArgumentVector> {
        match self.phase {
            LaunchPhase::ArgumentsResolved | LaunchPhase::Delegated => {
                self.nml.as_deref().map(ArgumentVector::single)
            }
            LaunchPhase::Created | LaunchPhase::Aborted => None,
        }
    }
}

impl Default for LifecycleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopShell;

    impl HostShell for NoopShell {
        fn finish(&mut self) -> Result<()> {
            Ok(())
        }

        fn delegate_create(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_no_arguments_before_resolution() {
        let adapter = LifecycleAdapter::new();
        assert_eq!(adapter.phase(), LaunchPhase::Created);
        assert!(adapter.is_in(LaunchPhase::Created));
        assert!(!adapter.is_in(LaunchPhase::Delegated));
        assert!(adapter.provide_arguments().is_none());
    }

    #[test]
    fn test_on_create_is_single_shot() {
        let request = LaunchRequest::new().with_extra("nml", "/storage/app.nml");
        let mut adapter = LifecycleAdapter::new();

        adapter.on_create(&request, &mut NoopShell).unwrap();
        let err = adapter.on_create(&request, &mut NoopShell).unwrap_err();
        assert!(matches!(err, LaunchError::Host(_)));
        // Second call changed nothing
        assert_eq!(adapter.phase(), LaunchPhase::Delegated);
    }

    #[test]
    fn test_delegate_failure_aborts() {
        struct FailingShell;

        impl HostShell for FailingShell {
            fn finish(&mut self) -> Result<()> {
                Ok(())
            }

            fn delegate_create(&mut self) -> Result<()> {
                Err(LaunchError::Host("framework rejected creation".to_string()))
            }
        }

        let request = LaunchRequest::new().with_extra("nml", "/storage/app.nml");
        let mut adapter = LifecycleAdapter::new();

        assert!(adapter.on_create(&request, &mut FailingShell).is_err());
        assert_eq!(adapter.phase(), LaunchPhase::Aborted);
        assert!(adapter.provide_arguments().is_none());
    }

    #[test]
    fn test_custom_extra_key() {
        let config = LaunchConfig {
            extra_key: "document".to_string(),
            ..Default::default()
        };
        let request = LaunchRequest::new().with_extra("document", "/storage/app.nml");
        let mut adapter = LifecycleAdapter::with_config(config);

        let phase = adapter.on_create(&request, &mut NoopShell).unwrap();
        assert_eq!(phase, LaunchPhase::Delegated);
        assert_eq!(
            adapter.provide_arguments().unwrap().as_slice(),
            ["/storage/app.nml"]
        );
    }

    #[test]
    fn test_history_records_transitions() {
        let request = LaunchRequest::new().with_extra("nml", "/storage/app.nml");
        let mut adapter = LifecycleAdapter::new();
        adapter.on_create(&request, &mut NoopShell).unwrap();

        assert_eq!(
            adapter.history(),
            [
                (LaunchPhase::Created, LaunchPhase::ArgumentsResolved),
                (LaunchPhase::ArgumentsResolved, LaunchPhase::Delegated),
            ]
        );
    }
}
