//! Nidium Launcher Core
//!
//! Portable launch contract between a host OS activity and the nidium
//! engine (`libnidium_android.so`):
//!
//! - **Argument resolution**: extract the `nml` document path/URI from the
//!   launch request and package it as the engine's argv.
//! - **One-shot loading**: map the engine library into the process at most
//!   once, no matter how many activities the host creates.
//! - **Lifecycle adaptation**: bridge the host's creation callback and its
//!   pull-based argument query onto the two concerns above, aborting the
//!   activity before any native handshake when no document was supplied.
//!
//! Nothing in this crate touches Android APIs; the JNI side lives in
//! `nidium_launcher_android` and tests run on any host.
//!
//! # Example
//!
//! ```rust
//! use nidium_launcher::{HostShell, LaunchPhase, LaunchRequest, LifecycleAdapter, Result};
//!
//! struct NoopShell;
//!
//! impl HostShell for NoopShell {
//!     fn finish(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn delegate_create(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let request = LaunchRequest::new().with_extra("nml", "/storage/app.nml");
//! let mut adapter = LifecycleAdapter::new();
//! let phase = adapter.on_create(&request, &mut NoopShell).unwrap();
//! assert_eq!(phase, LaunchPhase::Delegated);
//!
//! let args = adapter.provide_arguments().unwrap();
//! assert_eq!(args.as_slice(), ["/storage/app.nml"]);
//! ```

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod loader;
pub mod request;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use config::LaunchConfig;
pub use error::{LaunchError, Result};
pub use lifecycle::{HostShell, LaunchPhase, LifecycleAdapter};
pub use loader::{NativeRuntime, RuntimeLoader};
pub use request::LaunchRequest;
pub use resolver::{resolve, ArgumentVector};
