//! Launch error types

use thiserror::Error;

/// Errors surfaced by the launch shim
///
/// `Clone` so the one-shot loader can hand the first load outcome to every
/// later caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// The launch request carried no usable document extra
    #[error("launch extra `{key}` is absent: cannot determine what document to open")]
    MissingArgument { key: String },

    /// The engine library could not be mapped into the process
    #[error("native runtime load failed: {0}")]
    NativeLoad(String),

    /// A host framework or bridge call failed
    #[error("host call failed: {0}")]
    Host(String),
}

/// Result type for launch operations
pub type Result<T> = std::result::Result<T, LaunchError>;
