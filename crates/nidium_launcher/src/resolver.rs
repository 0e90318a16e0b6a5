//! Document argument resolution
//!
//! Extracts the single configuration string (the `nml` path/URI) from a
//! launch request and packages it as the argv handed to the engine.

use crate::error::{LaunchError, Result};
use crate::request::LaunchRequest;

/// Ordered argument strings for the engine's argv-style entry point.
///
/// Constructed only after successful resolution: index 0 is always the
/// document the engine should open, never null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentVector(Vec<String>);

impl ArgumentVector {
    /// argv with exactly one entry: the resolved document path/URI
    pub fn single(nml: impl Into<String>) -> Self {
        Self(vec![nml.into()])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Look up the document extra.
///
/// The value is returned unchanged: whether the path exists or the URI is
/// well formed is the engine's concern, not the shim's.
pub fn resolve(request: &LaunchRequest, key: &str) -> Result<String> {
    match request.extra(key) {
        Some(nml) => Ok(nml.to_owned()),
        None => Err(LaunchError::MissingArgument {
            key: key.to_owned(),
        }),
    }
}
