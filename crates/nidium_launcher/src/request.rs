//! Launch request extras

use std::collections::HashMap;

/// Named string extras accompanying an activity start.
///
/// Read-only to the shim: the Android glue fills it from the launch intent,
/// tests build it directly. An extra the host set to null and an extra the
/// host never set are indistinguishable here.
#[derive(Debug, Clone, Default)]
pub struct LaunchRequest {
    extras: HashMap<String, String>,
}

impl LaunchRequest {
    /// A request with no extras
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style extra insertion
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Look up a named extra
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }
}
