//! Launcher configuration

/// Launch-time configuration for the shim
///
/// Everything here has a working default; hosts override fields the way
/// `LaunchConfig { extra_key: "doc".into(), ..Default::default() }` reads.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Intent extra carrying the document path/URI
    pub extra_key: String,
    /// Base name of the engine shared library (`libnidium_android.so`)
    pub library: String,
    /// Tag attached to the Android log sinks
    pub log_tag: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            extra_key: "nml".to_string(),
            library: "nidium_android".to_string(),
            log_tag: "nidium".to_string(),
        }
    }
}
