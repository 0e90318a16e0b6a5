//! Log sink initialization
//!
//! Android builds feed both `log` and `tracing` into logcat under the
//! configured tag; host builds fall back to a stderr formatter (tests and
//! cross-compilation checks).

/// Initialize process-wide log sinks.
///
/// Idempotent: activity recreation reaches this once per creation.
#[cfg(target_os = "android")]
pub fn init(tag: &str) {
    // log crate -> logcat
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag(tag),
    );

    // tracing crate -> logcat
    use tracing_subscriber::layer::SubscriberExt;
    match tracing_android::layer(tag) {
        Ok(layer) => {
            let subscriber = tracing_subscriber::registry().with(layer);
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
        Err(e) => log::warn!("tracing logcat layer unavailable: {}", e),
    }
}

#[cfg(not(target_os = "android"))]
pub fn init(_tag: &str) {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
