//! Nidium Android Launcher
//!
//! JNI bridge between the host activity launch and the nidium engine's
//! argv contract. The Java `NidiumActivity` stays a thin subclass of the
//! host framework's activity; every decision lives on this side.

#[cfg(target_os = "android")]
pub mod activity;
#[cfg(target_os = "android")]
pub mod intent;
pub mod logging;
pub mod runtime;

pub use runtime::NidiumEngine;
