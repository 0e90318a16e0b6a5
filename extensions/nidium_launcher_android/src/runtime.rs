//! Engine library mapping
//!
//! Loading goes through `System.loadLibrary` on the Java runtime rather
//! than a raw dlopen, so `libnidium_android.so` lands in the same linker
//! namespace the framework handshake expects.

use nidium_launcher::error::{LaunchError, Result};
use nidium_launcher::loader::NativeRuntime;

#[cfg(target_os = "android")]
use jni::{JNIEnv, JavaVM};

/// The nidium engine as the one-shot loader sees it
pub struct NidiumEngine {
    library: String,
    #[cfg(target_os = "android")]
    vm: JavaVM,
}

#[cfg(target_os = "android")]
impl NidiumEngine {
    /// Capture the Java VM so the mapping can run from the loader's call
    /// site regardless of which thread it lands on.
    pub fn from_env(env: &JNIEnv, library: impl Into<String>) -> Result<Self> {
        let vm = env
            .get_java_vm()
            .map_err(|e| LaunchError::Host(format!("failed to get JavaVM: {}", e)))?;
        Ok(Self {
            library: library.into(),
            vm,
        })
    }
}

#[cfg(target_os = "android")]
impl NativeRuntime for NidiumEngine {
    fn map_into_process(&self) -> Result<()> {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| LaunchError::NativeLoad(format!("failed to attach thread: {}", e)))?;

        let name = env
            .new_string(&self.library)
            .map_err(|e| LaunchError::NativeLoad(format!("invalid library name: {}", e)))?;

        // UnsatisfiedLinkError surfaces as Err with a pending exception
        if let Err(e) = env.call_static_method(
            "java/lang/System",
            "loadLibrary",
            "(Ljava/lang/String;)V",
            &[(&name).into()],
        ) {
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_clear();
            }
            return Err(LaunchError::NativeLoad(format!(
                "library `{}` failed to load: {}",
                self.library, e
            )));
        }

        Ok(())
    }

    fn library(&self) -> &str {
        &self.library
    }
}

// Stub implementation for non-Android builds (for cross-compilation checks)
#[cfg(not(target_os = "android"))]
impl NidiumEngine {
    pub fn new(library: impl Into<String>) -> Self {
        Self {
            library: library.into(),
        }
    }
}

#[cfg(not(target_os = "android"))]
impl NativeRuntime for NidiumEngine {
    fn map_into_process(&self) -> Result<()> {
        Err(LaunchError::NativeLoad(format!(
            "library `{}` can only be mapped on Android",
            self.library
        )))
    }

    fn library(&self) -> &str {
        &self.library
    }
}
