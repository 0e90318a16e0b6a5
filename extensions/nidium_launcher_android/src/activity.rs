//! JNI surface for the Java `NidiumActivity`
//!
//! The Java class overrides `onCreate` and the framework's argument query
//! and forwards both here:
//!
//! - `nativeOnCreate` maps the engine library (once per process), reads
//!   the launch intent, and runs the lifecycle adapter. An activity with
//!   no document finishes before the framework's native handshake runs.
//! - `nativeGetArguments` is the framework's pull: it returns the argv as
//!   a Java `String[]`, or null when this activity never resolved one.

use std::sync::Mutex;

use jni::objects::{JObject, JObjectArray};
use jni::sys::{jobjectArray, jsize};
use jni::JNIEnv;

use nidium_launcher::config::LaunchConfig;
use nidium_launcher::error::{LaunchError, Result};
use nidium_launcher::lifecycle::{HostShell, LifecycleAdapter};
use nidium_launcher::loader::RuntimeLoader;

use crate::intent;
use crate::logging;
use crate::runtime::NidiumEngine;

/// Adapter for the activity instance currently being launched.
///
/// Activities may be recreated within one process; each creation replaces
/// the slot, and the framework pulls arguments from whichever instance is
/// current. Lifecycle callbacks arrive on the main thread, the Mutex only
/// satisfies the static.
static CURRENT: Mutex<Option<LifecycleAdapter>> = Mutex::new(None);

/// `HostShell` backed by the Java activity
struct ActivityShell<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
    activity: &'a JObject<'local>,
}

impl HostShell for ActivityShell<'_, '_> {
    fn finish(&mut self) -> Result<()> {
        intent::finish_activity(self.env, self.activity)
    }

    fn delegate_create(&mut self) -> Result<()> {
        // The framework's own onCreate continues on the Java side once
        // nativeOnCreate returns; nothing to push from here.
        Ok(())
    }
}

#[no_mangle]
pub extern "system" fn Java_com_nidium_android_NidiumActivity_nativeOnCreate<'local>(
    mut env: JNIEnv<'local>,
    activity: JObject<'local>,
) {
    let config = LaunchConfig::default();
    logging::init(&config.log_tag);

    // Engine mapping strictly precedes any lifecycle work. A load failure
    // is fatal; hand it to the platform's default fault handling.
    let outcome = NidiumEngine::from_env(&env, &config.library)
        .and_then(|engine| RuntimeLoader::global().ensure_loaded(&engine));
    if let Err(err) = outcome {
        tracing::error!(error = %err, "cannot map the nidium engine");
        let _ = env.throw_new("java/lang/UnsatisfiedLinkError", err.to_string());
        return;
    }

    if let Err(err) = create_activity(&mut env, &activity, config) {
        tracing::error!(error = %err, "activity creation failed");
        let _ = env.throw_new("java/lang/IllegalStateException", err.to_string());
    }
}

fn create_activity<'local>(
    env: &mut JNIEnv<'local>,
    activity: &JObject<'local>,
    config: LaunchConfig,
) -> Result<()> {
    let extra_key = config.extra_key.clone();
    let request = intent::read_launch_request(env, activity, &[extra_key.as_str()])?;

    let mut adapter = LifecycleAdapter::with_config(config);
    let mut shell = ActivityShell { env, activity };
    let phase = adapter.on_create(&request, &mut shell)?;
    tracing::info!(?phase, "activity created");

    *CURRENT.lock().unwrap() = Some(adapter);
    Ok(())
}

#[no_mangle]
pub extern "system" fn Java_com_nidium_android_NidiumActivity_nativeGetArguments<'local>(
    mut env: JNIEnv<'local>,
    _activity: JObject<'local>,
) -> jobjectArray {
    let args = {
        let current = CURRENT.lock().unwrap();
        current.as_ref().and_then(|adapter| adapter.provide_arguments())
    };
    let Some(args) = args else {
        // Created-but-unresolved or aborted: never supply an argv
        tracing::warn!("arguments queried with none resolved");
        return std::ptr::null_mut();
    };

    match string_array(&mut env, args.as_slice()) {
        Ok(array) => array.into_raw(),
        Err(err) => {
            tracing::error!(error = %err, "failed to build argument array");
            std::ptr::null_mut()
        }
    }
}

/// Java `String[]` from the argv
fn string_array<'local>(env: &mut JNIEnv<'local>, items: &[String]) -> Result<JObjectArray<'local>> {
    let array = env
        .new_object_array(items.len() as jsize, "java/lang/String", JObject::null())
        .map_err(|e| LaunchError::Host(format!("failed to allocate argument array: {}", e)))?;

    for (index, item) in items.iter().enumerate() {
        let value = env
            .new_string(item)
            .map_err(|e| LaunchError::Host(format!("failed to create argument string: {}", e)))?;
        env.set_object_array_element(&array, index as jsize, value)
            .map_err(|e| LaunchError::Host(format!("failed to store argument: {}", e)))?;
    }

    Ok(array)
}
