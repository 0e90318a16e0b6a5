//! Launch intent access over JNI
//!
//! The framework hands the shim no parsed extras, so the bridge goes
//! through `activity.getIntent().getStringExtra(key)`. The intent itself
//! stays owned by the host; only the requested keys are copied out.

use jni::objects::{JObject, JString};
use jni::JNIEnv;

use nidium_launcher::error::{LaunchError, Result};
use nidium_launcher::request::LaunchRequest;

/// Read the named string extras of the activity's launch intent.
///
/// Extras the host set to null and extras it never set both come back
/// absent from the request.
pub fn read_launch_request(
    env: &mut JNIEnv,
    activity: &JObject,
    keys: &[&str],
) -> Result<LaunchRequest> {
    let intent = env
        .call_method(activity, "getIntent", "()Landroid/content/Intent;", &[])
        .and_then(|v| v.l())
        .map_err(|e| LaunchError::Host(format!("failed to get launch intent: {}", e)))?;

    let mut request = LaunchRequest::new();
    for key in keys {
        let j_key = env
            .new_string(key)
            .map_err(|e| LaunchError::Host(format!("failed to create key string: {}", e)))?;

        let value = env
            .call_method(
                &intent,
                "getStringExtra",
                "(Ljava/lang/String;)Ljava/lang/String;",
                &[(&j_key).into()],
            )
            .and_then(|v| v.l())
            .map_err(|e| LaunchError::Host(format!("failed to read extra `{}`: {}", key, e)))?;

        if value.is_null() {
            continue;
        }

        let value: String = env
            .get_string(&JString::from(value))
            .map_err(|e| LaunchError::Host(format!("failed to convert extra `{}`: {}", key, e)))?
            .into();
        request = request.with_extra(*key, value);
    }

    Ok(request)
}

/// Request `Activity.finish()` on the given activity
pub fn finish_activity(env: &mut JNIEnv, activity: &JObject) -> Result<()> {
    env.call_method(activity, "finish", "()V", &[])
        .map(|_| ())
        .map_err(|e| LaunchError::Host(format!("failed to finish activity: {}", e)))
}
