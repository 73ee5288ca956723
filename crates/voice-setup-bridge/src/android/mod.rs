// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android surface and host glue via JNI.
//
// The Kotlin side owns a `VoiceSetupBridge` object that forwards its method
// channel to the native functions below:
//
//   nativeCreate(channel)            -> handle
//   nativeAttach(handle, activity)      from onCreate / configureFlutterEngine
//   nativeHandleMessage(handle, call) -> reply envelope ("" = not implemented)
//   nativeDetach(handle)                from onDestroy, before super.onDestroy()
//   nativeDestroy(handle)
//
// The host struct keeps the only strong reference to the Activity surface;
// the bridge sees it through a `Weak`. Detach clears the bridge side first and
// only then deletes the global ref.

#![cfg(target_os = "android")]

use std::rc::Rc;

use jni::objects::{GlobalRef, JClass, JObject, JString, JValue};
use jni::sys::{jlong, jstring};
use jni::{JNIEnv, JavaVM};

use voice_setup_core::config::BridgeConfig;
use voice_setup_core::error::{Result, VoiceSetupError};
use voice_setup_core::types::Intent;

use crate::channel::ChannelEndpoint;
use crate::traits::PlatformSurface;

const ILLEGAL_ARGUMENT: &str = "java/lang/IllegalArgumentException";
const ILLEGAL_STATE: &str = "java/lang/IllegalStateException";

/// Convenience: map a non-exception `jni::errors::Error` into `Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> VoiceSetupError {
    VoiceSetupError::Bridge(format!("{context}: {e}"))
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// The hosting `Activity`, pinned by a JNI global reference.
pub struct AndroidSurface {
    vm: JavaVM,
    activity: GlobalRef,
}

impl AndroidSurface {
    pub fn new(env: &mut JNIEnv, activity: &JObject) -> Result<Self> {
        if activity.is_null() {
            return Err(VoiceSetupError::NoContext);
        }
        let vm = env.get_java_vm().map_err(|e| jni_err("get_java_vm", e))?;
        let activity = env
            .new_global_ref(activity)
            .map_err(|e| jni_err("new_global_ref(activity)", e))?;
        Ok(Self { vm, activity })
    }
}

impl PlatformSurface for AndroidSurface {
    fn platform_name(&self) -> &str {
        "Android"
    }

    /// `activity.startActivity(new Intent(action).addFlags(flags))`.
    ///
    /// A Java exception (typically `ActivityNotFoundException`) is cleared
    /// and reported as `LaunchRejected`.
    fn start_activity(&self, intent: &Intent) -> Result<()> {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| jni_err("failed to attach JNI thread", e))?;

        tracing::debug!(action = intent.action, flags = intent.flags, "Android: startActivity");

        match launch(&mut env, self.activity.as_obj(), intent) {
            Ok(()) => Ok(()),
            Err(jni::errors::Error::JavaException) => {
                let reason = take_exception(&mut env)
                    .unwrap_or_else(|| "unknown Java exception".to_string());
                Err(VoiceSetupError::LaunchRejected(reason))
            }
            Err(e) => Err(jni_err("startActivity", e)),
        }
    }
}

fn launch(env: &mut JNIEnv, activity: &JObject, intent: &Intent) -> jni::errors::Result<()> {
    let j_action: JString = env.new_string(intent.action)?;
    let j_intent: JObject = env.new_object(
        "android/content/Intent",
        "(Ljava/lang/String;)V",
        &[JValue::Object(&j_action)],
    )?;

    if intent.flags != 0 {
        env.call_method(
            &j_intent,
            "addFlags",
            "(I)Landroid/content/Intent;",
            &[JValue::Int(intent.flags as i32)],
        )?;
    }

    env.call_method(
        activity,
        "startActivity",
        "(Landroid/content/Intent;)V",
        &[JValue::Object(&j_intent)],
    )?;
    Ok(())
}

/// Clear the pending Java exception and return its `toString()`.
fn take_exception(env: &mut JNIEnv) -> Option<String> {
    let throwable = env.exception_occurred();
    let _ = env.exception_clear();
    let throwable = throwable.ok()?;
    if throwable.is_null() {
        return None;
    }

    let text = env
        .call_method(&throwable, "toString", "()Ljava/lang/String;", &[])
        .ok()?
        .l()
        .ok()?;
    if text.is_null() {
        return None;
    }
    let text = JString::from(text);
    env.get_string(&text).ok().map(String::from)
}

// ---------------------------------------------------------------------------
// Host glue
// ---------------------------------------------------------------------------

struct AndroidHost {
    endpoint: ChannelEndpoint,
    surface: Option<Rc<dyn PlatformSurface>>,
}

impl AndroidHost {
    fn attach(&mut self, surface: AndroidSurface) {
        self.detach();
        let surface: Rc<dyn PlatformSurface> = Rc::new(surface);
        self.endpoint.attach(&surface);
        self.surface = Some(surface);
    }

    fn detach(&mut self) {
        self.endpoint.detach();
        self.surface = None;
    }
}

/// Borrow the host behind a handle returned by `nativeCreate`.
///
/// # Safety
/// `handle` must be 0 or a live pointer from `nativeCreate` not yet passed
/// to `nativeDestroy`, used from the thread that created it.
unsafe fn host_mut<'a>(handle: jlong) -> Option<&'a mut AndroidHost> {
    // SAFETY: upheld by the caller.
    unsafe { (handle as *mut AndroidHost).as_mut() }
}

fn throw(env: &mut JNIEnv, class: &str, message: &str) {
    tracing::error!(class, message, "throwing into Java");
    let _ = env.throw_new(class, message);
}

fn read_string(env: &mut JNIEnv, value: &JString) -> Option<String> {
    if value.is_null() {
        return None;
    }
    env.get_string(value).ok().map(String::from)
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_teleo_te_1leo_VoiceSetupBridge_nativeCreate<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    channel: JString<'local>,
) -> jlong {
    let mut config = BridgeConfig::default();
    if let Some(name) = read_string(&mut env, &channel) {
        config.channel_name = name;
    }

    match ChannelEndpoint::new(&config) {
        Ok(endpoint) => {
            let host = Box::new(AndroidHost {
                endpoint,
                surface: None,
            });
            Box::into_raw(host) as jlong
        }
        Err(e) => {
            throw(&mut env, ILLEGAL_ARGUMENT, &e.to_string());
            0
        }
    }
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_teleo_te_1leo_VoiceSetupBridge_nativeAttach<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
    activity: JObject<'local>,
) {
    // SAFETY: the Kotlin wrapper only passes handles from nativeCreate.
    let Some(host) = (unsafe { host_mut(handle) }) else {
        throw(&mut env, ILLEGAL_STATE, "voice setup bridge is not initialised");
        return;
    };

    match AndroidSurface::new(&mut env, &activity) {
        Ok(surface) => host.attach(surface),
        Err(e) => throw(&mut env, ILLEGAL_STATE, &e.to_string()),
    }
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_teleo_te_1leo_VoiceSetupBridge_nativeDetach<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) {
    // SAFETY: see nativeAttach.
    if let Some(host) = unsafe { host_mut(handle) } {
        host.detach();
    }
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_teleo_te_1leo_VoiceSetupBridge_nativeHandleMessage<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
    call: JString<'local>,
) -> jstring {
    // SAFETY: see nativeAttach.
    let Some(host) = (unsafe { host_mut(handle) }) else {
        throw(&mut env, ILLEGAL_STATE, "voice setup bridge is not initialised");
        return std::ptr::null_mut();
    };
    let Some(call) = read_string(&mut env, &call) else {
        throw(&mut env, ILLEGAL_ARGUMENT, "method call must not be null");
        return std::ptr::null_mut();
    };

    let reply = host
        .endpoint
        .handle_message(call.as_bytes())
        .and_then(|bytes| {
            String::from_utf8(bytes).map_err(|e| VoiceSetupError::Bridge(e.to_string()))
        });

    match reply {
        Ok(reply) => match env.new_string(reply) {
            Ok(s) => s.into_raw(),
            Err(e) => {
                throw(&mut env, ILLEGAL_STATE, &format!("new_string(reply): {e}"));
                std::ptr::null_mut()
            }
        },
        Err(e) => {
            throw(&mut env, ILLEGAL_ARGUMENT, &e.to_string());
            std::ptr::null_mut()
        }
    }
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_teleo_te_1leo_VoiceSetupBridge_nativeDestroy<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) {
    if handle == 0 {
        return;
    }
    // SAFETY: `handle` came from Box::into_raw in nativeCreate and is
    // destroyed exactly once by the Kotlin wrapper.
    let mut host = unsafe { Box::from_raw(handle as *mut AndroidHost) };
    host.detach();
}
