// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the voice setup bridge.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default channel the UI layer talks to.
pub const DEFAULT_CHANNEL: &str = "com.teleo.te_leo/voice_setup";

/// Method identifiers understood by the bridge.
pub mod methods {
    pub const OPEN_TTS_SETTINGS: &str = "openTTSSettings";
    pub const OPEN_SETTINGS: &str = "openSettings";
    pub const CHECK_TTS_ENGINE: &str = "checkTTSEngine";
}

/// One invocation sent by the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRequest {
    pub method: String,
    /// Untyped payload; ignored by every current handler.
    #[serde(rename = "args", default)]
    pub arguments: Option<Value>,
}

impl MethodRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }

    pub fn with_arguments(mut self, arguments: Value) -> Self {
        self.arguments = Some(arguments);
        self
    }
}

/// The single reply produced for every request.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodOutcome {
    /// The action was launched.
    Success(bool),
    /// The action could not be launched.
    Failure {
        code: String,
        message: String,
        details: Option<Value>,
    },
    /// The method identifier is unknown to this bridge.
    NotImplemented,
}

impl MethodOutcome {
    /// Build a failure for one of the bridge's own error codes.
    pub fn failure(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Failure {
            code: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Wire code of a failure, if this is one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Failure { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Machine codes reported to the UI layer, one per handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Both the TTS settings screen and the accessibility fallback failed.
    TtsSettings,
    /// The general settings screen failed to open.
    Settings,
    /// The TTS data check could not be launched.
    TtsCheck,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TtsSettings => "TTS_SETTINGS_ERROR",
            Self::Settings => "SETTINGS_ERROR",
            Self::TtsCheck => "TTS_CHECK_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Intent.FLAG_ACTIVITY_NEW_TASK`.
pub const FLAG_ACTIVITY_NEW_TASK: u32 = 0x1000_0000;

/// A system screen the bridge knows how to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformAction {
    /// Dedicated text-to-speech settings.
    TtsSettings,
    /// Accessibility settings; TTS is usually reachable from here.
    AccessibilitySettings,
    /// Top-level system settings.
    GeneralSettings,
    /// "Verify / install voice data" screen of the TTS engine.
    CheckTtsData,
}

impl PlatformAction {
    /// The intent that presents this screen.
    pub fn intent(self) -> Intent {
        match self {
            Self::TtsSettings => Intent::new("com.android.settings.TTS_SETTINGS")
                .with_flags(FLAG_ACTIVITY_NEW_TASK),
            Self::AccessibilitySettings => Intent::new("android.settings.ACCESSIBILITY_SETTINGS")
                .with_flags(FLAG_ACTIVITY_NEW_TASK),
            Self::GeneralSettings => {
                Intent::new("android.settings.SETTINGS").with_flags(FLAG_ACTIVITY_NEW_TASK)
            }
            Self::CheckTtsData => Intent::new("android.speech.tts.engine.CHECK_TTS_DATA"),
        }
    }
}

impl std::fmt::Display for PlatformAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::TtsSettings => "TTS settings",
            Self::AccessibilitySettings => "accessibility settings",
            Self::GeneralSettings => "settings",
            Self::CheckTtsData => "TTS data check",
        };
        f.write_str(name)
    }
}

/// Platform-neutral description of an activity launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Intent {
    pub action: &'static str,
    pub flags: u32,
}

impl Intent {
    pub const fn new(action: &'static str) -> Self {
        Self { action, flags: 0 }
    }

    pub const fn with_flags(mut self, flags: u32) -> Self {
        self.flags |= flags;
        self
    }

    pub fn starts_new_task(&self) -> bool {
        self.flags & FLAG_ACTIVITY_NEW_TASK != 0
    }
}
