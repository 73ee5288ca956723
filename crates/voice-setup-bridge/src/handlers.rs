// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Handlers for the voice setup methods.
//
// Each handler launches one platform action (two for TTS settings) and folds
// every error into the handler's own failure code. Arguments are accepted
// but unused.

use serde_json::Value;
use tracing::warn;

use voice_setup_core::types::{ErrorCode, MethodOutcome, PlatformAction};

use crate::context::BindingContext;

/// Signature shared by every entry in the handler table.
pub type Handler = fn(&BindingContext, Option<&Value>) -> MethodOutcome;

/// `openTTSSettings`: the TTS settings screen, falling back to accessibility
/// settings. Either launch counts as plain success.
pub fn open_tts_settings(context: &BindingContext, _args: Option<&Value>) -> MethodOutcome {
    let Err(primary) = context.launch(PlatformAction::TtsSettings) else {
        return MethodOutcome::Success(true);
    };
    warn!(error = %primary, "TTS settings unavailable, trying accessibility settings");

    match context.launch(PlatformAction::AccessibilitySettings) {
        Ok(()) => MethodOutcome::Success(true),
        Err(fallback) => MethodOutcome::failure(
            ErrorCode::TtsSettings,
            format!("could not open TTS settings: {fallback}"),
        ),
    }
}

/// `openSettings`: the general system settings screen.
pub fn open_settings(context: &BindingContext, _args: Option<&Value>) -> MethodOutcome {
    launch_once(
        context,
        PlatformAction::GeneralSettings,
        ErrorCode::Settings,
        "could not open settings",
    )
}

/// `checkTTSEngine`: the engine's voice data check. Success only means the
/// check screen was shown.
pub fn check_tts_engine(context: &BindingContext, _args: Option<&Value>) -> MethodOutcome {
    launch_once(
        context,
        PlatformAction::CheckTtsData,
        ErrorCode::TtsCheck,
        "could not verify TTS",
    )
}

fn launch_once(
    context: &BindingContext,
    action: PlatformAction,
    code: ErrorCode,
    what: &str,
) -> MethodOutcome {
    match context.launch(action) {
        Ok(()) => MethodOutcome::Success(true),
        Err(e) => {
            warn!(%action, error = %e, "launch failed");
            MethodOutcome::failure(code, format!("{what}: {e}"))
        }
    }
}
