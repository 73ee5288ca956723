// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub surface for desktop/CI builds where no settings screens exist.

use voice_setup_core::error::{Result, VoiceSetupError};
use voice_setup_core::types::Intent;

use crate::traits::PlatformSurface;

/// Surface returned on non-Android platforms. Every launch is unavailable.
pub struct StubSurface;

impl PlatformSurface for StubSurface {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }

    fn start_activity(&self, intent: &Intent) -> Result<()> {
        tracing::warn!(action = intent.action, "start_activity called on stub surface");
        Err(VoiceSetupError::PlatformUnavailable)
    }
}
