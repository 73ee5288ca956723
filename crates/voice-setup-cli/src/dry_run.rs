// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Surface that accepts every launch and only logs it.

use voice_setup_bridge::PlatformSurface;
use voice_setup_core::error::Result;
use voice_setup_core::types::Intent;

pub struct DryRunSurface;

impl PlatformSurface for DryRunSurface {
    fn platform_name(&self) -> &str {
        "Desktop (dry run)"
    }

    fn start_activity(&self, intent: &Intent) -> Result<()> {
        tracing::info!(
            action = intent.action,
            new_task = intent.starts_new_task(),
            "dry run: would start activity"
        );
        Ok(())
    }
}
