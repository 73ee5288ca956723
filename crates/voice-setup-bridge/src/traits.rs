// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait for the surface that can present system screens.

use voice_setup_core::error::Result;
use voice_setup_core::types::Intent;

/// The active UI surface the bridge launches system screens against.
///
/// On Android this wraps the hosting `Activity`. Launches are fire-and-forget:
/// `Ok(())` means the screen was requested, not that the user did anything
/// with it.
pub trait PlatformSurface {
    /// Human-readable platform name (e.g. "Android").
    fn platform_name(&self) -> &str;

    /// Ask the platform to present the screen described by `intent`.
    fn start_activity(&self, intent: &Intent) -> Result<()>;
}
