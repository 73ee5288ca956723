// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Binding between the bridge and the active platform surface.
//
// The bridge never owns the surface. The host keeps the strong reference and
// attaches a weak one while its UI is active; detaching clears it before the
// host releases the surface. Handlers resolve the reference on every launch,
// so a surface the host has already dropped reads the same as "unbound".

use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use tracing::{debug, error, info};

use voice_setup_core::error::{Result, VoiceSetupError};
use voice_setup_core::types::PlatformAction;

use crate::traits::PlatformSurface;

/// Optional back-reference to the active surface. Starts unbound.
#[derive(Default)]
pub struct BindingContext {
    surface: Option<Weak<dyn PlatformSurface>>,
}

impl BindingContext {
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Bind to `surface`, replacing any previous binding.
    pub fn attach(&mut self, surface: &Rc<dyn PlatformSurface>) {
        if self.surface.is_some() {
            debug!("replacing previously attached surface");
        }
        info!(platform = surface.platform_name(), "surface attached");
        self.surface = Some(Rc::downgrade(surface));
    }

    /// Drop the binding. Must run before the host tears the surface down.
    pub fn detach(&mut self) {
        if self.surface.take().is_some() {
            info!("surface detached");
        }
    }

    /// Whether a live surface is attached.
    pub fn is_bound(&self) -> bool {
        self.surface.as_ref().is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Resolve the attached surface, or `NoContext` if there is none.
    pub fn surface(&self) -> Result<Rc<dyn PlatformSurface>> {
        self.surface
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(VoiceSetupError::NoContext)
    }

    /// Launch `action` against the attached surface.
    ///
    /// A panicking surface is reported as a `Bridge` error so callers can
    /// fall back exactly as for any other failed launch.
    pub fn launch(&self, action: PlatformAction) -> Result<()> {
        let surface = self.surface()?;
        let intent = action.intent();
        panic::catch_unwind(AssertUnwindSafe(|| surface.start_activity(&intent)))
            .unwrap_or_else(|payload| {
                let reason = panic_message(payload.as_ref());
                error!(%action, reason, "surface panicked during launch");
                Err(VoiceSetupError::Bridge(format!(
                    "platform action panicked: {reason}"
                )))
            })?;
        info!(%action, intent = intent.action, "platform action launched");
        Ok(())
    }
}

/// Best-effort text of a caught panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSurface, as_surface};

    #[test]
    fn starts_unbound() {
        let context = BindingContext::unbound();
        assert!(!context.is_bound());
        assert!(matches!(context.surface(), Err(VoiceSetupError::NoContext)));
    }

    #[test]
    fn attach_then_detach() {
        let surface = as_surface(&RecordingSurface::accepting());
        let mut context = BindingContext::unbound();

        context.attach(&surface);
        assert!(context.is_bound());

        context.detach();
        assert!(!context.is_bound());
        // The surface itself is still alive; only the binding is gone.
        assert_eq!(Rc::strong_count(&surface), 1);
        assert!(matches!(
            context.launch(PlatformAction::GeneralSettings),
            Err(VoiceSetupError::NoContext)
        ));
    }

    #[test]
    fn does_not_keep_surface_alive() {
        let recording = RecordingSurface::accepting();
        let surface = as_surface(&recording);
        let mut context = BindingContext::unbound();
        context.attach(&surface);

        drop(surface);
        drop(recording);

        assert!(!context.is_bound());
        assert!(matches!(context.surface(), Err(VoiceSetupError::NoContext)));
    }

    #[test]
    fn surface_panic_becomes_launch_error() {
        let surface = as_surface(&RecordingSurface::panicking());
        let mut context = BindingContext::unbound();
        context.attach(&surface);

        match context.launch(PlatformAction::GeneralSettings) {
            Err(VoiceSetupError::Bridge(message)) => {
                assert!(message.contains("surface exploded"), "message: {message}");
            }
            other => panic!("expected bridge error, got {other:?}"),
        }
    }

    #[test]
    fn attach_replaces_previous_surface() {
        let first = RecordingSurface::accepting();
        let second = RecordingSurface::accepting();
        let first_dyn = as_surface(&first);
        let second_dyn = as_surface(&second);

        let mut context = BindingContext::unbound();
        context.attach(&first_dyn);
        context.attach(&second_dyn);
        context.launch(PlatformAction::GeneralSettings).expect("launch");

        assert!(first.launched().is_empty());
        assert_eq!(second.launched(), vec!["android.settings.SETTINGS"]);
    }
}
