// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scriptable surface shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use voice_setup_core::error::{Result, VoiceSetupError};
use voice_setup_core::types::Intent;

use crate::traits::PlatformSurface;

/// Records every launch; rejects or panics on the actions it is told to.
#[derive(Default)]
pub struct RecordingSurface {
    launched: RefCell<Vec<&'static str>>,
    rejected: HashSet<&'static str>,
    panics_on: Option<HashSet<&'static str>>,
}

impl RecordingSurface {
    pub fn accepting() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn rejecting(actions: &[&'static str]) -> Rc<Self> {
        Rc::new(Self {
            rejected: actions.iter().copied().collect(),
            ..Self::default()
        })
    }

    /// Panics on every launch.
    pub fn panicking() -> Rc<Self> {
        Rc::new(Self {
            panics_on: Some(HashSet::new()),
            ..Self::default()
        })
    }

    /// Panics only on `actions`, accepts the rest.
    pub fn panicking_on(actions: &[&'static str]) -> Rc<Self> {
        Rc::new(Self {
            panics_on: Some(actions.iter().copied().collect()),
            ..Self::default()
        })
    }

    /// Actions that were successfully started, in order.
    pub fn launched(&self) -> Vec<&'static str> {
        self.launched.borrow().clone()
    }
}

impl PlatformSurface for RecordingSurface {
    fn platform_name(&self) -> &str {
        "test"
    }

    fn start_activity(&self, intent: &Intent) -> Result<()> {
        if let Some(actions) = &self.panics_on {
            if actions.is_empty() || actions.contains(intent.action) {
                panic!("surface exploded");
            }
        }
        if self.rejected.contains(intent.action) {
            return Err(VoiceSetupError::LaunchRejected(format!(
                "No Activity found to handle {}",
                intent.action
            )));
        }
        self.launched.borrow_mut().push(intent.action);
        Ok(())
    }
}

/// Erase the concrete type so it can be attached.
pub fn as_surface(surface: &Rc<RecordingSurface>) -> Rc<dyn PlatformSurface> {
    surface.clone()
}
