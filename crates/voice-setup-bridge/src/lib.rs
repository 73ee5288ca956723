// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Voice setup — command bridge between the UI layer and the host platform.
//!
//! The UI layer sends a method name on a single channel; the bridge looks it
//! up in a fixed handler table, asks the bound platform surface to present a
//! settings screen and answers with exactly one [`MethodOutcome`].
//!
//! The surface is held through a non-owning reference that the host attaches
//! when its UI becomes active and detaches before it is torn down.

pub mod channel;
pub mod context;
pub mod dispatch;
pub mod handlers;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

pub use channel::ChannelEndpoint;
pub use context::BindingContext;
pub use dispatch::{CommandBridge, HandlerTable};
pub use traits::PlatformSurface;
pub use voice_setup_core::{MethodOutcome, MethodRequest};

#[cfg(test)]
pub(crate) mod testing;
