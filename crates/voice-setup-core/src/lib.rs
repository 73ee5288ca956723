// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Voice setup — Core types, errors and the channel codec shared across crates.

pub mod codec;
pub mod config;
pub mod error;
pub mod types;

pub use config::BridgeConfig;
pub use error::VoiceSetupError;
pub use types::*;
