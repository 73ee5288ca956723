// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the voice setup bridge.

use thiserror::Error;

/// Top-level error type for bridge and platform operations.
///
/// These never cross the channel as-is: handlers fold them into a
/// `MethodOutcome::Failure` carrying one of the wire error codes.
#[derive(Debug, Error)]
pub enum VoiceSetupError {
    // -- Lifecycle --
    #[error("no platform context attached")]
    NoContext,

    // -- Platform surface --
    #[error("platform rejected the launch: {0}")]
    LaunchRejected(String),

    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Channel --
    #[error("malformed channel envelope: {0}")]
    MalformedEnvelope(String),

    // -- Configuration / persistence --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, VoiceSetupError>;
