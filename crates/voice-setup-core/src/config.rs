// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VoiceSetupError};

/// Settings for the channel endpoint and its host process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Name of the method channel the UI layer sends calls on.
    pub channel_name: String,
    /// Fallback `tracing` filter when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel_name: crate::DEFAULT_CHANNEL.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Read a JSON config file. Absent fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.channel_name.trim().is_empty() {
            return Err(VoiceSetupError::Config("channel_name must not be empty".into()));
        }
        Ok(())
    }
}
