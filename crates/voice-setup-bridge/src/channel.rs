// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The single named channel endpoint the UI layer talks to.

use std::rc::Rc;

use tracing::{debug, info};

use voice_setup_core::codec;
use voice_setup_core::config::BridgeConfig;
use voice_setup_core::error::Result;
use voice_setup_core::types::MethodOutcome;

use crate::dispatch::CommandBridge;
use crate::traits::PlatformSurface;

/// Binds a channel name to one [`CommandBridge`] and speaks the JSON
/// method codec on its behalf.
pub struct ChannelEndpoint {
    name: String,
    bridge: CommandBridge,
}

impl ChannelEndpoint {
    pub fn new(config: &BridgeConfig) -> Result<Self> {
        config.validate()?;
        info!(channel = %config.channel_name, "channel endpoint registered");
        Ok(Self {
            name: config.channel_name.clone(),
            bridge: CommandBridge::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bridge(&self) -> &CommandBridge {
        &self.bridge
    }

    pub fn attach(&mut self, surface: &Rc<dyn PlatformSurface>) {
        self.bridge.attach(surface);
    }

    pub fn detach(&mut self) {
        self.bridge.detach();
    }

    /// Decode one call, dispatch it and encode the reply.
    ///
    /// Only a payload that is not a method call at all is an `Err`; every
    /// well-formed call gets a reply envelope.
    pub fn handle_message(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let request = codec::decode_call(payload)?;
        let outcome = self.bridge.dispatch(&request);
        debug!(channel = %self.name, method = %request.method, reply = reply_kind(&outcome), "replying");
        codec::encode_reply(&outcome)
    }
}

fn reply_kind(outcome: &MethodOutcome) -> &'static str {
    match outcome {
        MethodOutcome::Success(_) => "success",
        MethodOutcome::Failure { .. } => "error",
        MethodOutcome::NotImplemented => "notImplemented",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSurface, as_surface};
    use voice_setup_core::VoiceSetupError;

    fn endpoint() -> ChannelEndpoint {
        ChannelEndpoint::new(&BridgeConfig::default()).expect("endpoint")
    }

    #[test]
    fn uses_configured_channel_name() {
        assert_eq!(endpoint().name(), "com.teleo.te_leo/voice_setup");

        let config = BridgeConfig {
            channel_name: String::new(),
            ..BridgeConfig::default()
        };
        assert!(ChannelEndpoint::new(&config).is_err());
    }

    #[test]
    fn scenario_replies() {
        let surface = as_surface(&RecordingSurface::accepting());
        let mut endpoint = endpoint();
        assert!(!endpoint.bridge().is_bound());
        endpoint.attach(&surface);
        assert!(endpoint.bridge().is_bound());

        let reply = endpoint
            .handle_message(br#"{"method":"openSettings","args":null}"#)
            .expect("reply");
        assert_eq!(reply, b"[true]");

        let reply = endpoint.handle_message(br#"{"method":"foo"}"#).expect("reply");
        assert!(reply.is_empty());

        endpoint.detach();
        assert!(!endpoint.bridge().is_bound());
        let reply = endpoint
            .handle_message(br#"{"method":"checkTTSEngine"}"#)
            .expect("reply");
        let outcome = codec::decode_reply(&reply).expect("decode");
        assert_eq!(outcome.error_code(), Some("TTS_CHECK_ERROR"));
    }

    #[test]
    fn garbage_payload_is_an_error_not_a_reply() {
        let err = endpoint().handle_message(b"not json").unwrap_err();
        assert!(matches!(err, VoiceSetupError::MalformedEnvelope(_)));
    }
}
