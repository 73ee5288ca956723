// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JSON method codec for the voice setup channel.
//
// Calls travel as `{"method": ..., "args": ...}`. Replies are envelopes:
// `[value]` for success, `[code, message, details]` for an error, and an
// empty payload when the method is not implemented.

use serde_json::{Value, json};

use crate::error::{Result, VoiceSetupError};
use crate::types::{MethodOutcome, MethodRequest};

/// Encode a call as sent by the UI layer.
pub fn encode_call(request: &MethodRequest) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(request)?)
}

/// Decode an incoming call.
pub fn decode_call(payload: &[u8]) -> Result<MethodRequest> {
    serde_json::from_slice(payload).map_err(|e| VoiceSetupError::MalformedEnvelope(e.to_string()))
}

/// Encode the reply for one outcome.
pub fn encode_reply(outcome: &MethodOutcome) -> Result<Vec<u8>> {
    let envelope = match outcome {
        MethodOutcome::Success(value) => json!([value]),
        MethodOutcome::Failure {
            code,
            message,
            details,
        } => json!([code, message, details]),
        MethodOutcome::NotImplemented => return Ok(Vec::new()),
    };
    Ok(serde_json::to_vec(&envelope)?)
}

/// Decode a reply envelope back into an outcome.
pub fn decode_reply(payload: &[u8]) -> Result<MethodOutcome> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(MethodOutcome::NotImplemented);
    }

    let envelope: Value = serde_json::from_slice(payload)
        .map_err(|e| VoiceSetupError::MalformedEnvelope(e.to_string()))?;
    let Value::Array(items) = envelope else {
        return Err(VoiceSetupError::MalformedEnvelope(
            "reply is not an array".into(),
        ));
    };

    match items.as_slice() {
        [Value::Bool(value)] => Ok(MethodOutcome::Success(*value)),
        [other] => Err(VoiceSetupError::MalformedEnvelope(format!(
            "success value is not a boolean: {other}"
        ))),
        [Value::String(code), Value::String(message), details] => Ok(MethodOutcome::Failure {
            code: code.clone(),
            message: message.clone(),
            details: (!details.is_null()).then(|| details.clone()),
        }),
        _ => Err(VoiceSetupError::MalformedEnvelope(format!(
            "unexpected reply envelope with {} elements",
            items.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorCode;

    #[test]
    fn decode_call_without_args() {
        let request = decode_call(br#"{"method":"openSettings"}"#).expect("decode");
        assert_eq!(request.method, "openSettings");
        assert!(request.arguments.is_none());
    }

    #[test]
    fn decode_call_with_null_args() {
        let request = decode_call(br#"{"method":"checkTTSEngine","args":null}"#).expect("decode");
        assert_eq!(request.method, "checkTTSEngine");
        assert!(request.arguments.is_none());
    }

    #[test]
    fn decode_call_keeps_opaque_args() {
        let request =
            decode_call(br#"{"method":"openTTSSettings","args":{"locale":"es"}}"#).expect("decode");
        assert_eq!(request.arguments, Some(json!({"locale": "es"})));
    }

    #[test]
    fn encoded_call_uses_args_key() {
        let request = MethodRequest::new("openTTSSettings").with_arguments(json!([1]));
        let bytes = encode_call(&request).expect("encode");
        let value: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(value, json!({"method": "openTTSSettings", "args": [1]}));
        assert_eq!(decode_call(&bytes).expect("decode"), request);
    }

    #[test]
    fn call_without_method_is_malformed() {
        let err = decode_call(br#"{"args":null}"#).unwrap_err();
        assert!(matches!(err, VoiceSetupError::MalformedEnvelope(_)));

        let err = decode_call(b"[1,2]").unwrap_err();
        assert!(matches!(err, VoiceSetupError::MalformedEnvelope(_)));
    }

    #[test]
    fn success_reply_is_single_element_array() {
        let bytes = encode_reply(&MethodOutcome::Success(true)).expect("encode");
        assert_eq!(bytes, b"[true]");
    }

    #[test]
    fn error_reply_has_null_details() {
        let outcome = MethodOutcome::failure(ErrorCode::Settings, "no activity");
        let bytes = encode_reply(&outcome).expect("encode");
        assert_eq!(bytes, br#"["SETTINGS_ERROR","no activity",null]"#);
        assert_eq!(decode_reply(&bytes).expect("decode"), outcome);
    }

    #[test]
    fn not_implemented_reply_is_empty() {
        let bytes = encode_reply(&MethodOutcome::NotImplemented).expect("encode");
        assert!(bytes.is_empty());
        assert_eq!(decode_reply(&bytes).expect("decode"), MethodOutcome::NotImplemented);
    }

    #[test]
    fn unexpected_reply_shapes_are_rejected() {
        assert!(decode_reply(br#"{"ok":true}"#).is_err());
        assert!(decode_reply(br#"["a","b"]"#).is_err());
        assert!(decode_reply(br#"[42]"#).is_err());
        assert!(matches!(
            decode_reply(br#"["SETTINGS_ERROR",42,null]"#),
            Err(VoiceSetupError::MalformedEnvelope(_))
        ));
    }
}
