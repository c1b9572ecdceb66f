//! Unverified token decoding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Serialize;
use serde_json::Value;

/// Header and payload of a token, decoded without signature verification.
///
/// Untrusted until verification succeeds. A segment that is not valid
/// base64url-encoded JSON decodes to `Value::Null` rather than failing, so a
/// structurally well-formed but garbled token still reaches verification and
/// is reported as a cryptographic failure, not a formatting one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedToken {
    /// Decoded JOSE header.
    pub header: Value,
    /// Decoded claims payload.
    pub payload: Value,
}

impl DecodedToken {
    /// Decodes a candidate token without verifying it.
    ///
    /// Expects an already-sanitized candidate (see
    /// [`TokenSource`](crate::TokenSource) extraction). Decoding is
    /// side-effect-free and repeatable.
    pub fn decode(token: &str) -> Self {
        let mut segments = token.split('.');
        let header = segments.next().map(decode_segment).unwrap_or(Value::Null);
        let payload = segments.next().map(decode_segment).unwrap_or(Value::Null);
        Self { header, payload }
    }
}

fn decode_segment(segment: &str) -> Value {
    URL_SAFE_NO_PAD
        .decode(segment)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or(Value::Null)
}
