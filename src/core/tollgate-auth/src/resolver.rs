//! Key resolution capability.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::DecodingKey;
use serde_json::Value;

use crate::claims::DecodedToken;
use crate::error::BoxError;

/// A resolved decoding key plus optional request-scoped metadata.
pub struct ResolvedKey {
    /// Key used to verify the token signature.
    pub key: DecodingKey,
    /// Metadata surfaced on the outcome under the scheme's name for
    /// downstream handlers. Never part of the credentials.
    pub extra_info: Option<Value>,
}

impl ResolvedKey {
    /// Wraps a key with no extra metadata.
    pub fn new(key: DecodingKey) -> Self {
        Self {
            key,
            extra_info: None,
        }
    }

    /// Attaches metadata to surface on the outcome.
    pub fn with_extra_info(mut self, info: Value) -> Self {
        self.extra_info = Some(info);
        self
    }
}

/// Capability that resolves the decoding key for a token.
///
/// Invoked with the *unverified* decoded token, so implementations can key
/// off claims such as `kid` or `iss` (for example against a remote key set).
/// May be invoked concurrently; the scheme provides no serialization.
#[async_trait]
pub trait KeyResolver: Send + Sync {
    /// Resolves the key used to verify `decoded`.
    async fn resolve(&self, decoded: &DecodedToken) -> Result<ResolvedKey, BoxError>;
}

/// Where the scheme obtains its decoding key.
#[derive(Clone)]
pub enum KeySource {
    /// A single key fixed at configuration time.
    Static(DecodingKey),
    /// A resolver invoked per request with the unverified claims.
    Resolver(Arc<dyn KeyResolver>),
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        match self {
            Self::Static(_) => f.write_str("KeySource::Static"),
            Self::Resolver(_) => f.write_str("KeySource::Resolver"),
        }
    }
}
