//! Semantic credential validation capability.

use async_trait::async_trait;

use crate::claims::DecodedToken;
use crate::error::BoxError;
use crate::outcome::Credentials;
use crate::request::AuthRequest;

/// Verdict returned by a [`CredentialValidator`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// The claims represent an authorized principal.
    Valid {
        /// Credentials to attach instead of the decoded claims, if any.
        credentials: Option<Credentials>,
    },
    /// The claims verified but do not represent an authorized principal.
    Invalid {
        /// Credentials describing the rejected principal, if any; surfaced
        /// as the attempted credentials on the outcome.
        credentials: Option<Credentials>,
    },
}

impl ValidationOutcome {
    /// Accepts, attaching the decoded claims as credentials.
    pub fn valid() -> Self {
        Self::Valid { credentials: None }
    }

    /// Accepts with an explicit credential set.
    pub fn valid_with(credentials: Credentials) -> Self {
        Self::Valid {
            credentials: Some(credentials),
        }
    }

    /// Rejects without naming a principal.
    pub fn invalid() -> Self {
        Self::Invalid { credentials: None }
    }

    /// Rejects, naming the principal that was turned away.
    pub fn invalid_with(credentials: Credentials) -> Self {
        Self::Invalid {
            credentials: Some(credentials),
        }
    }
}

/// Capability that decides whether verified claims are an authorized
/// principal.
///
/// This is the sole arbiter of acceptance: a verified signature is necessary
/// but never sufficient. Implementations are expected to perform lookups
/// (user store, revocation list) and are therefore async; they must tolerate
/// concurrent invocation.
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    /// Judges the verified `decoded` claims in the context of `request`.
    async fn validate(
        &self,
        decoded: &DecodedToken,
        request: &AuthRequest,
    ) -> Result<ValidationOutcome, BoxError>;
}
