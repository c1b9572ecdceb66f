//! Authentication outcomes surfaced to the host.

use serde_json::Value;

use crate::error::AuthError;

/// Credential set attached to an authenticated request.
///
/// Either the verified claims payload or whatever the validator returned.
pub type Credentials = Value;

/// Result of one authentication attempt.
///
/// The host decides how each variant maps onto its pipeline; typically
/// [`AuthOutcome::Rejected`] becomes an HTTP 401 while the other two let the
/// request proceed.
#[derive(Debug)]
pub enum AuthOutcome {
    /// The token verified and the validator accepted it.
    Authenticated {
        /// Credentials for downstream handlers.
        credentials: Credentials,
        /// Metadata returned by the key resolver, to be namespaced under the
        /// scheme name by the host.
        extra_info: Option<Value>,
    },
    /// No token was presented and the route allows anonymous access
    /// (`optional`/`try` mode); the request continues with empty
    /// credentials.
    Unauthenticated,
    /// Authentication failed terminally; the host typically rejects the
    /// request.
    Rejected {
        /// Why the attempt was rejected.
        error: AuthError,
        /// Decoded-but-unverified (or validator-returned) credentials of the
        /// rejected attempt. Populated from the verification step onward so
        /// `try`-mode callers can inspect who attempted access.
        attempted: Option<Credentials>,
        /// Metadata from key resolution, if it ran before the failure.
        extra_info: Option<Value>,
    },
}

impl AuthOutcome {
    /// Credentials attached to a successful authentication.
    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::Authenticated { credentials, .. } => Some(credentials),
            _ => None,
        }
    }

    /// The rejection error, if the attempt failed.
    pub fn error(&self) -> Option<&AuthError> {
        match self {
            Self::Rejected { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Whether the request may proceed (authenticated or anonymous).
    pub fn is_allowed(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}
