//! Authentication error types.

use thiserror::Error;

/// Boxed error returned by injected key resolvers and credential validators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while authenticating a request.
///
/// Every variant is terminal: the scheme never retries internally. The
/// variant is the machine-checkable category; `Display` carries the
/// human-readable message surfaced to the host.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Required mode and no candidate token was found.
    #[error("missing authentication token")]
    MissingToken,

    /// Candidate token does not have three dot-separated segments.
    #[error("invalid token format")]
    MalformedToken,

    /// The key resolver failed; the resolver's error is the source.
    #[error("key resolution failed: {0}")]
    KeyResolution(#[source] BoxError),

    /// Verification failed because the token is expired.
    #[error("token expired")]
    TokenExpired,

    /// Verification failed for any other reason (bad signature,
    /// audience/issuer mismatch, malformed claims).
    #[error("invalid token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// The credential validator returned an error; its payload is passed
    /// through unmodified as the source.
    #[error("credential validation failed: {0}")]
    Validator(#[source] BoxError),

    /// The credential validator explicitly rejected the credentials.
    #[error("invalid credentials")]
    RejectedCredentials,
}

/// Errors raised when building a scheme.
///
/// These are configuration mistakes caught once at setup, never per request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a static key nor a key resolver was supplied.
    #[error("scheme requires a decoding key or key resolver")]
    MissingKey,

    /// No credential validator was supplied.
    #[error("scheme requires a credential validator")]
    MissingValidator,
}
