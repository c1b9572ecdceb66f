//! # Tollgate Auth
//!
//! JWT bearer-token authentication scheme for request pipelines.
//!
//! ## Flow
//!
//! Per request, the [`TokenAuthenticator`] runs a fixed short-circuit
//! sequence:
//!
//! 1. Extract a candidate token (`token` query parameter, then the
//!    `Authorization` header)
//! 2. Structurally validate it (three dot-separated segments, after
//!    stripping any `Bearer` label and whitespace)
//! 3. Resolve the decoding key (fixed, or per request via a [`KeyResolver`]
//!    fed the unverified claims)
//! 4. Verify signature and registered claims
//! 5. Delegate final acceptance to a [`CredentialValidator`]
//!
//! The host framework adapts its request type into an [`AuthRequest`] and
//! renders the returned [`AuthOutcome`] (typically a rejection becomes an
//! HTTP 401). Token issuance, key storage, and sessions live elsewhere.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod claims;
pub mod error;
pub mod extract;
pub mod outcome;
pub mod request;
pub mod resolver;
pub mod scheme;
pub mod validator;

pub use claims::DecodedToken;
pub use error::{AuthError, BoxError, ConfigError};
pub use extract::TokenSource;
pub use outcome::{AuthOutcome, Credentials};
pub use request::{AuthMode, AuthRequest};
pub use resolver::{KeyResolver, KeySource, ResolvedKey};
pub use scheme::{SchemeBuilder, TokenAuthenticator};
pub use validator::{CredentialValidator, ValidationOutcome};
