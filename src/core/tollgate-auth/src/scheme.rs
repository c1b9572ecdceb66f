//! The token authentication scheme.

use std::sync::Arc;

use jsonwebtoken::{DecodingKey, Validation};
use serde_json::Value;
use tracing::{debug, warn};

use crate::claims::DecodedToken;
use crate::error::{AuthError, ConfigError};
use crate::extract::{self, TokenSource};
use crate::outcome::{AuthOutcome, Credentials};
use crate::request::{AuthMode, AuthRequest};
use crate::resolver::{KeyResolver, KeySource, ResolvedKey};
use crate::validator::{CredentialValidator, ValidationOutcome};

/// Default scheme name, used by hosts to namespace resolver metadata.
const DEFAULT_SCHEME_NAME: &str = "jwt";

/// Builder for a [`TokenAuthenticator`].
///
/// Construction fails fast when the key source or the validator is missing;
/// nothing else is checked per request.
pub struct SchemeBuilder {
    name: String,
    key: Option<KeySource>,
    validator: Option<Arc<dyn CredentialValidator>>,
    verify_options: Validation,
    extractors: Vec<TokenSource>,
}

impl SchemeBuilder {
    /// Starts a builder with default extractors and verify options.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_SCHEME_NAME.to_string(),
            key: None,
            validator: None,
            verify_options: Validation::default(),
            extractors: vec![TokenSource::QueryParam, TokenSource::AuthorizationHeader],
        }
    }

    /// Sets the scheme name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Uses one fixed decoding key for every request.
    pub fn static_key(mut self, key: DecodingKey) -> Self {
        self.key = Some(KeySource::Static(key));
        self
    }

    /// Resolves the decoding key per request from the unverified claims.
    pub fn key_resolver(mut self, resolver: Arc<dyn KeyResolver>) -> Self {
        self.key = Some(KeySource::Resolver(resolver));
        self
    }

    /// Sets the credential validator (required).
    pub fn validator(mut self, validator: Arc<dyn CredentialValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Overrides the verification options handed to `jsonwebtoken`
    /// (algorithms, audience, issuer, leeway). Passed through opaquely.
    pub fn verify_options(mut self, options: Validation) -> Self {
        self.verify_options = options;
        self
    }

    /// Overrides the ordered list of places to look for a token.
    pub fn extractors(mut self, extractors: Vec<TokenSource>) -> Self {
        self.extractors = extractors;
        self
    }

    /// Builds the authenticator, failing fast on missing configuration.
    pub fn build(self) -> Result<TokenAuthenticator, ConfigError> {
        let key = self.key.ok_or(ConfigError::MissingKey)?;
        let validator = self.validator.ok_or(ConfigError::MissingValidator)?;

        Ok(TokenAuthenticator {
            name: self.name,
            key,
            validator,
            verify_options: self.verify_options,
            extractors: self.extractors,
        })
    }
}

impl Default for SchemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// JWT bearer-token authentication scheme.
///
/// Immutable once built; share one instance across concurrent requests. The
/// injected [`KeyResolver`] and [`CredentialValidator`] may be invoked
/// concurrently.
pub struct TokenAuthenticator {
    name: String,
    key: KeySource,
    validator: Arc<dyn CredentialValidator>,
    verify_options: Validation,
    extractors: Vec<TokenSource>,
}

impl TokenAuthenticator {
    /// Starts building a scheme.
    pub fn builder() -> SchemeBuilder {
        SchemeBuilder::new()
    }

    /// The scheme name used by the host to namespace attached metadata.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Authenticates one request.
    ///
    /// Runs the fixed short-circuit sequence: extract, structural check, key
    /// resolution, cryptographic verification, semantic validation. Every
    /// failure is terminal; no step runs after an earlier one failed, and
    /// nothing is retried.
    pub async fn authenticate(&self, request: &AuthRequest) -> AuthOutcome {
        let Some(candidate) = extract::extract(&self.extractors, request) else {
            return match request.mode() {
                AuthMode::Optional | AuthMode::Try => {
                    debug!(scheme = %self.name, "no token presented, continuing unauthenticated");
                    AuthOutcome::Unauthenticated
                }
                AuthMode::Required => self.rejected(AuthError::MissingToken, None, None),
            };
        };

        let token = extract::sanitize(&candidate);
        if !extract::is_well_formed(&token) {
            // Cheap check first; garbage never reaches the key resolver.
            return self.rejected(AuthError::MalformedToken, None, None);
        }

        // Unverified decode feeds the key resolver and, on verification
        // failure, the attempted-credentials channel.
        let decoded = DecodedToken::decode(&token);

        let ResolvedKey { key, extra_info } = match &self.key {
            KeySource::Static(key) => ResolvedKey::new(key.clone()),
            KeySource::Resolver(resolver) => match resolver.resolve(&decoded).await {
                Ok(resolved) => resolved,
                Err(e) => return self.rejected(AuthError::KeyResolution(e), None, None),
            },
        };

        let verified = match jsonwebtoken::decode::<Value>(&token, &key, &self.verify_options) {
            Ok(data) => DecodedToken {
                // Same bytes as the unverified decode, now trustworthy.
                header: decoded.header.clone(),
                payload: data.claims,
            },
            Err(e) => {
                let error = if matches!(
                    e.kind(),
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature
                ) {
                    AuthError::TokenExpired
                } else {
                    AuthError::InvalidToken(e)
                };
                return self.rejected(error, Some(decoded.payload), extra_info);
            }
        };

        match self.validator.validate(&verified, request).await {
            Ok(ValidationOutcome::Valid { credentials }) => {
                debug!(scheme = %self.name, "request authenticated");
                AuthOutcome::Authenticated {
                    credentials: credentials.unwrap_or(verified.payload),
                    extra_info,
                }
            }
            Ok(ValidationOutcome::Invalid { credentials }) => self.rejected(
                AuthError::RejectedCredentials,
                Some(credentials.unwrap_or(verified.payload)),
                extra_info,
            ),
            Err(e) => self.rejected(AuthError::Validator(e), None, extra_info),
        }
    }

    fn rejected(
        &self,
        error: AuthError,
        attempted: Option<Credentials>,
        extra_info: Option<Value>,
    ) -> AuthOutcome {
        warn!(scheme = %self.name, error = %error, "authentication rejected");
        AuthOutcome::Rejected {
            error,
            attempted,
            extra_info,
        }
    }
}
