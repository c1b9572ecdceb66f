//! Per-request descriptor consumed by the scheme.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-route authentication policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// The request must authenticate; a missing token is a failure.
    Required,
    /// Authenticate when a token is present, otherwise continue anonymously.
    Optional,
    /// Like [`AuthMode::Optional`], but failed attempts are expected to be
    /// inspected by the caller via the attempted credentials on the outcome.
    Try,
}

/// Read-only request descriptor handed to
/// [`TokenAuthenticator::authenticate`](crate::TokenAuthenticator::authenticate).
///
/// Hosts adapt their framework's request type into this shape once per
/// inbound request. Header names are matched ASCII-case-insensitively;
/// query parameter names are exact.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    mode: AuthMode,
    query: HashMap<String, String>,
    headers: HashMap<String, String>,
}

impl AuthRequest {
    /// Creates an empty request descriptor with the given auth mode.
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            query: HashMap::new(),
            headers: HashMap::new(),
        }
    }

    /// Adds a query parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Adds a header. Names are stored lowercased.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// The auth mode requested for this route.
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Looks up a query parameter by exact name.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Looks up a header, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
