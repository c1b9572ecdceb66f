//! Candidate token extraction and structural checks.

use crate::request::AuthRequest;

/// Query parameter consulted for a token candidate.
const TOKEN_QUERY_PARAM: &str = "token";

/// Places the scheme looks for a bearer token, tried in configured order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// `?token=<jwt>` query parameter.
    QueryParam,
    /// `Authorization` header, with or without a `Bearer` label.
    AuthorizationHeader,
    /// Reserved: cookie extraction is part of the configuration surface but
    /// is not yet enabled and never yields a candidate.
    Cookie,
}

/// Returns the first candidate produced by `sources`, in order.
pub(crate) fn extract(sources: &[TokenSource], request: &AuthRequest) -> Option<String> {
    sources.iter().find_map(|source| match source {
        TokenSource::QueryParam => request.query(TOKEN_QUERY_PARAM).map(str::to_owned),
        TokenSource::AuthorizationHeader => request.header("authorization").map(str::to_owned),
        TokenSource::Cookie => None,
    })
}

/// Strips every case-insensitive `Bearer` label, then all whitespace.
///
/// The label match is byte-wise ASCII, so multi-byte characters elsewhere in
/// the candidate pass through untouched.
pub(crate) fn sanitize(candidate: &str) -> String {
    let bytes = candidate.as_bytes();
    let mut kept = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes.len() - i >= 6 && bytes[i..i + 6].eq_ignore_ascii_case(b"bearer") {
            i += 6;
        } else {
            kept.push(bytes[i]);
            i += 1;
        }
    }
    // Removing a run of ASCII bytes cannot split a multi-byte sequence.
    String::from_utf8_lossy(&kept)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// A structurally well-formed JWT has exactly three dot-separated segments.
pub(crate) fn is_well_formed(token: &str) -> bool {
    token.split('.').count() == 3
}
