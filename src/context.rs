//! Per-invocation blog context.
//!
//! The context bundles everything an action needs: the target blog id,
//! optional status/author hints, and the caller's session token. It is
//! built once per invocation and never mutated afterwards. Its derived
//! Debug output is safe to log - the token renders redacted.

use crate::auth::SessionToken;

/// The target blog and credentials for one action.
#[derive(Debug, Clone)]
pub struct BlogContext {
    /// Id of the blog post being acted on.
    pub id: u64,
    /// Last known publication status, populated by a pre-action lookup.
    pub status: Option<String>,
    /// Author identifier, populated by a pre-action lookup.
    pub author: Option<String>,
    /// Session token; absent means the request goes out unauthenticated.
    pub token: Option<SessionToken>,
}

impl BlogContext {
    /// Creates a context for `id` with no hints and no credentials.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            status: None,
            author: None,
            token: None,
        }
    }

    /// Attaches a session token.
    #[must_use]
    pub fn with_token(mut self, token: Option<SessionToken>) -> Self {
        self.token = token;
        self
    }

    /// Attaches status/author hints, typically from a lookup of the
    /// target post before acting on it.
    #[must_use]
    pub fn with_hints(mut self, status: Option<String>, author: Option<String>) -> Self {
        self.status = status;
        self.author = author;
        self
    }

    /// Returns the raw token string for the `Authorization` header.
    #[must_use]
    pub fn token_str(&self) -> Option<&str> {
        self.token.as_ref().map(SessionToken::expose)
    }

    /// Whether a token was resolved for this invocation.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
