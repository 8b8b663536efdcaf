//! Session token resolution from browser-exported cookies.
//!
//! The blog platform stores its access token in a cookie named
//! [`ACCESS_TOKEN_COOKIE`]. This module parses a raw `Cookie`-header-style
//! string (semicolon-separated `name=value` pairs, as a browser stores
//! them) and extracts that token. Values are never URL-decoded and never
//! logged.

use std::fmt;
use std::fs;
use std::io::{self, Read};

use anyhow::{Result, anyhow};
use tracing::{debug, info, warn};

/// Name of the cookie holding the platform's access token.
pub const ACCESS_TOKEN_COOKIE: &str = "users_access_token";

/// A bearer credential for the blog API.
///
/// The token is intentionally redacted in Debug output to prevent
/// accidental logging of credentials.
#[derive(Clone)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for use in an `Authorization` header.
    ///
    /// The return value is sensitive - avoid logging it.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

// Lets CLI arguments parse straight into the redacting wrapper, so a raw
// token never sits in a plain String that could end up in a log line.
impl std::str::FromStr for SessionToken {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Returns the value of the cookie `name` within a raw cookie string.
///
/// The string is split on `;`, each piece is trimmed, and the first piece
/// whose text before the first `=` equals `name` wins. The returned value
/// is everything after that first `=`, with no URL-decoding applied.
#[must_use]
pub fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Extracts the platform access token from a raw cookie string.
#[must_use]
pub fn token_from_cookie_header(raw: &str) -> Option<SessionToken> {
    cookie_value(raw, ACCESS_TOKEN_COOKIE).map(SessionToken::new)
}

/// Reads a raw cookie string from a file, or from stdin when `source`
/// is `-`.
///
/// # Errors
///
/// Returns an error when the cookie source cannot be read.
pub fn load_cookie_header(source: &str) -> Result<String> {
    let raw = if source == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Cannot read cookies from stdin: {e}"))?;
        buffer
    } else {
        fs::read_to_string(source)
            .map_err(|e| anyhow!("Cannot open cookie file '{source}': {e}"))?
    };
    Ok(raw.trim().to_string())
}

/// Resolves the session token from the available sources, in priority order:
/// an explicit token, then a cookie file (or stdin), then a fallback cookie
/// string (typically from the environment).
///
/// A missing token is not an error; requests simply go out unauthenticated.
///
/// # Errors
///
/// Returns an error when a cookie source was named but cannot be read.
pub fn resolve_session_token(
    explicit: Option<&str>,
    cookie_source: Option<&str>,
    fallback_header: Option<&str>,
) -> Result<Option<SessionToken>> {
    if let Some(token) = explicit {
        debug!("using explicitly supplied token");
        return Ok(Some(SessionToken::new(token)));
    }

    if let Some(source) = cookie_source {
        let header = load_cookie_header(source)?;
        return match token_from_cookie_header(&header) {
            Some(token) => {
                info!(cookie = ACCESS_TOKEN_COOKIE, source, "resolved session token");
                Ok(Some(token))
            }
            None => {
                warn!(
                    cookie = ACCESS_TOKEN_COOKIE,
                    source, "cookie source has no access token cookie"
                );
                Ok(None)
            }
        };
    }

    if let Some(header) = fallback_header {
        let token = token_from_cookie_header(header);
        if token.is_some() {
            info!(
                cookie = ACCESS_TOKEN_COOKIE,
                "resolved session token from environment"
            );
        }
        return Ok(token);
    }

    debug!("no token source available; requests will be unauthenticated");
    Ok(None)
}
