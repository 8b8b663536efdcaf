//! Error types for blog API calls.
//!
//! Failures are modeled as an explicit tagged enum rather than a single
//! message string, so callers can branch on the failure kind while the
//! `Display` text stays suitable for end users.

use thiserror::Error;

/// Errors that can occur while calling the blog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS resolution, connection refused, TLS
    /// errors, timeouts) - the request never produced an HTTP status.
    #[error("network error calling {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status whose body carried a JSON `detail` field.
    ///
    /// The display text is exactly the server-supplied detail.
    #[error("{detail}")]
    Rejected {
        /// The URL that was rejected.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The server's human-readable explanation.
        detail: String,
    },

    /// Non-success HTTP status without a usable JSON body.
    #[error("HTTP Error: {status}")]
    Status {
        /// The URL that was rejected.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Success status, but the response body was not valid JSON.
    #[error("invalid JSON in response from {url}: {source}")]
    InvalidBody {
        /// The URL whose response could not be parsed.
        url: String,
        /// The underlying body/parse error.
        #[source]
        source: reqwest::Error,
    },

    /// The response was valid JSON but did not match the expected shape.
    #[error("unexpected response shape from {url}: {source}")]
    Decode {
        /// The URL whose response had an unexpected shape.
        url: String,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The configured API base URL is not a valid absolute URL.
    #[error("invalid API base URL: {url}")]
    InvalidBaseUrl {
        /// The offending base URL string.
        url: String,
    },

    /// HTTP client construction failed.
    #[error("failed to build HTTP client: {source}")]
    ClientBuild {
        /// The underlying builder error.
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Creates a transport-level error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a rejection error carrying the server's `detail` message.
    pub fn rejected(url: impl Into<String>, status: u16, detail: impl Into<String>) -> Self {
        Self::Rejected {
            url: url.into(),
            status,
            detail: detail.into(),
        }
    }

    /// Creates a bare HTTP status error.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Creates an error for a success response whose body was not JSON.
    pub fn invalid_body(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::InvalidBody {
            url: url.into(),
            source,
        }
    }

    /// Creates an error for a JSON body that did not match the expected type.
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Creates an invalid base URL error.
    pub fn invalid_base_url(url: impl Into<String>) -> Self {
        Self::InvalidBaseUrl { url: url.into() }
    }

    /// Returns the HTTP status code, when the server produced one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_exactly_the_detail() {
        let error = ApiError::rejected("http://localhost/api/delete_blog/7", 404, "not found");
        assert_eq!(error.to_string(), "not found");
    }

    #[test]
    fn test_status_displays_http_error_with_code() {
        let error = ApiError::status("http://localhost/api/delete_blog/7", 503);
        assert_eq!(error.to_string(), "HTTP Error: 503");
    }

    #[test]
    fn test_status_code_present_only_for_http_rejections() {
        let rejected = ApiError::rejected("http://localhost/x", 403, "forbidden");
        assert_eq!(rejected.status_code(), Some(403));

        let bare = ApiError::status("http://localhost/x", 500);
        assert_eq!(bare.status_code(), Some(500));

        let base = ApiError::invalid_base_url("not a url");
        assert_eq!(base.status_code(), None);
    }

    #[test]
    fn test_invalid_base_url_display_mentions_url() {
        let error = ApiError::invalid_base_url("not a url");
        let msg = error.to_string();
        assert!(msg.contains("invalid API base URL"), "got: {msg}");
        assert!(msg.contains("not a url"), "got: {msg}");
    }

    #[test]
    fn test_decode_display_mentions_url() {
        let source = serde_json::from_value::<u32>(serde_json::json!("nope")).unwrap_err();
        let error = ApiError::decode("http://localhost/api/get_blog/1", source);
        let msg = error.to_string();
        assert!(msg.contains("unexpected response shape"), "got: {msg}");
        assert!(msg.contains("/api/get_blog/1"), "got: {msg}");
    }
}
