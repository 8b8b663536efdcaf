//! Request helper for the blog API.
//!
//! [`ApiClient`] performs one HTTP round trip per call: JSON headers always,
//! bearer authentication when a token is supplied, and a JSON body only when
//! the caller provides one. All failure kinds are normalized into
//! [`ApiError`] and logged before being returned.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use super::error::ApiError;
use super::models::{BlogListQuery, BlogLookup, BlogPage, MutationAck, NewBlogPost};

/// Connection establishment timeout in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Full-request timeout in seconds. API responses are small JSON bodies.
const READ_TIMEOUT_SECS: u64 = 60;

/// User-Agent sent with every request.
const USER_AGENT: &str = concat!("blogctl/", env!("CARGO_PKG_VERSION"));

/// Shape of the server's error bodies (FastAPI-style `detail` field).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// HTTP client for the blog platform API.
///
/// Designed to be created once per invocation and reused across calls,
/// taking advantage of connection pooling.
///
/// # Example
///
/// ```no_run
/// use blogctl_core::ApiClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new("http://127.0.0.1:8000")?;
/// let ack = client.delete_blog(7, Some("token")).await?;
/// println!("{}", ack.message);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client for the API server at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] when `base_url` is not an
    /// absolute http(s) URL, or [`ApiError::ClientBuild`] when the
    /// underlying HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url).map_err(|_| ApiError::invalid_base_url(&base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::invalid_base_url(&base_url));
        }

        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .connect_timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(std::time::Duration::from_secs(READ_TIMEOUT_SECS))
            .build()
            .map_err(|source| ApiError::ClientBuild { source })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends one request and returns the parsed JSON response body.
    ///
    /// Every request carries `Accept: application/json` and
    /// `Content-Type: application/json`; a bearer `Authorization` header is
    /// added when `token` is present, and `body` is serialized to JSON when
    /// present. No retries, no partial handling - one round trip.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] when the transport fails before a status
    ///   arrives
    /// - [`ApiError::Rejected`] for a non-success status with a JSON
    ///   `detail` field
    /// - [`ApiError::Status`] for a non-success status without one
    /// - [`ApiError::InvalidBody`] for a success status whose body is not
    ///   valid JSON
    #[instrument(level = "debug", skip(self, body, token), fields(method = %method, path = %path_and_query))]
    pub async fn send(
        &self,
        path_and_query: &str,
        method: Method,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{path_and_query}", self.base_url);

        let mut request = self
            .client
            .request(method, &url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => {
                if source.is_connect() || source.is_timeout() {
                    warn!(url = %url, error = %source, "cannot reach the blog API");
                }
                let error = ApiError::network(&url, source);
                warn!(error = %error, "request failed");
                return Err(error);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error = match response.json::<ErrorBody>().await {
                Ok(error_body) => ApiError::rejected(&url, status.as_u16(), error_body.detail),
                Err(parse_error) => {
                    debug!(url = %url, error = %parse_error, "error response body carried no JSON detail");
                    ApiError::status(&url, status.as_u16())
                }
            };
            warn!(status = status.as_u16(), error = %error, "request rejected");
            return Err(error);
        }

        debug!(status = status.as_u16(), "request succeeded");

        response.json::<Value>().await.map_err(|source| {
            let error = ApiError::invalid_body(&url, source);
            warn!(error = %error, "success response body was not JSON");
            error
        })
    }

    /// Creates a blog post. `POST /api/add_post` with a JSON body.
    ///
    /// The server acknowledges tagged posts with a message; an untagged
    /// create answers with an empty (null) body, hence the `Option`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`send`](Self::send) - notably
    /// [`ApiError::Rejected`] with the server's `detail` when the title
    /// already exists - plus [`ApiError::Decode`] when a non-null
    /// acknowledgement has an unexpected shape.
    #[instrument(level = "debug", skip(self, post, token), fields(title = %post.title))]
    pub async fn add_blog(
        &self,
        post: &NewBlogPost,
        token: Option<&str>,
    ) -> Result<Option<MutationAck>, ApiError> {
        let path = "/api/add_post";
        let body = post.to_body();
        let value = self.send(path, Method::POST, Some(&body), token).await?;
        self.decode(path, value)
    }

    /// Deletes a blog post. `DELETE /api/delete_blog/{id}`, no body.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`send`](Self::send), plus
    /// [`ApiError::Decode`] when the acknowledgement has an unexpected shape.
    #[instrument(level = "debug", skip(self, token))]
    pub async fn delete_blog(
        &self,
        blog_id: u64,
        token: Option<&str>,
    ) -> Result<MutationAck, ApiError> {
        let path = format!("/api/delete_blog/{blog_id}");
        let value = self.send(&path, Method::DELETE, None, token).await?;
        self.decode(&path, value)
    }

    /// Changes a blog post's publication status.
    /// `PATCH /api/change_blog_status/{id}?new_status=...`, no body - the
    /// target status travels only as a URL-encoded query parameter.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`send`](Self::send), plus
    /// [`ApiError::Decode`] when the acknowledgement has an unexpected shape.
    #[instrument(level = "debug", skip(self, token))]
    pub async fn change_blog_status(
        &self,
        blog_id: u64,
        new_status: &str,
        token: Option<&str>,
    ) -> Result<MutationAck, ApiError> {
        let path = format!(
            "/api/change_blog_status/{blog_id}?new_status={}",
            urlencoding::encode(new_status)
        );
        let value = self.send(&path, Method::PATCH, None, token).await?;
        self.decode(&path, value)
    }

    /// Fetches a single blog post. `GET /api/get_blog/{id}`.
    ///
    /// The server answers with HTTP 200 even when the post is missing or
    /// not visible to the caller; see [`BlogLookup`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`send`](Self::send), plus
    /// [`ApiError::Decode`] when the body matches neither lookup shape.
    #[instrument(level = "debug", skip(self, token))]
    pub async fn get_blog(&self, blog_id: u64, token: Option<&str>) -> Result<BlogLookup, ApiError> {
        let path = format!("/api/get_blog/{blog_id}");
        let value = self.send(&path, Method::GET, None, token).await?;
        self.decode(&path, value)
    }

    /// Lists published blog posts. `GET /api/blogs` with pagination and
    /// optional author/tag filters.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`send`](Self::send), plus
    /// [`ApiError::Decode`] when the page has an unexpected shape.
    #[instrument(level = "debug", skip(self, token))]
    pub async fn list_blogs(
        &self,
        query: &BlogListQuery,
        token: Option<&str>,
    ) -> Result<BlogPage, ApiError> {
        let path = format!("/api/blogs?{}", query.to_query_string());
        let value = self.send(&path, Method::GET, None, token).await?;
        self.decode(&path, value)
    }

    /// Returns the configured base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn decode<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        value: Value,
    ) -> Result<T, ApiError> {
        serde_json::from_value(value)
            .map_err(|source| ApiError::decode(format!("{}{path}", self.base_url), source))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_relative_base_url() {
        let result = ApiClient::new("/api");
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_new_rejects_non_http_scheme() {
        let result = ApiClient::new("ftp://example.com");
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = ApiClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_debug_shows_base_url_only() {
        let client = ApiClient::new("http://127.0.0.1:8000").unwrap();
        let rendered = format!("{client:?}");
        assert!(rendered.contains("http://127.0.0.1:8000"), "got: {rendered}");
        assert!(rendered.contains(".."), "expected non-exhaustive marker: {rendered}");
    }
}
