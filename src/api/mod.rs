//! HTTP client for the blog platform REST API.
//!
//! The [`ApiClient`] wraps a pooled `reqwest::Client` and exposes one typed
//! wrapper per endpoint on top of a shared request helper that normalizes
//! headers, bearer authentication, and error handling.

mod client;
mod error;
mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    BlogDetails, BlogListQuery, BlogLookup, BlogPage, BlogStatus, MutationAck, NewBlogPost,
    TagEntry,
};
