//! Blogctl Core Library
//!
//! This library provides the core functionality for the blogctl tool,
//! a command-line client that performs moderation actions (delete,
//! publish/unpublish, inspect, list) against a blog platform's REST API.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`api`] - HTTP client for the blog API, with typed endpoint wrappers
//! - [`auth`] - Session token extraction from browser-exported cookies
//! - [`context`] - Per-invocation blog context (id, hints, credentials)

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod auth;
pub mod context;

// Re-export commonly used types
pub use api::{
    ApiClient, ApiError, BlogDetails, BlogListQuery, BlogLookup, BlogPage, BlogStatus,
    MutationAck, NewBlogPost, TagEntry,
};
pub use auth::{
    ACCESS_TOKEN_COOKIE, SessionToken, cookie_value, load_cookie_header, resolve_session_token,
    token_from_cookie_header,
};
pub use context::BlogContext;
