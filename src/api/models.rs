//! Typed response models for the blog API.
//!
//! Field names mirror the server's JSON exactly; everything the server may
//! omit is optional with a default.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Publication status of a blog post.
///
/// The server accepts exactly these two values for
/// `change_blog_status`; anything else is rejected before a request
/// is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogStatus {
    /// Visible only to its author.
    Draft,
    /// Publicly listed.
    Published,
}

impl BlogStatus {
    /// The wire representation used in the `new_status` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlogStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(format!("invalid status '{other}': use 'draft' or 'published'")),
        }
    }
}

/// Payload for creating a blog post via `add_post`.
///
/// Tags are optional; the server lowercases and deduplicates them, and
/// attaches them to the new post.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    /// Post title (must be unique on the server).
    pub title: String,
    /// Full post body.
    pub content: String,
    /// Teaser shown in listings.
    pub short_description: String,
    /// Tag names to attach.
    pub tags: Vec<String>,
}

impl NewBlogPost {
    /// Renders the JSON request body the server expects.
    #[must_use]
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title,
            "content": self.content,
            "short_description": self.short_description,
            "tags": self.tags,
        })
    }
}

/// Acknowledgement returned by the mutating endpoints (create, delete,
/// change-status).
#[derive(Debug, Clone, Deserialize)]
pub struct MutationAck {
    /// `"success"`, or `"info"` when a status change was a no-op.
    pub status: String,
    /// Human-readable acknowledgement text.
    pub message: String,
    /// The affected blog id (change-status only).
    #[serde(default)]
    pub blog_id: Option<u64>,
    /// The blog's status after the operation (change-status only).
    #[serde(default)]
    pub current_status: Option<String>,
}

/// A tag attached to a blog post.
#[derive(Debug, Clone, Deserialize)]
pub struct TagEntry {
    /// Tag id.
    pub id: u64,
    /// Tag name (lowercase on the server).
    pub name: String,
}

/// Full blog post as returned by `get_blog` and the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogDetails {
    /// Blog id.
    pub id: u64,
    /// Author's user id.
    pub author: u64,
    /// Post title.
    pub title: String,
    /// Full post body.
    pub content: String,
    /// Teaser shown in listings.
    pub short_description: String,
    /// Creation timestamp, as formatted by the server.
    pub created_at: String,
    /// `"draft"` or `"published"`.
    pub status: String,
    /// Attached tags.
    #[serde(default)]
    pub tags: Vec<TagEntry>,
}

/// Result of a single-blog lookup.
///
/// The server answers `get_blog` with HTTP 200 in both cases: a full blog
/// object when the post is visible to the caller, or a `{message, status}`
/// body when it is missing or is a draft belonging to someone else.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BlogLookup {
    /// The post exists and is visible to the caller.
    Found(BlogDetails),
    /// The post is missing or not visible; `message` explains why.
    Missing {
        /// Server-supplied explanation.
        message: String,
        /// Always `"error"` in practice.
        status: String,
    },
}

/// One page of published blog posts.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogPage {
    /// 1-based page number that was served.
    pub page: u32,
    /// Total number of pages for the query.
    pub total_page: u32,
    /// Total number of matching posts.
    pub total_result: u64,
    /// The posts on this page.
    #[serde(default)]
    pub blogs: Vec<BlogDetails>,
}

/// Filters and pagination for the blog listing endpoint.
#[derive(Debug, Clone)]
pub struct BlogListQuery {
    /// Restrict to a single author's posts.
    pub author_id: Option<u64>,
    /// Case-insensitive substring match against tag names.
    pub tag: Option<String>,
    /// 1-based page number.
    pub page: u32,
    /// Posts per page (server minimum is 10).
    pub page_size: u32,
}

impl Default for BlogListQuery {
    fn default() -> Self {
        Self {
            author_id: None,
            tag: None,
            page: 1,
            page_size: 10,
        }
    }
}

impl BlogListQuery {
    /// Renders the query string, URL-encoding the tag filter.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&page_size={}", self.page, self.page_size);
        if let Some(author_id) = self.author_id {
            query.push_str(&format!("&author_id={author_id}"));
        }
        if let Some(tag) = &self.tag {
            query.push_str(&format!("&tag={}", urlencoding::encode(tag)));
        }
        query
    }
}
