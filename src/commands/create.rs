//! Create command handler.

use anyhow::{Result, anyhow};
use blogctl_core::{ApiClient, NewBlogPost, SessionToken};
use tracing::{info, warn};

/// Creates a new blog post.
///
/// The server only sends an acknowledgement body for tagged posts; an
/// untagged create succeeds silently, so a generic confirmation is
/// printed instead.
///
/// # Errors
///
/// Returns an error when the API rejects the post (e.g. a duplicate
/// title) or cannot be reached.
pub async fn run_create_command(
    client: &ApiClient,
    post: &NewBlogPost,
    token: Option<&SessionToken>,
) -> Result<()> {
    match client
        .add_blog(post, token.map(SessionToken::expose))
        .await
    {
        Ok(Some(ack)) => {
            info!(title = %post.title, status = %ack.status, "blog created");
            println!("{}", ack.message);
            Ok(())
        }
        Ok(None) => {
            info!(title = %post.title, "blog created");
            println!("Blog '{}' created.", post.title);
            Ok(())
        }
        Err(error) => {
            warn!(title = %post.title, error = %error, "create failed");
            Err(anyhow!("Failed to create blog '{}': {error}", post.title))
        }
    }
}
