//! Set-status command handler.

use anyhow::{Result, anyhow};
use blogctl_core::{ApiClient, BlogContext, BlogLookup, BlogStatus};
use tracing::{info, warn};

/// Changes the publication status of the blog in `ctx`, then re-fetches
/// the post so the user sees the fresh server-side state.
///
/// The refresh is best-effort: a failure there is logged but does not
/// turn a successful status change into an error.
///
/// # Errors
///
/// Returns an error when the API rejects the status change or cannot be
/// reached; the message is suitable for display to the user.
pub async fn run_set_status_command(
    client: &ApiClient,
    ctx: &BlogContext,
    new_status: BlogStatus,
) -> Result<()> {
    let ack = match client
        .change_blog_status(ctx.id, new_status.as_str(), ctx.token_str())
        .await
    {
        Ok(ack) => ack,
        Err(error) => {
            warn!(blog_id = ctx.id, target = %new_status, error = %error, "status change failed");
            return Err(anyhow!(
                "Failed to change status of blog {}: {error}",
                ctx.id
            ));
        }
    };

    info!(blog_id = ctx.id, status = %ack.status, target = %new_status, "status change accepted");
    println!("{}", ack.message);

    match client.get_blog(ctx.id, ctx.token_str()).await {
        Ok(BlogLookup::Found(blog)) => {
            println!("Blog {} ('{}') is now '{}'.", blog.id, blog.title, blog.status);
        }
        Ok(BlogLookup::Missing { message, .. }) => {
            warn!(blog_id = ctx.id, %message, "could not refresh blog after status change");
        }
        Err(error) => {
            warn!(blog_id = ctx.id, error = %error, "could not refresh blog after status change");
        }
    }

    Ok(())
}
