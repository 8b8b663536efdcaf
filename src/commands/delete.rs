//! Delete command handler.

use std::io::{self, IsTerminal};

use anyhow::{Result, anyhow, bail};
use blogctl_core::{ApiClient, BlogContext, BlogLookup};
use tracing::{debug, info, warn};

/// Listing path printed after a successful deletion, so the user knows
/// where the remaining posts live.
const LISTING_PATH: &str = "/blogs/";

/// Deletes the blog in `ctx`.
///
/// Without `--yes` the user is prompted first; the prompt names the
/// post's current status and author when a pre-delete lookup can see
/// the post. A declined confirmation sends no delete request at all.
///
/// # Errors
///
/// Returns an error when confirmation cannot be collected (stdin is not
/// a terminal and `--yes` was not given), or when the API rejects the
/// deletion or cannot be reached.
pub async fn run_delete_command(
    client: &ApiClient,
    mut ctx: BlogContext,
    assume_yes: bool,
) -> Result<()> {
    let confirmed = if assume_yes {
        true
    } else {
        if !io::stdin().is_terminal() {
            bail!(
                "Refusing to delete blog {} without confirmation; pass --yes to proceed non-interactively",
                ctx.id
            );
        }
        ctx = with_target_hints(client, ctx).await;
        debug!(?ctx, "deletion target");
        super::confirm(&deletion_prompt(&ctx))?
    };

    if !confirmed {
        info!(blog_id = ctx.id, "deletion not confirmed, nothing sent");
        println!("Aborted. Blog {} was not deleted.", ctx.id);
        return Ok(());
    }

    match client.delete_blog(ctx.id, ctx.token_str()).await {
        Ok(ack) => {
            info!(blog_id = ctx.id, status = %ack.status, "blog deleted");
            println!("{}", ack.message);
            println!(
                "Browse the remaining posts at {}{LISTING_PATH}",
                client.base_url()
            );
            Ok(())
        }
        Err(error) => {
            warn!(blog_id = ctx.id, error = %error, "delete failed");
            Err(anyhow!("Failed to delete blog {}: {error}", ctx.id))
        }
    }
}

/// Fills the context's status/author hints from a lookup of the target
/// post. Best-effort: a post we cannot see just leaves the hints empty.
async fn with_target_hints(client: &ApiClient, ctx: BlogContext) -> BlogContext {
    match client.get_blog(ctx.id, ctx.token_str()).await {
        Ok(BlogLookup::Found(blog)) => {
            let author = blog.author.to_string();
            ctx.with_hints(Some(blog.status), Some(author))
        }
        Ok(BlogLookup::Missing { message, .. }) => {
            debug!(blog_id = ctx.id, %message, "no pre-delete details available");
            ctx
        }
        Err(error) => {
            debug!(blog_id = ctx.id, error = %error, "pre-delete lookup failed");
            ctx
        }
    }
}

fn deletion_prompt(ctx: &BlogContext) -> String {
    match (ctx.status.as_deref(), ctx.author.as_deref()) {
        (Some(status), Some(author)) => format!(
            "Delete blog {} ({status}, author {author})? This cannot be undone",
            ctx.id
        ),
        _ => format!("Delete blog {}? This cannot be undone", ctx.id),
    }
}
