//! Show command handler.

use anyhow::{Result, anyhow, bail};
use blogctl_core::{ApiClient, BlogContext, BlogDetails, BlogLookup};
use tracing::{info, warn};

/// Fetches and prints a single blog post.
///
/// # Errors
///
/// Returns an error when the post is missing or not visible to the
/// caller, or when the API cannot be reached.
pub async fn run_show_command(client: &ApiClient, ctx: &BlogContext) -> Result<()> {
    match client.get_blog(ctx.id, ctx.token_str()).await {
        Ok(BlogLookup::Found(blog)) => {
            info!(blog_id = blog.id, status = %blog.status, "fetched blog");
            print_blog(&blog);
            Ok(())
        }
        Ok(BlogLookup::Missing { message, .. }) => {
            // HTTP 200, but the server says the post is not for our eyes.
            warn!(blog_id = ctx.id, %message, "blog not available");
            bail!("{message}");
        }
        Err(error) => {
            warn!(blog_id = ctx.id, error = %error, "show failed");
            Err(anyhow!("Failed to fetch blog {}: {error}", ctx.id))
        }
    }
}

fn print_blog(blog: &BlogDetails) {
    println!("#{} {}", blog.id, blog.title);
    println!("status: {} | author: {} | created: {}", blog.status, blog.author, blog.created_at);
    if !blog.tags.is_empty() {
        let names: Vec<&str> = blog.tags.iter().map(|tag| tag.name.as_str()).collect();
        println!("tags: {}", names.join(", "));
    }
    println!();
    println!("{}", blog.content);
}
