//! List command handler.

use anyhow::{Result, anyhow};
use blogctl_core::{ApiClient, BlogListQuery, SessionToken};
use tracing::{info, warn};

/// Lists published blog posts, one line per post.
///
/// # Errors
///
/// Returns an error when the API rejects the query or cannot be reached.
pub async fn run_list_command(
    client: &ApiClient,
    query: &BlogListQuery,
    token: Option<&SessionToken>,
) -> Result<()> {
    let page = match client
        .list_blogs(query, token.map(SessionToken::expose))
        .await
    {
        Ok(page) => page,
        Err(error) => {
            warn!(error = %error, "listing failed");
            return Err(anyhow!("Failed to list blogs: {error}"));
        }
    };

    info!(
        page = page.page,
        total_page = page.total_page,
        total_result = page.total_result,
        "fetched blog listing"
    );

    if page.blogs.is_empty() {
        println!("No published blogs found.");
        return Ok(());
    }

    println!(
        "Page {} of {} ({} posts total)",
        page.page, page.total_page, page.total_result
    );
    for blog in &page.blogs {
        let tags = if blog.tags.is_empty() {
            String::new()
        } else {
            let names: Vec<&str> = blog.tags.iter().map(|tag| tag.name.as_str()).collect();
            format!(" [{}]", names.join(", "))
        };
        println!(
            "#{} {} - by {}{} - {}",
            blog.id, blog.title, blog.author, tags, blog.short_description
        );
    }

    Ok(())
}
