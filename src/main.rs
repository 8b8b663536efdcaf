//! CLI entry point for the blogctl tool.

use std::env;

use anyhow::Result;
use blogctl_core::{
    ApiClient, BlogContext, BlogListQuery, NewBlogPost, SessionToken, resolve_session_token,
};
use clap::Parser;
use tracing::debug;

mod cli;
mod commands;

use cli::{Args, Command};

/// Environment variable holding a raw cookie string, as a fallback when
/// neither --token nor --cookie-file is given.
const COOKIES_ENV_VAR: &str = "BLOGCTL_COOKIES";

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Safe to dump: the token field renders redacted.
    debug!(?args, "CLI arguments parsed");

    let env_cookies = env::var(COOKIES_ENV_VAR).ok();
    let token = resolve_session_token(
        args.token.as_ref().map(SessionToken::expose),
        args.cookie_file.as_deref(),
        env_cookies.as_deref(),
    )?;

    let client = ApiClient::new(&args.api_url)?;

    match args.command {
        Command::Create {
            title,
            content,
            short_description,
            tags,
        } => {
            let post = NewBlogPost {
                title,
                content,
                short_description,
                tags,
            };
            commands::run_create_command(&client, &post, token.as_ref()).await
        }
        Command::Delete { id, yes } => {
            let ctx = BlogContext::new(id).with_token(token);
            debug!(?ctx, "assembled blog context");
            commands::run_delete_command(&client, ctx, yes).await
        }
        Command::SetStatus { id, status } => {
            let ctx = BlogContext::new(id).with_token(token);
            debug!(?ctx, "assembled blog context");
            commands::run_set_status_command(&client, &ctx, status).await
        }
        Command::Show { id } => {
            let ctx = BlogContext::new(id).with_token(token);
            debug!(?ctx, "assembled blog context");
            commands::run_show_command(&client, &ctx).await
        }
        Command::List {
            author,
            tag,
            page,
            page_size,
        } => {
            let query = BlogListQuery {
                author_id: author,
                tag,
                page,
                page_size,
            };
            commands::run_list_command(&client, &query, token.as_ref()).await
        }
    }
}
