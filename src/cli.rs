//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand};

use blogctl_core::{BlogStatus, SessionToken};

/// Default API server, matching the platform's local development setup.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Moderate posts on the blog platform from the command line.
///
/// Blogctl talks to the platform's REST API: delete posts, move them
/// between draft and published, inspect a single post, or list what is
/// published. Authentication uses the browser session - export your
/// cookies to a file or paste the token directly.
#[derive(Parser, Debug)]
#[command(name = "blogctl")]
#[command(version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Base URL of the blog API server
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Bearer token for the API (overrides cookie sources)
    //
    // Parsed straight into SessionToken so a verbose dump of the parsed
    // arguments renders the credential redacted.
    #[arg(long)]
    pub token: Option<SessionToken>,

    /// File holding your browser's Cookie header for the platform
    /// ("-" reads it from stdin)
    #[arg(long)]
    pub cookie_file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// The action to perform.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete a blog post (asks for confirmation)
    Delete {
        /// Id of the post to delete
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Create a new blog post
    Create {
        /// Post title (must be unique)
        #[arg(long)]
        title: String,

        /// Full post body
        #[arg(long)]
        content: String,

        /// Teaser shown in listings
        #[arg(long)]
        short_description: String,

        /// Tag to attach (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Change a blog post's publication status
    SetStatus {
        /// Id of the post to update
        id: u64,

        /// Target status: draft or published
        status: BlogStatus,
    },

    /// Show a single blog post
    Show {
        /// Id of the post to display
        id: u64,
    },

    /// List published blog posts
    List {
        /// Only show posts by this author id
        #[arg(long)]
        author: Option<u64>,

        /// Only show posts whose tags match this text
        #[arg(long)]
        tag: Option<String>,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Posts per page (10-100, server minimum is 10)
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(10..=100))]
        page_size: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_delete_parses_id() {
        let args = Args::try_parse_from(["blogctl", "delete", "7"]).unwrap();
        match args.command {
            Command::Delete { id, yes } => {
                assert_eq!(id, 7);
                assert!(!yes);
            }
            _ => panic!("expected delete command"),
        }
    }

    #[test]
    fn test_cli_delete_requires_id() {
        let result = Args::try_parse_from(["blogctl", "delete"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_delete_yes_flag() {
        let args = Args::try_parse_from(["blogctl", "delete", "7", "--yes"]).unwrap();
        match args.command {
            Command::Delete { yes, .. } => assert!(yes),
            _ => panic!("expected delete command"),
        }

        let args = Args::try_parse_from(["blogctl", "delete", "7", "-y"]).unwrap();
        match args.command {
            Command::Delete { yes, .. } => assert!(yes),
            _ => panic!("expected delete command"),
        }
    }

    #[test]
    fn test_cli_set_status_parses_target() {
        let args = Args::try_parse_from(["blogctl", "set-status", "7", "published"]).unwrap();
        match args.command {
            Command::SetStatus { id, status } => {
                assert_eq!(id, 7);
                assert_eq!(status, BlogStatus::Published);
            }
            _ => panic!("expected set-status command"),
        }
    }

    #[test]
    fn test_cli_set_status_rejects_unknown_status() {
        let result = Args::try_parse_from(["blogctl", "set-status", "7", "archived"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_list_defaults() {
        let args = Args::try_parse_from(["blogctl", "list"]).unwrap();
        match args.command {
            Command::List {
                author,
                tag,
                page,
                page_size,
            } => {
                assert_eq!(author, None);
                assert_eq!(tag, None);
                assert_eq!(page, 1);
                assert_eq!(page_size, 10);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_cli_list_filters() {
        let args = Args::try_parse_from([
            "blogctl", "list", "--author", "3", "--tag", "rust", "--page", "2",
        ])
        .unwrap();
        match args.command {
            Command::List {
                author, tag, page, ..
            } => {
                assert_eq!(author, Some(3));
                assert_eq!(tag.as_deref(), Some("rust"));
                assert_eq!(page, 2);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_cli_list_page_zero_rejected() {
        let result = Args::try_parse_from(["blogctl", "list", "--page", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_list_page_size_below_server_minimum_rejected() {
        let result = Args::try_parse_from(["blogctl", "list", "--page-size", "5"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_global_flags() {
        let args = Args::try_parse_from([
            "blogctl",
            "-vv",
            "--api-url",
            "http://blog.example.com",
            "--token",
            "tok",
            "show",
            "1",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        assert!(!args.quiet);
        assert_eq!(args.api_url, "http://blog.example.com");
        assert_eq!(args.token.as_ref().map(SessionToken::expose), Some("tok"));
    }

    #[test]
    fn test_cli_debug_output_redacts_token() {
        let args =
            Args::try_parse_from(["blogctl", "--token", "supersecret", "show", "1"]).unwrap();
        let rendered = format!("{args:?}");
        assert!(!rendered.contains("supersecret"), "got: {rendered}");
        assert!(rendered.contains("REDACTED"), "got: {rendered}");
    }

    #[test]
    fn test_cli_create_parses_fields_and_repeated_tags() {
        let args = Args::try_parse_from([
            "blogctl",
            "create",
            "--title",
            "Hello",
            "--content",
            "Body",
            "--short-description",
            "Teaser",
            "--tag",
            "rust",
            "--tag",
            "web",
        ])
        .unwrap();
        match args.command {
            Command::Create {
                title,
                content,
                short_description,
                tags,
            } => {
                assert_eq!(title, "Hello");
                assert_eq!(content, "Body");
                assert_eq!(short_description, "Teaser");
                assert_eq!(tags, ["rust", "web"]);
            }
            _ => panic!("expected create command"),
        }
    }

    #[test]
    fn test_cli_create_requires_title() {
        let result = Args::try_parse_from([
            "blogctl",
            "create",
            "--content",
            "Body",
            "--short-description",
            "Teaser",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_default_api_url() {
        let args = Args::try_parse_from(["blogctl", "show", "1"]).unwrap();
        assert_eq!(args.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_cli_subcommand_required() {
        let result = Args::try_parse_from(["blogctl"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        // --help causes early exit, so we check it returns an error with Help kind
        let result = Args::try_parse_from(["blogctl", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_version_flag_shows_version() {
        let result = Args::try_parse_from(["blogctl", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
