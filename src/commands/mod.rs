//! CLI command handlers.

mod create;
mod delete;
mod list;
mod show;
mod status;

use std::io::{self, Write};

use anyhow::Result;

pub use create::run_create_command;
pub use delete::run_delete_command;
pub use list::run_list_command;
pub use show::run_show_command;
pub use status::run_set_status_command;

/// Prints a yes/no prompt and reads the answer from stdin.
///
/// Anything other than `y`/`yes` (case-insensitive) counts as a no.
///
/// # Errors
///
/// Returns an error when the prompt cannot be written or the answer
/// cannot be read.
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
