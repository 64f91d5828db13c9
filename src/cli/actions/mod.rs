pub mod auth;
pub mod resources;

// Internal "interpreter" for `Action`.
mod run;

use crate::cli::globals::GlobalArgs;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug)]
pub enum Action {
    Login(auth::LoginArgs),
    Logout(GlobalArgs),
    Whoami(GlobalArgs),
    Navigate(auth::NavigateArgs),
    Can(auth::CanArgs),
    List(resources::ListArgs),
    ShowNews(resources::ShowArgs),
    Delete(resources::DeleteArgs),
    Enum(resources::EnumArgs),
    Content(GlobalArgs),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Command output goes to stdout as pretty JSON; logs stay on stderr.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
