use crate::cli::actions::{auth, resources, Action};
use anyhow::Result;

/// Execute the provided action.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => auth::login(args).await,
        Action::Logout(globals) => auth::logout(&globals).await,
        Action::Whoami(globals) => auth::whoami(&globals).await,
        Action::Navigate(args) => auth::navigate(args).await,
        Action::Can(args) => auth::can(args).await,
        Action::List(args) => resources::list(args).await,
        Action::ShowNews(args) => resources::show_news(args).await,
        Action::Delete(args) => resources::delete(args).await,
        Action::Enum(args) => resources::enumeration(args).await,
        Action::Content(globals) => resources::content(&globals).await,
    }
}
