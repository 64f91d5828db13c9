use crate::{
    app_lib::ListParams,
    cli::{
        actions::{auth, resources, Action},
        commands::server,
        globals::GlobalArgs,
    },
};
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;
use std::path::PathBuf;

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: {id}"))
}

fn globals(matches: &ArgMatches) -> GlobalArgs {
    GlobalArgs {
        server_url: matches.get_one::<String>(server::ARG_SERVER_URL).cloned(),
        session_file: matches.get_one::<PathBuf>(server::ARG_SESSION_FILE).cloned(),
        timeout_secs: matches.get_one::<u64>(server::ARG_TIMEOUT).copied(),
    }
}

fn list_params(matches: &ArgMatches) -> ListParams {
    ListParams {
        limit: matches.get_one::<u32>("limit").copied(),
        page: matches.get_one::<u32>("page").copied(),
        search: matches.get_one::<String>("search").cloned(),
    }
}

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = globals(matches);

    let action = match matches.subcommand() {
        Some(("login", sub)) => Action::Login(auth::LoginArgs {
            globals,
            nim: required(sub, "nim")?,
            password: SecretString::from(required(sub, "password")?),
        }),
        Some(("logout", _)) => Action::Logout(globals),
        Some(("whoami", _)) => Action::Whoami(globals),
        Some(("navigate", sub)) => Action::Navigate(auth::NavigateArgs {
            globals,
            path: required(sub, "path")?,
        }),
        Some(("can", sub)) => Action::Can(auth::CanArgs {
            globals,
            resource: required(sub, "resource")?,
        }),
        Some(("list", sub)) => Action::List(resources::ListArgs {
            globals,
            kind: required(sub, "resource")?.parse()?,
            params: list_params(sub),
        }),
        Some(("show", sub)) => match sub.subcommand() {
            Some(("news", news)) => Action::ShowNews(resources::ShowArgs {
                globals,
                id: required(news, "id")?,
            }),
            _ => bail!("unknown record type for show"),
        },
        Some(("delete", sub)) => Action::Delete(resources::DeleteArgs {
            globals,
            kind: required(sub, "resource")?.parse()?,
            id: required(sub, "id")?,
        }),
        Some(("enum", sub)) => Action::Enum(resources::EnumArgs {
            globals,
            key: required(sub, "key")?,
        }),
        Some(("content", _)) => Action::Content(globals),
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("a command is required"),
    };

    Ok(action)
}
