pub mod logging;
pub mod server;

use crate::cli::actions::resources::ResourceKind;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

fn list_command() -> Command {
    Command::new("list")
        .about("List one page of a resource")
        .arg(
            Arg::new("resource")
                .help("Resource to list")
                .required(true)
                .value_parser(ResourceKind::LISTABLE),
        )
        .arg(
            Arg::new("page")
                .long("page")
                .help("Page number (default: 1)")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .help("Rows per page (default: 10)")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(Arg::new("search").long("search").help("Search term"))
}

fn auth_commands(command: Command) -> Command {
    command
        .subcommand(
            Command::new("login")
                .about("Sign in and store the session")
                .arg(
                    Arg::new("nim")
                        .long("nim")
                        .help("Student number used as login")
                        .env("DASBOR_NIM")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Account password")
                        .env("DASBOR_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
        .subcommand(Command::new("logout").about("Sign out and clear the stored session"))
        .subcommand(Command::new("whoami").about("Show the current user, roles, permissions and menus"))
        .subcommand(
            Command::new("navigate")
                .about("Run the route guard for a path and print the decision")
                .arg(Arg::new("path").help("Requested path, example: /dashboard/users").required(true)),
        )
        .subcommand(
            Command::new("can")
                .about("Show which actions the current user may take on a resource")
                .arg(Arg::new("resource").help("Resource name, example: news").required(true)),
        )
}

fn resource_commands(command: Command) -> Command {
    command
        .subcommand(list_command())
        .subcommand(
            Command::new("show")
                .about("Show a single record")
                .subcommand_required(true)
                .subcommand(
                    Command::new("news")
                        .about("Show one news article")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a record")
                .arg(
                    Arg::new("resource")
                        .required(true)
                        .value_parser(ResourceKind::DELETABLE),
                )
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("enum")
                .about("List the values of an enumeration")
                .arg(Arg::new("key").required(true)),
        )
        .subcommand(Command::new("content").about("Show public landing-page activities"))
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("dasbor")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true);

    let command = server::with_args(command);
    let command = logging::with_args(command);
    let command = auth_commands(command);
    resource_commands(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "dasbor");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_global_args_after_subcommand() {
        temp_env::with_vars_unset(
            ["DASBOR_SERVER_URL", "DASBOR_SESSION_FILE", "DASBOR_TIMEOUT_SECS"],
            || {
                let matches = new().get_matches_from(vec![
                    "dasbor",
                    "whoami",
                    "--server-url",
                    "http://localhost:8000",
                    "--session-file",
                    "/tmp/dasbor.json",
                    "--timeout",
                    "3",
                ]);

                assert_eq!(
                    matches.get_one::<String>(server::ARG_SERVER_URL).cloned(),
                    Some("http://localhost:8000".to_string())
                );
                assert_eq!(
                    matches.get_one::<PathBuf>(server::ARG_SESSION_FILE).cloned(),
                    Some(PathBuf::from("/tmp/dasbor.json"))
                );
                assert_eq!(matches.get_one::<u64>(server::ARG_TIMEOUT).copied(), Some(3));
                assert_eq!(matches.subcommand_name(), Some("whoami"));
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("DASBOR_SERVER_URL", Some("https://api.dasbor.dev")),
                ("DASBOR_TIMEOUT_SECS", Some("30")),
                ("DASBOR_LOG_LEVEL", Some("info")),
                ("DASBOR_LOG_FORMAT", Some("json")),
            ],
            || {
                let matches = new().get_matches_from(vec!["dasbor", "content"]);
                assert_eq!(
                    matches.get_one::<String>(server::ARG_SERVER_URL).cloned(),
                    Some("https://api.dasbor.dev".to_string())
                );
                assert_eq!(matches.get_one::<u64>(server::ARG_TIMEOUT).copied(), Some(30));
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                assert_eq!(
                    matches.get_one::<String>(logging::ARG_LOG_FORMAT).cloned(),
                    Some("json".to_string())
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("DASBOR_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["dasbor", "logout"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("DASBOR_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["dasbor".to_string(), "logout".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_login_password_from_env() {
        temp_env::with_vars(
            [
                ("DASBOR_PASSWORD", Some("hunter2")),
                ("DASBOR_NIM", None::<&str>),
            ],
            || {
                let matches = new().get_matches_from(vec!["dasbor", "login", "--nim", "2201"]);
                let (name, login) = matches.subcommand().expect("subcommand");
                assert_eq!(name, "login");
                assert_eq!(
                    login.get_one::<String>("password").cloned(),
                    Some("hunter2".to_string())
                );
            },
        );
    }

    #[test]
    fn test_list_rejects_unknown_resource() {
        let result = new().try_get_matches_from(vec!["dasbor", "list", "widgets"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_paging_flags() {
        let matches = new().get_matches_from(vec![
            "dasbor", "list", "news", "--page", "2", "--limit", "25", "--search", "rapat",
        ]);
        let (_, list) = matches.subcommand().expect("subcommand");
        assert_eq!(list.get_one::<String>("resource").cloned(), Some("news".to_string()));
        assert_eq!(list.get_one::<u32>("page").copied(), Some(2));
        assert_eq!(list.get_one::<u32>("limit").copied(), Some(25));
        assert_eq!(list.get_one::<String>("search").cloned(), Some("rapat".to_string()));
    }

    #[test]
    fn test_users_cannot_be_deleted() {
        let result = new().try_get_matches_from(vec!["dasbor", "delete", "users", "1"]);
        assert!(result.is_err());
    }
}
