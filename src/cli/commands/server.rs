use clap::{Arg, Command};

pub const ARG_SERVER_URL: &str = "server-url";
pub const ARG_SESSION_FILE: &str = "session-file";
pub const ARG_TIMEOUT: &str = "timeout";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_SERVER_URL)
                .short('s')
                .long("server-url")
                .help("Backend base URL, example: https://api.dasbor.dev")
                .env("DASBOR_SERVER_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long("session-file")
                .help("Where the session is kept (default: ~/.dasbor/session.json)")
                .env("DASBOR_SESSION_FILE")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long("timeout")
                .help("Request timeout in seconds")
                .env("DASBOR_TIMEOUT_SECS")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}
