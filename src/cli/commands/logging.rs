use clap::{builder::ValueParser, Arg, Command};

pub const ARG_VERBOSITY: &str = "verbosity";
pub const ARG_LOG_FORMAT: &str = "log-format";

/// Level names in verbosity order; the index is the `-v` count.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Accepts a level name from `LOG_LEVELS` or its index.
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        let level = level.trim().to_lowercase();
        let position = level
            .parse::<usize>()
            .ok()
            .filter(|index| *index < LOG_LEVELS.len())
            .or_else(|| LOG_LEVELS.iter().position(|name| *name == level));

        position
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| {
                format!(
                    "expected one of {} or 0-{}",
                    LOG_LEVELS.join(", "),
                    LOG_LEVELS.len() - 1
                )
            })
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("DASBOR_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .arg(
            Arg::new(ARG_LOG_FORMAT)
                .long("log-format")
                .help("Log output format, written to stderr")
                .env("DASBOR_LOG_FORMAT")
                .global(true)
                .default_value("text")
                .value_parser(["text", "json"]),
        )
}
