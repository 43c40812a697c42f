//! Command-line argument parsing.

use std::path::PathBuf;

use gallery_dioxus::MatchMode;

/// Options taken from the command line. Anything unset keeps the config value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Alternative `gallery.toml`.
    pub config: Option<PathBuf>,
    /// Album endpoint override.
    pub album_url: Option<String>,
    /// Highlight match mode override.
    pub match_mode: Option<MatchMode>,
    /// Problems met while parsing, logged once the subscriber is installed.
    pub warnings: Vec<String>,
}

/// Parse the process arguments.
pub fn parse_args() -> CliArgs {
    parse_from(std::env::args().skip(1))
}

/// Parse arguments (without the program name).
///
/// Unknown or incomplete arguments are skipped and reported in `warnings`,
/// since logging is not set up yet when the command line is read.
pub fn parse_from(args: impl IntoIterator<Item = String>) -> CliArgs {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(path) => parsed.config = Some(PathBuf::from(path)),
                None => parsed.warnings.push(format!("Missing value for {arg}")),
            },
            "--album-url" => match args.next() {
                Some(url) => parsed.album_url = Some(url),
                None => parsed.warnings.push(format!("Missing value for {arg}")),
            },
            "--match-mode" => match args.next().map(|value| value.parse::<MatchMode>()) {
                Some(Ok(mode)) => parsed.match_mode = Some(mode),
                Some(Err(err)) => parsed.warnings.push(format!("Ignoring --match-mode: {err}")),
                None => parsed.warnings.push(format!("Missing value for {arg}")),
            },
            other => parsed
                .warnings
                .push(format!("Ignoring unknown argument: {other}")),
        }
    }

    parsed
}
