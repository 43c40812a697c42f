//! Tracing configuration for the gallery binary.
//!
//! Sets up the tracing subscriber with custom filtering to suppress noisy
//! webview events like `SelectionDidChange`.
//!
//! Must be initialized BEFORE Dioxus launch to prevent dioxus-logger from
//! setting its own subscriber.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use gallery_dioxus::config::LoggingConfig;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Whether a formatted log line contains any suppressed pattern.
fn is_suppressed(message: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|pattern| message.contains(pattern.as_str()))
}

/// Event formatter that drops messages containing suppressed patterns.
struct FilteringFormatter {
    inner: fmt::format::Format,
    suppressed_patterns: Vec<String>,
}

impl FilteringFormatter {
    fn new(suppressed_patterns: Vec<String>) -> Self {
        Self {
            inner: fmt::format::Format::default(),
            suppressed_patterns,
        }
    }
}

impl<S, N> FormatEvent<S, N> for FilteringFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut message_buf = String::new();
        self.inner
            .format_event(ctx, Writer::new(&mut message_buf), event)?;

        if is_suppressed(&message_buf, &self.suppressed_patterns) {
            Ok(())
        } else {
            write!(writer, "{message_buf}")
        }
    }
}

/// Where formatted log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Open the configured log file, or fall back to stderr when it is unset or
/// cannot be created.
fn open_target(config: &LoggingConfig) -> (LogTarget, BoxMakeWriter) {
    let Some(path) = config.log_file.as_ref() else {
        return (LogTarget::Stderr, BoxMakeWriter::new(io::stderr));
    };
    match File::create(path) {
        Ok(file) => (
            LogTarget::File(path.clone()),
            BoxMakeWriter::new(Mutex::new(file)),
        ),
        Err(err) => {
            eprintln!("Cannot open log file {}: {err}", path.display());
            (LogTarget::Stderr, BoxMakeWriter::new(io::stderr))
        }
    }
}

/// Install the global tracing subscriber described by `config`.
///
/// `RUST_LOG` wins over the configured level. Records emitted through the
/// `log` facade are forwarded as well.
///
/// # Errors
///
/// Fails if a global subscriber or logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<LogTarget> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let (target, writer) = open_target(config);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(target == LogTarget::Stderr)
        .with_writer(writer)
        .event_format(FilteringFormatter::new(
            config.suppressed_patterns.clone(),
        ));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(target)
}
