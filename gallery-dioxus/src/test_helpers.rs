//! Test helpers for gallery tests.
//!
//! Provides a sample album, an in-memory [`PhotoSource`], a shared Tokio
//! runtime for driving async fetches from synchronous tests, and a logger
//! that records what each test thread logs.

use std::cell::Cell;
use std::sync::{Mutex, Once};
use std::thread::ThreadId;

use crate::api::{decode_album, FetchError, PhotoSource};
use crate::images::PlaceholderImages;
use crate::state::{Photo, RawPhoto};

/// Global Tokio runtime shared across all tests.
///
/// `reqwest` needs an active Tokio reactor, so the runtime lives in a
/// `OnceLock` for the entire test process.
static TEST_RUNTIME: std::sync::OnceLock<tokio::runtime::Runtime> = std::sync::OnceLock::new();

/// Run a future to completion on the shared test runtime.
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    TEST_RUNTIME
        .get_or_init(|| tokio::runtime::Runtime::new().expect("tokio runtime should start"))
        .block_on(future)
}

/// A log record as seen by [`CapturingLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLog {
    pub level: log::Level,
    pub message: String,
}

/// Global logger keeping every record together with the thread that emitted it.
///
/// Tests run in parallel, so each test only sees its own thread's records.
struct CapturingLogger {
    records: Mutex<Vec<(ThreadId, CapturedLog)>>,
}

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let entry = CapturedLog {
            level: record.level(),
            message: record.args().to_string(),
        };
        if let Ok(mut records) = self.records.lock() {
            records.push((std::thread::current().id(), entry));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

/// Install the capturing logger (once per process) and forget anything the
/// calling thread logged so far.
pub fn capture_logs() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in tests");
        log::set_max_level(log::LevelFilter::Trace);
    });
    let current = std::thread::current().id();
    if let Ok(mut records) = LOGGER.records.lock() {
        records.retain(|(thread, _)| *thread != current);
    }
}

/// Records logged by the calling thread since [`capture_logs`].
pub fn captured_logs() -> Vec<CapturedLog> {
    let current = std::thread::current().id();
    LOGGER
        .records
        .lock()
        .map(|records| {
            records
                .iter()
                .filter(|(thread, _)| *thread == current)
                .map(|(_, entry)| entry.clone())
                .collect()
        })
        .unwrap_or_default()
}

/// Error-level messages logged by the calling thread since [`capture_logs`].
pub fn captured_errors() -> Vec<String> {
    captured_logs()
        .into_iter()
        .filter(|entry| entry.level == log::Level::Error)
        .map(|entry| entry.message)
        .collect()
}

/// Address that refuses connections, for exercising network failures.
pub const UNREACHABLE_ALBUM_URL: &str = "http://127.0.0.1:1/albums/1/photos";

/// The three records used throughout the tests, as the endpoint returns them.
pub fn sample_raw_photos() -> Vec<RawPhoto> {
    [
        (1, "accusamus beatae ad facilis"),
        (2, "reprehenderit est deserunt velit"),
        (3, "officia porro iure quia iusto"),
    ]
    .into_iter()
    .map(|(id, title)| RawPhoto {
        id,
        title: title.to_string(),
    })
    .collect()
}

/// The sample album mapped to display photos with default placeholder URLs.
pub fn sample_photos() -> Vec<Photo> {
    let images = PlaceholderImages::default();
    sample_raw_photos()
        .into_iter()
        .map(|raw| Photo::from_raw(raw, &images))
        .collect()
}

enum MockOutcome {
    Photos(Vec<RawPhoto>),
    HttpStatus(u16),
    Body(&'static str),
}

/// In-memory photo source that counts how often it is asked for the album.
pub struct MockSource {
    outcome: MockOutcome,
    calls: Cell<usize>,
}

impl MockSource {
    fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: Cell::new(0),
        }
    }

    /// Source that succeeds with the given records.
    pub fn ok(photos: Vec<RawPhoto>) -> Self {
        Self::new(MockOutcome::Photos(photos))
    }

    /// Source that answers with a non-success status.
    pub fn http_status(status: u16) -> Self {
        Self::new(MockOutcome::HttpStatus(status))
    }

    /// Source that answers with the given raw body.
    pub fn body(body: &'static str) -> Self {
        Self::new(MockOutcome::Body(body))
    }

    /// Number of fetches issued so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl PhotoSource for MockSource {
    async fn fetch_album(&self) -> Result<Vec<RawPhoto>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        match &self.outcome {
            MockOutcome::Photos(photos) => Ok(photos.clone()),
            MockOutcome::HttpStatus(status) => Err(FetchError::HttpStatus { status: *status }),
            MockOutcome::Body(body) => decode_album(body.as_bytes()),
        }
    }
}
