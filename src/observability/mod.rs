//! Observability for the person service
//!
//! - Structured logging through `tracing`
//! - Named lifecycle events
//!
//! # Usage
//!
//! ```ignore
//! use person_api::observability::{self, Event};
//!
//! observability::init_logging();
//! observability::log_event(Event::BootStart);
//!
//! // events with context go through the tracing macros directly
//! tracing::info!(event = Event::DocsWritten.as_str(), dir = "/tmp/docs");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{env_filter, init_logging, DEFAULT_FILTER};

use tracing::{error, info};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    if event.is_fatal() {
        error!(event = event.as_str());
    } else {
        info!(event = event.as_str());
    }
}

/// Run `f` under a scoped subscriber and return what it logged, without
/// ANSI colors.
#[cfg(test)]
pub(crate) fn capture_logs<F: FnOnce()>(f: F) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = buf.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::BootStart);
        log_event(Event::BindFailed);
    }

    #[test]
    fn test_fatal_events_log_at_error() {
        let logs = capture_logs(|| {
            log_event(Event::Serving);
            log_event(Event::BindFailed);
        });
        let line = |name: &str| logs.lines().find(|l| l.contains(name)).unwrap().to_string();
        assert!(line("PERSON_API_SERVING").contains("INFO"));
        assert!(line("BIND_FAILED").contains("ERROR"));
    }
}
