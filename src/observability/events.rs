//! Lifecycle events for the person service
//!
//! Every process-level log line carries one of these names in its `event`
//! field, so startup and shutdown can be grepped for regardless of level.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration resolved from file and flags
    ConfigLoaded,
    /// Swagger documents written to the docs directory
    DocsWritten,
    /// Listener bound, serving requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server loop exited
    ShutdownComplete,

    // Failures
    /// Listener could not be bound (FATAL)
    BindFailed,
    /// Docs could not be written
    DocsFailed,
    /// A response body could not be serialized
    ResponseEncodeFailed,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "PERSON_API_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DocsWritten => "DOCS_WRITTEN",
            Event::Serving => "PERSON_API_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::BindFailed => "BIND_FAILED",
            Event::DocsFailed => "DOCS_FAILED",
            Event::ResponseEncodeFailed => "RESPONSE_ENCODE_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BindFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::Serving.as_str(), "PERSON_API_SERVING");
        assert_eq!(Event::DocsWritten.to_string(), "DOCS_WRITTEN");
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::BindFailed.is_fatal());
        assert!(!Event::DocsFailed.is_fatal());
        assert!(!Event::ShutdownComplete.is_fatal());
    }
}
