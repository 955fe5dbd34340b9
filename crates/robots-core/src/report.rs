//! Error reporting sink
//!
//! Synchronization failures never propagate to the caller; they are handed
//! to an [`ErrorSink`] at the single boundary where the internal `Result`
//! is discarded.

use std::sync::Mutex;

use crate::Error;
use crate::sync::SYNC_TAG;

/// Receives synchronization errors that are swallowed at the boundary.
pub trait ErrorSink: Send + Sync {
    fn report(&self, error: &Error);
}

/// Default sink: emits a `tracing` error event carrying the fixed tag
/// used for downstream alerting.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, error: &Error) {
        tracing::error!(tags = SYNC_TAG, error = %error, "robots.txt synchronization failed");
    }
}

/// Sink that records reported errors in memory, for assertions in tests
/// and for callers that want to inspect swallowed failures.
#[derive(Debug, Default)]
pub struct CapturingSink {
    reports: Mutex<Vec<String>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A poisoned lock still holds valid data; recover rather than panic,
    // since the sink sits behind the never-throws boundary.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.reports.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ErrorSink for CapturingSink {
    fn report(&self, error: &Error) {
        self.lock().push(error.to_string());
    }
}
