//! Progress reporting hooks.
//!
//! Workers report transfer progress through the [`ProgressObserver`] trait
//! so the engine stays decoupled from any particular UI.

use indicatif::ProgressBar;

/// Receives progress events from the downloader and its workers.
pub trait ProgressObserver: Send + Sync {
    /// Called once the probe has run. `None` means the server did not
    /// report a size.
    fn start(&self, total_bytes: Option<u64>);

    /// Reports `delta` freshly transferred bytes.
    fn inc(&self, delta: u64);

    /// Shows a short status message.
    fn message(&self, msg: String);

    /// Marks the transfer as finished.
    fn finish(&self);
}

/// Drives an `indicatif` progress bar from worker events.
pub struct ConsoleObserver {
    pub pb: ProgressBar,
}

impl ProgressObserver for ConsoleObserver {
    fn start(&self, total_bytes: Option<u64>) {
        if let Some(total) = total_bytes {
            self.pb.set_length(total);
        }
    }

    fn inc(&self, delta: u64) {
        self.pb.inc(delta);
    }

    fn message(&self, msg: String) {
        self.pb.set_message(msg);
    }

    fn finish(&self) {
        self.pb.finish();
    }
}

/// Ignores all progress events. Used by the plain `download` entry point
/// and in tests.
pub struct SilentObserver;

impl ProgressObserver for SilentObserver {
    fn start(&self, _total_bytes: Option<u64>) {}

    fn inc(&self, _delta: u64) {}

    fn message(&self, _msg: String) {}

    fn finish(&self) {}
}
