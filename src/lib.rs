//! # partget
//!
//! `partget` downloads a file over HTTP by splitting it into byte-range
//! segments fetched in parallel, then stitching the parts back together
//! in order. Servers that do not advertise range support fall back to a
//! plain sequential transfer.
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn run() -> Result<(), partget::DownloadError> {
//! partget::download("https://example.com/archive.zip", "archive.zip", 4).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`download_with`] exposes the full surface: bring your own
//! `reqwest::Client`, progress observer and cancellation token.

pub mod args;
pub mod config;
pub mod downloader;
pub mod error;
pub mod merge;
pub mod observer;
pub mod plan;
pub mod probe;
pub mod retry;
pub mod utils;
pub mod worker;

pub use downloader::{download, download_with};
pub use error::{DownloadError, Result};
pub use observer::{ConsoleObserver, ProgressObserver, SilentObserver};
pub use plan::{Segment, calculate_segments, part_path};
pub use probe::{Resource, probe_resource};
