//! Error types for the download engine.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::JoinError;

/// Result type for download operations.
pub type Result<T> = std::result::Result<T, DownloadError>;

/// Errors that can occur while probing, fetching, or assembling a download.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The source URL could not be parsed.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The metadata probe request could not be issued.
    #[error("failed to probe {url}: {source}")]
    Probe {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A transfer failed and exhausted its retry attempts.
    #[error("failed to download {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A part file or the destination could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A part file could not be stitched into the final output.
    #[error("failed to merge {}: {source}", .path.display())]
    Merge {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The requested segment layout is impossible.
    #[error("invalid segment plan: {0}")]
    Plan(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The download was cancelled before it completed.
    #[error("download cancelled")]
    Cancelled,

    /// A segment worker panicked or was aborted.
    #[error("segment task failed: {0}")]
    Task(#[from] JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_display() {
        let err = DownloadError::Plan("concurrency must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid segment plan: concurrency must be at least 1"
        );
    }

    #[test]
    fn test_io_display_includes_path() {
        let err = DownloadError::Io {
            path: PathBuf::from("/tmp/file.binpart.3"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/file.binpart.3"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_invalid_url_display() {
        let err = DownloadError::InvalidUrl {
            url: "not a url".to_string(),
            source: url::Url::parse("not a url").unwrap_err(),
        };
        assert!(err.to_string().starts_with("invalid URL not a url"));
    }
}
