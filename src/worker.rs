//! Transfer workers.
//!
//! [`download_segment`] fetches one byte range into its own part file;
//! [`download_direct`] streams the whole resource straight to the
//! destination when range requests are off the table. Both run every
//! attempt through the shared retry loop.

use crate::error::{DownloadError, Result};
use crate::observer::ProgressObserver;
use crate::plan::Segment;
use crate::retry::retry;
use reqwest::header::RANGE;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio_util::sync::CancellationToken;
use tracing::warn;
use url::Url;

/// Total tries per transfer, counting the first one.
const MAX_ATTEMPTS: u32 = 4;

/// Downloads one byte range of `url` into the part file at `path`.
///
/// The part file is removed and recreated on every attempt, so a retry
/// never inherits bytes from a broken transfer and a stale file from an
/// earlier run never survives. Only transport errors are retried;
/// filesystem errors abort immediately.
pub async fn download_segment(
    client: reqwest::Client,
    url: Url,
    segment: Segment,
    path: PathBuf,
    observer: Arc<dyn ProgressObserver>,
    cancel: CancellationToken,
) -> Result<()> {
    let result = retry(MAX_ATTEMPTS, is_transport, |attempt| {
        transfer_attempt(
            client.clone(),
            url.clone(),
            Some((segment.start, segment.end)),
            path.clone(),
            observer.clone(),
            cancel.clone(),
            attempt,
        )
    })
    .await;

    if let Err(ref e) = result {
        warn!("part {} failed: {}", segment.index, e);
    }
    result
}

/// Downloads the whole resource with a single unranged request.
///
/// Used when the server does not advertise range support or the total
/// size is unknown. Writes straight to the destination with the same
/// retry behavior as [`download_segment`].
pub async fn download_direct(
    client: reqwest::Client,
    url: Url,
    path: PathBuf,
    observer: Arc<dyn ProgressObserver>,
    cancel: CancellationToken,
) -> Result<()> {
    let result = retry(MAX_ATTEMPTS, is_transport, |attempt| {
        transfer_attempt(
            client.clone(),
            url.clone(),
            None,
            path.clone(),
            observer.clone(),
            cancel.clone(),
            attempt,
        )
    })
    .await;

    if let Err(ref e) = result {
        warn!("transfer failed: {}", e);
    }
    result
}

/// One GET attempt streamed to `path`.
///
/// Whatever response arrives is treated as the content; the status code
/// is deliberately not inspected.
async fn transfer_attempt(
    client: reqwest::Client,
    url: Url,
    range: Option<(u64, u64)>,
    path: PathBuf,
    observer: Arc<dyn ProgressObserver>,
    cancel: CancellationToken,
    attempt: u32,
) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(DownloadError::Cancelled);
    }
    if attempt > 1 {
        observer.message(format!("Retry #{}...", attempt));
    }

    // Never append to leftovers from an earlier attempt or run.
    let _ = tokio::fs::remove_file(&path).await;
    let file = File::create(&path)
        .await
        .map_err(|source| file_error(&path, source))?;
    let mut writer = BufWriter::new(file);

    let mut request = client.get(url.clone());
    if let Some((start, end)) = range {
        request = request.header(RANGE, format!("bytes={}-{}", start, end));
    }

    let mut response = request
        .send()
        .await
        .map_err(|source| transport(&url, source))?;

    while let Some(bytes) = response
        .chunk()
        .await
        .map_err(|source| transport(&url, source))?
    {
        writer
            .write_all(&bytes)
            .await
            .map_err(|source| file_error(&path, source))?;
        observer.inc(bytes.len() as u64);
    }

    // Ensure all bytes reach the file before the attempt counts as done
    writer
        .flush()
        .await
        .map_err(|source| file_error(&path, source))?;

    Ok(())
}

fn is_transport(err: &DownloadError) -> bool {
    matches!(err, DownloadError::Transport { .. })
}

fn transport(url: &Url, source: reqwest::Error) -> DownloadError {
    DownloadError::Transport {
        url: url.to_string(),
        source,
    }
}

fn file_error(path: &Path, source: std::io::Error) -> DownloadError {
    DownloadError::Io {
        path: path.to_path_buf(),
        source,
    }
}
