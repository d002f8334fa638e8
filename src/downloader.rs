//! Download orchestration.
//!
//! Probes the server, then either fans one worker out per segment and
//! stitches the parts back together, or falls back to a single sequential
//! transfer when range requests are not an option.

use crate::error::{DownloadError, Result};
use crate::merge::{merge_parts, remove_parts};
use crate::observer::{ProgressObserver, SilentObserver};
use crate::plan::{calculate_segments, part_path};
use crate::probe::probe_resource;
use crate::worker::{download_direct, download_segment};
use futures_util::future::join_all;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Downloads `url` to `dest` using up to `concurrency` parallel segments.
///
/// Convenience wrapper around [`download_with`] with a default client, no
/// progress reporting and no cancellation.
pub async fn download(url: &str, dest: impl AsRef<Path>, concurrency: usize) -> Result<()> {
    let client = default_client()?;

    download_with(
        &client,
        url,
        dest.as_ref(),
        concurrency,
        Arc::new(SilentObserver),
        CancellationToken::new(),
    )
    .await
}

/// Downloads `url` to `dest`, reporting progress to `observer`.
///
/// When the server advertises byte-range support and a usable size, the
/// resource is split into up to `concurrency` segments fetched in
/// parallel, each into its own part file next to `dest`. Once every
/// segment has landed the parts are stitched together in order and
/// removed. Servers without range support (or with an unknown or zero
/// size) are downloaded with one sequential request instead.
///
/// If any segment fails, the first failure in segment order is returned
/// after all workers have stopped, and the part files are cleaned up. A
/// failed merge keeps the part files on disk for inspection.
///
/// Cancelling `cancel` makes workers stop between attempts; an in-flight
/// response is still drained.
pub async fn download_with(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
    concurrency: usize,
    observer: Arc<dyn ProgressObserver>,
    cancel: CancellationToken,
) -> Result<()> {
    if concurrency == 0 {
        return Err(DownloadError::Plan(
            "concurrency must be at least 1".to_string(),
        ));
    }
    if cancel.is_cancelled() {
        return Err(DownloadError::Cancelled);
    }

    let resource = probe_resource(client, url).await?;
    observer.start(resource.length);

    let total = match resource.length {
        Some(length) if length > 0 && resource.accepts_ranges => length,
        _ => {
            debug!("single stream transfer for {}", resource.url);
            download_direct(
                client.clone(),
                resource.url.clone(),
                dest.to_path_buf(),
                observer.clone(),
                cancel,
            )
            .await?;
            observer.finish();
            return Ok(());
        }
    };

    let segments = calculate_segments(total, concurrency)?;
    debug!(
        "segmented transfer for {}: {} bytes in {} parts",
        resource.url,
        total,
        segments.len()
    );

    let mut tasks = Vec::new();
    for segment in &segments {
        tasks.push(tokio::spawn(download_segment(
            client.clone(),
            resource.url.clone(),
            *segment,
            part_path(dest, segment.index),
            observer.clone(),
            cancel.clone(),
        )));
    }

    let results = join_all(tasks).await;

    // Every worker has stopped here; the error of the lowest-numbered
    // failed segment is the one reported.
    let mut first_error = None;
    for result in results {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(join_error) => Err(DownloadError::Task(join_error)),
        };
        if let Err(e) = outcome
            && first_error.is_none()
        {
            first_error = Some(e);
        }
    }

    if let Some(e) = first_error {
        remove_parts(dest, segments.len()).await;
        return Err(e);
    }

    let _ = tokio::fs::remove_file(dest).await;
    merge_parts(dest, segments.len()).await?;
    remove_parts(dest, segments.len()).await;
    observer.finish();

    Ok(())
}

fn default_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent("partget/0.1")
        .connect_timeout(Duration::from_secs(30))
        .build()
        .map_err(DownloadError::Client)
}
