//! Segment layout for concurrent transfers.
//!
//! A download is split into contiguous, inclusive byte ranges that
//! together cover the whole resource. Each range is fetched by its own
//! worker and written to its own part file.

use crate::error::{DownloadError, Result};
use std::path::{Path, PathBuf};

/// A contiguous byte range of the source resource.
///
/// The range is inclusive, meaning `start` and `end` are both part of the
/// segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Zero-based position of this segment in the plan.
    pub index: usize,
    /// The starting byte offset.
    pub start: u64,
    /// The ending byte offset.
    pub end: u64,
}

/// Divides a resource of `total_size` bytes into segments for concurrent
/// downloading.
///
/// Segments are contiguous, the first starts at byte 0 and the last always
/// ends at `total_size - 1`. The plan holds at most `concurrency` entries;
/// a resource too small to fill every requested segment produces fewer.
///
/// # Errors
///
/// Returns [`DownloadError::Plan`] when `concurrency` is zero or the
/// resource is empty. Callers route empty resources to a plain sequential
/// transfer instead of asking for a plan.
pub fn calculate_segments(total_size: u64, concurrency: usize) -> Result<Vec<Segment>> {
    if concurrency == 0 {
        return Err(DownloadError::Plan(
            "concurrency must be at least 1".to_string(),
        ));
    }
    if total_size == 0 {
        return Err(DownloadError::Plan(
            "cannot split an empty resource".to_string(),
        ));
    }

    let count = (concurrency as u64).min(total_size);
    let segment_size = total_size / count;

    let mut segments = Vec::with_capacity(count as usize);
    let mut start = 0;

    for index in 0..count as usize {
        let end = (start + segment_size).min(total_size - 1);
        segments.push(Segment { index, start, end });

        if end == total_size - 1 {
            break;
        }
        start = end + 1;
    }

    Ok(segments)
}

/// Path of the temporary artifact holding one downloaded segment.
///
/// Part files sit next to the destination and are named by appending
/// `part.<index>` to the destination path itself, e.g. `file.binpart.0`.
pub fn part_path(dest: &Path, index: usize) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(format!("part.{}", index));
    PathBuf::from(name)
}
