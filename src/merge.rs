//! Reassembly of part files into the final output.

use crate::error::{DownloadError, Result};
use crate::plan::part_path;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{self, AsyncWriteExt};

/// Concatenates `count` part files, in index order, into `dest`.
///
/// Stops at the first part that cannot be read and leaves all part files
/// in place in that case, so a failed merge can be inspected. A partially
/// written destination is not rolled back.
pub async fn merge_parts(dest: &Path, count: usize) -> Result<()> {
    let mut output = File::create(dest)
        .await
        .map_err(|source| merge_error(dest, source))?;

    for index in 0..count {
        let part = part_path(dest, index);
        let mut reader = File::open(&part)
            .await
            .map_err(|source| merge_error(&part, source))?;

        io::copy(&mut reader, &mut output)
            .await
            .map_err(|source| merge_error(&part, source))?;
    }

    output
        .flush()
        .await
        .map_err(|source| merge_error(dest, source))?;

    Ok(())
}

/// Removes every part file, ignoring files that are already gone.
pub async fn remove_parts(dest: &Path, count: usize) {
    for index in 0..count {
        let _ = tokio::fs::remove_file(part_path(dest, index)).await;
    }
}

fn merge_error(path: &Path, source: std::io::Error) -> DownloadError {
    DownloadError::Merge {
        path: path.to_path_buf(),
        source,
    }
}
