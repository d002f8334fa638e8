//! Metadata probe for remote resources.

use crate::error::{DownloadError, Result};
use reqwest::header::{ACCEPT_RANGES, CONTENT_LENGTH, HeaderMap};
use url::Url;

/// What the server reported about a remote resource.
#[derive(Debug, Clone)]
pub struct Resource {
    /// The parsed source URL.
    pub url: Url,
    /// Total size in bytes, when the server sent a usable `Content-Length`.
    pub length: Option<u64>,
    /// Whether the server advertises byte-range requests.
    pub accepts_ranges: bool,
}

/// Issues a HEAD request and reports the resource size and whether the
/// server accepts byte-range requests.
///
/// Only the response headers are consulted; the status code is not
/// inspected and a missing or malformed `Content-Length` simply leaves the
/// length unknown.
///
/// # Errors
///
/// Returns [`DownloadError::InvalidUrl`] when `url` does not parse and
/// [`DownloadError::Probe`] when the request cannot be issued.
pub async fn probe_resource(client: &reqwest::Client, url: &str) -> Result<Resource> {
    let parsed = Url::parse(url).map_err(|source| DownloadError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let response = client
        .head(parsed.clone())
        .send()
        .await
        .map_err(|source| DownloadError::Probe {
            url: url.to_string(),
            source,
        })?;

    let headers = response.headers();

    Ok(Resource {
        url: parsed,
        length: content_length(headers),
        accepts_ranges: accepts_byte_ranges(headers),
    })
}

fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}

/// True when any `Accept-Ranges` value lists the `bytes` unit.
///
/// The header may appear more than once and each value may hold a
/// comma-separated list of units; matching ignores ASCII case.
fn accepts_byte_ranges(headers: &HeaderMap) -> bool {
    headers
        .get_all(ACCEPT_RANGES)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|unit| unit.trim().eq_ignore_ascii_case("bytes"))
}
