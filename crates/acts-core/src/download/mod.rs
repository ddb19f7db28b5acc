//! Resilient document downloader.
//!
//! Fetches one file, names it from Content-Disposition or the URL, and saves it
//! under the target's title/subtitle directories. gov.pl attachment URLs that
//! return something other than a PDF are retried through alternate URL forms.
//! An already existing destination file is returned without writing.

mod sniff;
mod store;
mod target;

pub use sniff::{alternate_urls, looks_like_pdf, retry_applies};
pub use target::DownloadTarget;

use crate::http::{Fetch, FetchError, RequestHeaders};
use crate::url_model::{derive_filename, filename_from_header};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default total timeout for a single file fetch.
pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum DownloadError {
    /// The primary fetch failed (retry fetches never surface here).
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        DownloadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Downloads documents through a [`Fetch`] implementation.
#[derive(Debug, Clone)]
pub struct Downloader<F> {
    fetch: F,
    headers: RequestHeaders,
    timeout: Duration,
}

impl<F: Fetch> Downloader<F> {
    pub fn new(fetch: F, headers: RequestHeaders, timeout: Duration) -> Self {
        Self {
            fetch,
            headers,
            timeout,
        }
    }

    /// Fetches `target.url` and returns the path of the saved (or already present) file.
    ///
    /// When sniffing and retries fail, the primary response body is saved anyway.
    pub fn download(&self, target: &DownloadTarget) -> Result<PathBuf, DownloadError> {
        let dir = target.directory();
        fs::create_dir_all(&dir).map_err(|e| DownloadError::io(&dir, e))?;

        let headers = self.headers.download(target.referer.as_deref());
        let response = self.fetch.get(&target.url, &headers, self.timeout)?;
        let filename = derive_filename(&target.url, response.header("content-disposition"));
        let dest = dir.join(&filename);

        if dest.exists() {
            tracing::debug!(path = %dest.display(), "already downloaded");
            return Ok(dest);
        }

        if !looks_like_pdf(&response) && retry_applies(&target.url) {
            for alt in alternate_urls(&target.url) {
                let alt_response = match self.fetch.get(&alt, &headers, self.timeout) {
                    Ok(r) => r,
                    Err(e) => {
                        tracing::debug!(url = %alt, "alternate fetch failed: {}", e);
                        continue;
                    }
                };
                if !looks_like_pdf(&alt_response) {
                    tracing::debug!(url = %alt, "alternate is not a PDF either");
                    continue;
                }
                let alt_name = filename_from_header(alt_response.header("content-disposition"))
                    .unwrap_or_else(|| filename.clone());
                let alt_dest = dir.join(alt_name);
                if alt_dest.exists() {
                    return Ok(alt_dest);
                }
                store::save(&alt_dest, &alt_response.body)
                    .map_err(|e| DownloadError::io(&alt_dest, e))?;
                tracing::info!(url = %alt, path = %alt_dest.display(), "saved via alternate URL");
                return Ok(alt_dest);
            }
            tracing::warn!(
                url = %target.url,
                "no PDF found behind attachment URL, saving response as is"
            );
        }

        store::save(&dest, &response.body).map_err(|e| DownloadError::io(&dest, e))?;
        tracing::info!(url = %target.url, path = %dest.display(), "saved");
        Ok(dest)
    }
}
