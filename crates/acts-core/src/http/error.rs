//! Transport errors.

use thiserror::Error;

/// Failure of a single HTTP GET: network, timeout, or a non-2xx status.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl reported an error (bad URL, DNS, connect, timeout, ...).
    #[error("GET {url}: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Final response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
}

impl FetchError {
    pub(crate) fn curl(url: &str, source: curl::Error) -> Self {
        FetchError::Curl {
            url: url.to_string(),
            source,
        }
    }

    /// True when libcurl gave up because the timeout expired.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Curl { source, .. } if source.is_operation_timedout())
    }
}
