//! HTTP collaborator.
//!
//! The rest of the crate only sees the [`Fetch`] trait: one blocking GET that
//! follows redirects, enforces a total timeout, and fails on a non-2xx status.
//! [`CurlFetcher`] is the libcurl-backed implementation.

mod curl_fetch;
mod error;
mod headers;
mod response;

pub use curl_fetch::CurlFetcher;
pub use error::FetchError;
pub use headers::{RequestHeaders, DEFAULT_ACCEPT, DEFAULT_USER_AGENT};
pub use response::Response;

use std::time::Duration;

/// Blocking HTTP GET.
pub trait Fetch {
    /// Fetches `url` with the given `(name, value)` headers, reading the whole body.
    ///
    /// Returns `FetchError::Status` when the final response is not 2xx.
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
        timeout: Duration,
    ) -> Result<Response, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
        timeout: Duration,
    ) -> Result<Response, FetchError> {
        (**self).get(url, headers, timeout)
    }
}
