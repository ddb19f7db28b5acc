//! libcurl-backed [`Fetch`] implementation.

use super::response::HeaderCollector;
use super::{Fetch, FetchError, Response};
use std::str;
use std::time::Duration;

/// Upper bound for the connect phase; the total timeout still applies.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_REDIRECTS: u32 = 10;

/// Blocking GET through a fresh `curl::easy::Easy` handle per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlFetcher;

impl CurlFetcher {
    pub fn new() -> Self {
        CurlFetcher
    }
}

impl Fetch for CurlFetcher {
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
        timeout: Duration,
    ) -> Result<Response, FetchError> {
        let err = |e: curl::Error| FetchError::curl(url, e);
        let mut collector = HeaderCollector::default();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(err)?;
        easy.follow_location(true).map_err(err)?;
        easy.max_redirections(MAX_REDIRECTS).map_err(err)?;
        easy.connect_timeout(CONNECT_TIMEOUT.min(timeout)).map_err(err)?;
        easy.timeout(timeout).map_err(err)?;

        let mut list = curl::easy::List::new();
        for (k, v) in headers {
            list.append(&format!("{}: {}", k.trim(), v.trim())).map_err(err)?;
        }
        if !headers.is_empty() {
            easy.http_headers(list).map_err(err)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|data| {
                    if let Ok(s) = str::from_utf8(data) {
                        collector.push_line(s);
                    }
                    true
                })
                .map_err(err)?;
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(err)?;
            transfer.perform().map_err(err)?;
        }

        let code = easy.response_code().map_err(err)?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Status {
                url: url.to_string(),
                code,
            });
        }

        Ok(Response {
            status: code,
            headers: collector.into_headers(),
            body,
        })
    }
}
