//! Content checks and alternate URL forms for attachment endpoints.

use crate::http::Response;

const PDF_MAGIC: &[u8] = b"%PDF";

/// Body starts with `%PDF` (leading whitespace allowed) or the Content-Type mentions pdf.
pub fn looks_like_pdf(response: &Response) -> bool {
    let start = response
        .body
        .iter()
        .position(|&b| !(b.is_ascii_whitespace() || b == 0x0b))
        .unwrap_or(response.body.len());
    if response.body[start..].starts_with(PDF_MAGIC) {
        return true;
    }
    response
        .header("content-type")
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("pdf"))
}

/// gov.pl `/attachment/` URLs sometimes serve an HTML wrapper instead of the file.
pub fn retry_applies(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(u) => {
            u.host_str()
                .is_some_and(|h| h.to_ascii_lowercase().ends_with("gov.pl"))
                && u.path().contains("/attachment/")
        }
        Err(_) => false,
    }
}

/// Alternate forms to try, in order: `/download` appended to the whole URL
/// (trailing slashes dropped), then a `download=1` query parameter.
pub fn alternate_urls(url: &str) -> [String; 2] {
    let sep = if url.contains('?') { '&' } else { '?' };
    [
        format!("{}/download", url.trim_end_matches('/')),
        format!("{url}{sep}download=1"),
    ]
}
