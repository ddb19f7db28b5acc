//! URL modeling and filename derivation.
//!
//! Derives local filenames from the Content-Disposition header or the URL path,
//! and directory names from document titles.

mod content_disposition;
mod path;
mod sanitize;

pub use content_disposition::parse_content_disposition_filename;
pub use path::filename_from_url_path;
pub use sanitize::{sanitize_dirname, sanitize_filename, UNTITLED};

/// Default filename when URL path and Content-Disposition yield nothing usable.
pub const DEFAULT_FILENAME: &str = "pobrany_plik";

/// Filename announced by the server, if any.
pub fn filename_from_header(content_disposition: Option<&str>) -> Option<String> {
    content_disposition
        .and_then(parse_content_disposition_filename)
        .and_then(|name| sanitize_filename(&name))
}

/// Derives the filename for saving a download.
///
/// Prefers the Content-Disposition filename, then the last path segment of
/// `url`, then [`DEFAULT_FILENAME`].
///
/// # Examples
///
/// - `derive_filename("https://example.com/akt.pdf", None)` → `"akt.pdf"`
/// - `derive_filename("https://example.com/", Some("attachment; filename=\"b.pdf\""))` → `"b.pdf"`
pub fn derive_filename(url: &str, content_disposition: Option<&str>) -> String {
    filename_from_header(content_disposition)
        .or_else(|| filename_from_url_path(url).and_then(|name| sanitize_filename(&name)))
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}
