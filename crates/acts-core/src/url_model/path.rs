//! Filename extraction from URL path.

/// Returns the final segment of the URL path, as `basename` would.
///
/// A path ending in `/` (or an unparseable URL) yields `None`.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
