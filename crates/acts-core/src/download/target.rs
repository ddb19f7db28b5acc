//! Download request description and destination layout.

use crate::url_model::sanitize_dirname;
use std::path::{Path, PathBuf};

/// One file to fetch: `folder/[title]/[subtitle]/<filename>`.
///
/// Built per call and not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub url: String,
    pub folder: PathBuf,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub referer: Option<String>,
}

impl DownloadTarget {
    pub fn new(url: impl Into<String>, folder: impl AsRef<Path>) -> Self {
        Self {
            url: url.into(),
            folder: folder.as_ref().to_path_buf(),
            title: None,
            subtitle: None,
            referer: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// Destination directory. Empty title/subtitle strings add no level.
    pub fn directory(&self) -> PathBuf {
        let mut dir = self.folder.clone();
        for part in [&self.title, &self.subtitle].into_iter().flatten() {
            if !part.is_empty() {
                dir.push(sanitize_dirname(part));
            }
        }
        dir
    }
}
