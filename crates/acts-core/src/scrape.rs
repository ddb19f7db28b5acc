//! Sequential driver: project title, timeline subpages, documents, downloads.
//!
//! Page fetch failures are logged and treated as "nothing found". A failed
//! download is logged and counted; the remaining documents are still processed.

use crate::config::ActsConfig;
use crate::download::{DownloadTarget, Downloader};
use crate::http::{Fetch, RequestHeaders};
use crate::locate::{locate, Listing};
use crate::normalize::{normalize, DiscoveredLink};
use crate::site::{classify, SiteProfile};
use crate::title::page_title;
use crate::url_model::UNTITLED;
use scraper::Html;
use std::path::PathBuf;
use std::time::Duration;

/// Where and how the driver fetches and saves.
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    pub output_dir: PathBuf,
    pub page_timeout: Duration,
    pub download_timeout: Duration,
    pub headers: RequestHeaders,
}

impl From<&ActsConfig> for ScrapeSettings {
    fn from(cfg: &ActsConfig) -> Self {
        Self {
            output_dir: cfg.output_dir.clone(),
            page_timeout: Duration::from_secs(cfg.page_timeout_secs),
            download_timeout: Duration::from_secs(cfg.download_timeout_secs),
            headers: RequestHeaders::new(cfg.user_agent.clone(), cfg.accept.clone()),
        }
    }
}

/// Documents found on one page. `subtitle` is the timeline entry title (RCL only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentGroup {
    pub subtitle: Option<String>,
    pub page_url: String,
    pub documents: Vec<DiscoveredLink>,
}

/// Everything discovered from a root URL, before downloading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub profile: SiteProfile,
    pub title: String,
    pub groups: Vec<DocumentGroup>,
}

impl Discovery {
    pub fn document_count(&self) -> usize {
        self.groups.iter().map(|g| g.documents.len()).sum()
    }
}

/// Outcome of [`Scraper::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub profile: SiteProfile,
    pub found: usize,
    pub saved: Vec<PathBuf>,
    pub failed: usize,
}

pub struct Scraper<F> {
    fetch: F,
    settings: ScrapeSettings,
}

impl<F: Fetch> Scraper<F> {
    pub fn new(fetch: F, settings: ScrapeSettings) -> Self {
        Self { fetch, settings }
    }

    fn fetch_page(&self, url: &str) -> Option<Html> {
        let headers = self.settings.headers.page();
        match self.fetch.get(url, &headers, self.settings.page_timeout) {
            Ok(resp) => Some(Html::parse_document(&resp.text())),
            Err(e) if e.is_timeout() => {
                tracing::error!("timed out fetching page {}: {}", url, e);
                None
            }
            Err(e) => {
                tracing::error!("failed to fetch page {}: {}", url, e);
                None
            }
        }
    }

    fn links(&self, url: &str, listing: Listing) -> Vec<DiscoveredLink> {
        let profile = classify(url);
        if !profile.is_supported() {
            return Vec::new();
        }
        match self.fetch_page(url) {
            Some(page) => normalize(&locate(profile, listing, &page), url),
            None => Vec::new(),
        }
    }

    /// Project title, or `untitled` when the page cannot be fetched or has none.
    pub fn project_title(&self, url: &str) -> String {
        self.fetch_page(url)
            .and_then(|page| page_title(classify(url), &page))
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// Timeline entries of an RCL project page.
    pub fn subpages(&self, url: &str) -> Vec<DiscoveredLink> {
        self.links(url, Listing::Timeline)
    }

    /// Downloadable documents listed on `url`.
    pub fn acts(&self, url: &str) -> Vec<DiscoveredLink> {
        self.links(url, Listing::Acts)
    }

    /// Walks the site from `url` without downloading anything.
    pub fn discover(&self, url: &str) -> Discovery {
        let profile = classify(url);
        if !profile.is_supported() {
            let host = url::Url::parse(url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_else(|| url.to_string());
            tracing::warn!("unsupported host for acts downloading: {}", host);
            return Discovery {
                profile,
                title: UNTITLED.to_string(),
                groups: Vec::new(),
            };
        }

        let title = self.project_title(url);
        let groups = if profile.has_subpages() {
            self.subpages(url)
                .into_iter()
                .map(|sub| DocumentGroup {
                    documents: self.acts(&sub.link),
                    subtitle: Some(sub.title),
                    page_url: sub.link,
                })
                .collect()
        } else {
            vec![DocumentGroup {
                subtitle: None,
                page_url: url.to_string(),
                documents: self.acts(url),
            }]
        };

        Discovery {
            profile,
            title,
            groups,
        }
    }

    /// Discovers and downloads every document reachable from `url`.
    pub fn run(&self, url: &str) -> RunSummary {
        self.download_all(&self.discover(url))
    }

    /// Downloads every document of an earlier [`Scraper::discover`] result.
    pub fn download_all(&self, discovery: &Discovery) -> RunSummary {
        let downloader = Downloader::new(
            &self.fetch,
            self.settings.headers.clone(),
            self.settings.download_timeout,
        );

        let mut summary = RunSummary {
            profile: discovery.profile,
            found: 0,
            saved: Vec::new(),
            failed: 0,
        };
        for group in &discovery.groups {
            for doc in &group.documents {
                summary.found += 1;
                tracing::info!("found document: {} at {}", doc.title, doc.link);
                let mut target = DownloadTarget::new(&doc.link, &self.settings.output_dir)
                    .title(&discovery.title)
                    .referer(&group.page_url);
                if let Some(sub) = &group.subtitle {
                    target = target.subtitle(sub);
                }
                match downloader.download(&target) {
                    Ok(path) => summary.saved.push(path),
                    Err(e) => {
                        summary.failed += 1;
                        tracing::error!("download of {} failed: {}", doc.link, e);
                    }
                }
            }
        }
        summary
    }
}
