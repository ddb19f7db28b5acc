pub mod config;
pub mod logging;

pub mod download;
pub mod http;
pub mod locate;
pub mod normalize;
pub mod scrape;
pub mod site;
pub mod title;
pub mod url_model;

mod html;

#[cfg(test)]
mod testing;

pub use download::{DownloadError, DownloadTarget, Downloader};
pub use http::{CurlFetcher, Fetch, FetchError, RequestHeaders, Response};
pub use normalize::DiscoveredLink;
pub use scrape::{Discovery, RunSummary, ScrapeSettings, Scraper};
pub use site::{classify, SiteProfile};
