//! `acts fetch <url>` – discover and download documents.

use acts_core::config::ActsConfig;
use acts_core::{CurlFetcher, ScrapeSettings, Scraper};
use anyhow::{bail, Result};

pub fn run_fetch(cfg: &ActsConfig, url: &str) -> Result<()> {
    let scraper = Scraper::new(CurlFetcher::new(), ScrapeSettings::from(cfg));
    let discovery = scraper.discover(url);
    for doc in discovery.groups.iter().flat_map(|g| &g.documents) {
        println!(" - Found document: {} at {}", doc.title, doc.link);
    }
    let summary = scraper.download_all(&discovery);

    for path in &summary.saved {
        println!("{}", path.display());
    }
    println!(
        "Found {} document(s), saved {}, failed {} (output: {})",
        summary.found,
        summary.saved.len(),
        summary.failed,
        cfg.output_dir.display()
    );
    tracing::info!(
        found = summary.found,
        saved = summary.saved.len(),
        failed = summary.failed,
        "fetch finished for {}",
        url
    );

    if summary.found > 0 && summary.saved.is_empty() {
        bail!("none of the {} document(s) could be downloaded", summary.found);
    }
    Ok(())
}
