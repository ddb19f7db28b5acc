//! `acts list <url>` – show discovered documents without downloading.

use acts_core::config::ActsConfig;
use acts_core::{CurlFetcher, ScrapeSettings, Scraper};
use anyhow::Result;

pub fn run_list(cfg: &ActsConfig, url: &str) -> Result<()> {
    let scraper = Scraper::new(CurlFetcher::new(), ScrapeSettings::from(cfg));
    let discovery = scraper.discover(url);

    if !discovery.profile.is_supported() {
        println!("Unsupported host: {url}");
        return Ok(());
    }

    println!("{} [{}]", discovery.title, discovery.profile);
    for group in &discovery.groups {
        let indent = match &group.subtitle {
            Some(sub) => {
                println!("  {sub}");
                "    "
            }
            None => "  ",
        };
        if group.documents.is_empty() {
            println!("{indent}(no documents)");
        }
        for doc in &group.documents {
            println!("{indent}{} -> {}", doc.title, doc.link);
        }
    }
    println!("{} document(s)", discovery.document_count());
    Ok(())
}
