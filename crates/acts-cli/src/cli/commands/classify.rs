//! `acts classify <url>` – print the site profile.

use acts_core::site::classify;
use anyhow::Result;

pub fn run_classify(url: &str) -> Result<()> {
    let profile = classify(url);
    if profile.is_supported() {
        println!("{profile}");
    } else {
        println!("{profile} (no document discovery for this host)");
    }
    Ok(())
}
