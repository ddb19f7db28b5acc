//! Project title extraction.

use crate::html;
use crate::site::SiteProfile;
use scraper::Html;

fn profile_selector(profile: SiteProfile) -> Option<&'static str> {
    match profile {
        SiteProfile::Rcl => Some(".rcl-title"),
        SiteProfile::Sejm => Some(".h2"),
        SiteProfile::Dziennik | SiteProfile::Finanse => Some("h2"),
        SiteProfile::Unknown => None,
    }
}

/// Title of a project page: the profile's own heading, then `<title>`.
///
/// Elements with no visible text are skipped.
pub fn page_title(profile: SiteProfile, page: &Html) -> Option<String> {
    profile_selector(profile)
        .into_iter()
        .chain(std::iter::once("title"))
        .filter_map(|css| html::select_first_in_page(page, css))
        .map(html::element_text)
        .find(|t| !t.is_empty())
}
