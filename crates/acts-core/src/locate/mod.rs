//! Document discovery: per-profile DOM queries that yield anchor-bearing elements.
//!
//! Pure functions over an already parsed page. Output is in document order.
//! Elements are never mutated; when a profile recovers a missing link label it
//! is returned alongside the element in [`Located::label`].

mod dziennik;
mod finanse;

use crate::html;
use crate::site::SiteProfile;
use scraper::{ElementRef, Html};

/// Which list on the page to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// Top-level entries of an RCL project timeline (links to stage subpages).
    Timeline,
    /// Downloadable documents.
    Acts,
}

/// A matched element plus an optional label recovered from its surroundings.
#[derive(Debug, Clone)]
pub struct Located<'a> {
    pub element: ElementRef<'a>,
    pub label: Option<String>,
}

impl<'a> Located<'a> {
    fn bare(element: ElementRef<'a>) -> Self {
        Self {
            element,
            label: None,
        }
    }
}

const RCL_TIMELINE: &str = "li .cbp_tmlabel";
const RCL_ACTS: &str = "li .cbp_tmlabel ul .clearbox ul ul li";
const SEJM_PRINTS: &str = ".druk";

/// Applies the extraction rule of `profile` to `page`.
///
/// Only RCL has a timeline; other profiles yield nothing for [`Listing::Timeline`].
/// `Unknown` always yields nothing.
pub fn locate<'a>(profile: SiteProfile, listing: Listing, page: &'a Html) -> Vec<Located<'a>> {
    match (profile, listing) {
        (SiteProfile::Rcl, Listing::Timeline) => bare_all(html::select(page, RCL_TIMELINE)),
        (SiteProfile::Rcl, Listing::Acts) => bare_all(html::select(page, RCL_ACTS)),
        (SiteProfile::Sejm, Listing::Acts) => bare_all(html::select(page, SEJM_PRINTS)),
        (SiteProfile::Dziennik, Listing::Acts) => dziennik::locate(page),
        (SiteProfile::Finanse, Listing::Acts) => bare_all(finanse::locate(page)),
        _ => Vec::new(),
    }
}

fn bare_all(elements: Vec<ElementRef<'_>>) -> Vec<Located<'_>> {
    elements.into_iter().map(Located::bare).collect()
}
