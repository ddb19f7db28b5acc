//! Turns located elements into uniform `{title, link}` records.

use crate::html;
use crate::locate::Located;
use scraper::ElementRef;
use url::Url;

/// A document or subpage link with a non-empty title and an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredLink {
    pub title: String,
    pub link: String,
}

/// Resolves each located element to a record, in input order.
///
/// The element itself is used when it is an anchor with an `href`, otherwise its
/// first descendant `a[href]`. Entries without an anchor, without a resolvable
/// link, or without a title are dropped. Duplicates are kept.
pub fn normalize(located: &[Located<'_>], base_url: &str) -> Vec<DiscoveredLink> {
    let base = Url::parse(base_url).ok();
    located
        .iter()
        .filter_map(|item| {
            let anchor = anchor_of(item.element)?;
            let link = resolve(base.as_ref(), html::href(anchor)?)?;
            let mut title = html::element_text(anchor);
            if title.is_empty() {
                title = item.label.as_deref().map(str::trim).unwrap_or("").to_string();
            }
            (!title.is_empty()).then_some(DiscoveredLink { title, link })
        })
        .collect()
}

fn anchor_of(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if el.value().name() == "a" && html::href(el).is_some() {
        return Some(el);
    }
    html::select_first(el, "a[href]")
}

fn resolve(base: Option<&Url>, href: &str) -> Option<String> {
    let joined = match base {
        Some(b) => b.join(href),
        None => Url::parse(href),
    };
    joined.ok().map(String::from).filter(|s| !s.is_empty())
}
