//! Small helpers over `scraper` shared by locating, normalizing and titles.

use scraper::{ElementRef, Html, Selector};

fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            tracing::warn!("invalid selector {:?}: {:?}", css, e);
            None
        }
    }
}

/// All elements of `page` matching `css`, in document order.
pub(crate) fn select<'a>(page: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    let Some(sel) = parse_selector(css) else {
        return Vec::new();
    };
    let found = page.select(&sel).collect();
    found
}

/// First descendant of `scope` matching `css`.
pub(crate) fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = parse_selector(css)?;
    let found = scope.select(&sel).next();
    found
}

/// First element of `page` matching `css`.
pub(crate) fn select_first_in_page<'a>(page: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let sel = parse_selector(css)?;
    let found = page.select(&sel).next();
    found
}

/// Visible text: each text node trimmed, empty ones dropped, joined by one space.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Nearest ancestor element named `tag`.
pub(crate) fn ancestor_named<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == tag)
}

/// Non-empty `href` attribute.
pub(crate) fn href(el: ElementRef<'_>) -> Option<&str> {
    el.value().attr("href").filter(|h| !h.is_empty())
}
