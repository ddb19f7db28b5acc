//! Official journal (dziennikustaw.gov.pl): PDF anchors, often icon-only.

use super::Located;
use crate::html;
use scraper::{ElementRef, Html};

const PDF_ANCHORS: &str =
    r#"td p a[href$=".pdf"], a[href^="/DU/"][href$=".pdf"], a[href*="/DU/"][href$=".pdf"]"#;

pub(super) fn locate(page: &Html) -> Vec<Located<'_>> {
    html::select(page, PDF_ANCHORS)
        .into_iter()
        .filter_map(|a| {
            let href = html::href(a)?;
            let label = if html::element_text(a).is_empty() {
                Some(recover_label(a, href))
            } else {
                None
            };
            Some(Located { element: a, label })
        })
        .collect()
}

/// Label for an anchor without visible text: bold text in the enclosing
/// paragraph, then the title/alt of an enclosed image, then the file name.
fn recover_label(a: ElementRef<'_>, href: &str) -> String {
    bold_in_paragraph(a)
        .or_else(|| image_caption(a))
        .unwrap_or_else(|| href.rsplit('/').next().unwrap_or(href).to_string())
}

fn bold_in_paragraph(a: ElementRef<'_>) -> Option<String> {
    let p = html::ancestor_named(a, "p")?;
    let b = html::select_first(p, "b")?;
    let text = html::element_text(b);
    (!text.is_empty()).then_some(text)
}

fn image_caption(a: ElementRef<'_>) -> Option<String> {
    let img = html::select_first(a, "img")?;
    ["title", "alt"]
        .into_iter()
        .filter_map(|attr| img.value().attr(attr))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}
