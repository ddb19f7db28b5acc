//! Ministry of Finance (gov.pl/web/finanse): attachment links, narrowest scope first.

use crate::html;
use scraper::{ElementRef, Html};

const CASCADE: [&str; 3] = [
    "article#main-content a.file-download[href]",
    r#"article#main-content a[href*="/attachment/"], article#main-content a[href$=".pdf"]"#,
    r#"a.file-download[href], a[href*="/attachment/"], a[href$=".pdf"]"#,
];

/// First selector of the cascade that matches anything wins.
pub(super) fn locate(page: &Html) -> Vec<ElementRef<'_>> {
    CASCADE
        .iter()
        .map(|css| html::select(page, css))
        .find(|found| !found.is_empty())
        .unwrap_or_default()
}
