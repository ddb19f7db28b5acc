//! Site profiles and URL matching.

use std::fmt;

/// A supported site family (or `Unknown` for everything else).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteProfile {
    /// legislacja.rcl.gov.pl: project timelines.
    Rcl,
    /// sejm.gov.pl: parliamentary prints.
    Sejm,
    /// dziennikustaw.gov.pl: official journal.
    Dziennik,
    /// gov.pl/web/finanse: Ministry of Finance publications.
    Finanse,
    /// No extraction rule.
    Unknown,
}

impl SiteProfile {
    pub fn name(self) -> &'static str {
        match self {
            SiteProfile::Rcl => "rcl",
            SiteProfile::Sejm => "sejm",
            SiteProfile::Dziennik => "dziennik",
            SiteProfile::Finanse => "finanse",
            SiteProfile::Unknown => "unknown",
        }
    }

    pub fn is_supported(self) -> bool {
        self != SiteProfile::Unknown
    }

    /// Whether downloads go into a per-subpage directory below the project title.
    pub fn has_subpages(self) -> bool {
        self == SiteProfile::Rcl
    }
}

impl fmt::Display for SiteProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a URL to its site profile. First match wins; unparseable URLs are `Unknown`.
pub fn classify(url: &str) -> SiteProfile {
    let Ok(parsed) = url::Url::parse(url) else {
        return SiteProfile::Unknown;
    };
    let host = parsed.host_str().unwrap_or("").to_ascii_lowercase();
    let path = parsed.path().to_lowercase();
    classify_parts(&host, &path)
}

fn classify_parts(host: &str, path: &str) -> SiteProfile {
    if host.contains("legislacja.rcl.gov.pl") {
        SiteProfile::Rcl
    } else if host.contains("sejm.gov.pl") {
        SiteProfile::Sejm
    } else if host.contains("dziennikustaw.gov.pl") {
        SiteProfile::Dziennik
    } else if host.ends_with("gov.pl") && path.contains("/web/finanse") {
        SiteProfile::Finanse
    } else {
        SiteProfile::Unknown
    }
}
