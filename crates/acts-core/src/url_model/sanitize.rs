//! Filesystem-safe names for directories and downloaded files.

/// Longest directory name kept, in characters.
const MAX_DIRNAME_CHARS: usize = 120;

/// Replacement for names that sanitize to nothing.
pub const UNTITLED: &str = "untitled";

/// Characters that are invalid in a path component on at least one of Windows, macOS or Linux.
fn is_forbidden(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*')
}

/// Turns a page or document title into a directory name.
///
/// - Each run of `<>:"/\|?*` becomes a single `_`
/// - Surrounding whitespace is trimmed, then leading/trailing spaces and dots
/// - The result is cut to 120 characters (never inside a char)
/// - An empty result becomes `untitled`
pub fn sanitize_dirname(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if is_forbidden(c) {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }

    let trimmed = out.trim().trim_matches(|c: char| c == ' ' || c == '.');
    let mut cut: String = trimmed.chars().take(MAX_DIRNAME_CHARS).collect();
    // Truncation can expose a trailing space or dot again.
    while cut.ends_with(' ') || cut.ends_with('.') {
        cut.pop();
    }

    if cut.is_empty() {
        UNTITLED.to_string()
    } else {
        cut
    }
}

/// Reduces a server-supplied filename to a single safe path component.
///
/// Directory parts (either separator) are dropped, NUL and control characters
/// become `_`. Returns `None` when nothing usable is left.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let base = name.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| if c == '\0' || c.is_control() { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        None
    } else {
        Some(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_forbidden_characters() {
        let s = sanitize_dirname("Ministry/Report: 2024?");
        assert_eq!(s, "Ministry_Report_ 2024_");
        assert!(!s.chars().any(is_forbidden));
    }

    #[test]
    fn collapses_runs() {
        assert_eq!(sanitize_dirname("a<>|b"), "a_b");
    }

    #[test]
    fn trims_dots_and_spaces() {
        assert_eq!(sanitize_dirname("  ..Projekt ustawy..  "), "Projekt ustawy");
    }

    #[test]
    fn empty_becomes_untitled() {
        assert_eq!(sanitize_dirname(""), UNTITLED);
        assert_eq!(sanitize_dirname(" . . "), UNTITLED);
    }

    #[test]
    fn truncates_to_120_chars_without_trailing_dot() {
        let long = "ż".repeat(200);
        let s = sanitize_dirname(&long);
        assert_eq!(s.chars().count(), 120);

        let mut dotted = "a".repeat(119);
        dotted.push_str(". tail");
        let s = sanitize_dirname(&dotted);
        assert_eq!(s, "a".repeat(119));
    }

    #[test]
    fn filename_drops_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd").as_deref(), Some("passwd"));
        assert_eq!(sanitize_filename("C:\\tmp\\akt.pdf").as_deref(), Some("akt.pdf"));
        assert_eq!(sanitize_filename("akt\u{0}1.pdf").as_deref(), Some("akt_1.pdf"));
    }

    #[test]
    fn filename_rejects_reserved() {
        assert_eq!(sanitize_filename(".."), None);
        assert_eq!(sanitize_filename("dir/"), None);
        assert_eq!(sanitize_filename("  "), None);
    }
}
