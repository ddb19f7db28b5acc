//! Content-Disposition header parsing (filename and filename*).

/// Extracts the filename from a raw Content-Disposition header value.
///
/// Precedence, regardless of parameter order:
/// - `filename*=charset'lang'percent-encoded` (RFC 5987; decoded)
/// - `filename="value"` (quoted; strips quotes and unescapes)
/// - `filename=value` (token)
pub fn parse_content_disposition_filename(header_value: &str) -> Option<String> {
    let mut quoted: Option<String> = None;
    let mut token: Option<String> = None;

    for param in split_params(header_value.trim()) {
        let Some((name, v)) = param.trim().split_once('=') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        let v = v.trim();

        match name.as_str() {
            "filename*" => {
                if let Some(decoded) = extended_value(v) {
                    return Some(decoded);
                }
            }
            "filename" => {
                if v.len() >= 2 && v.starts_with('"') && v.ends_with('"') {
                    let unquoted = decode_quoted_filename(&v[1..v.len() - 1]);
                    if !unquoted.is_empty() && quoted.is_none() {
                        quoted = Some(unquoted);
                    }
                } else if !v.is_empty() && token.is_none() {
                    token = Some(v.to_string());
                }
            }
            _ => {}
        }
    }

    quoted.or(token)
}

/// Splits on `;` outside double quotes. A backslash inside quotes escapes the
/// next character.
fn split_params(header_value: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, c) in header_value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                params.push(&header_value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    params.push(&header_value[start..]);
    params
}

/// Decodes `charset'lang'value`. The charset label is not interpreted; bytes are
/// read as UTF-8 with lossy replacement.
fn extended_value(v: &str) -> Option<String> {
    let mut parts = v.splitn(3, '\'');
    let charset = parts.next()?;
    let _lang = parts.next()?;
    let rest = parts.next()?.trim_matches('"');
    if charset.is_empty() || rest.is_empty() {
        return None;
    }
    let decoded = percent_decode(rest);
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

/// Decode backslash-escaped quotes in a quoted filename value.
fn decode_quoted_filename(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '"' || next == '\\' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Percent-decode; malformed escapes are kept literally.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let h = bytes.get(i + 1).copied().and_then(hex_digit);
            let l = bytes.get(i + 2).copied().and_then(hex_digit);
            if let (Some(high), Some(low)) = (h, l) {
                out.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quoted() {
        let r = parse_content_disposition_filename("attachment; filename=\"projekt ustawy.pdf\"");
        assert_eq!(r.as_deref(), Some("projekt ustawy.pdf"));
    }

    #[test]
    fn parse_token() {
        let r = parse_content_disposition_filename("attachment; filename=uzasadnienie.pdf");
        assert_eq!(r.as_deref(), Some("uzasadnienie.pdf"));
    }

    #[test]
    fn parse_filename_star_utf8() {
        let r = parse_content_disposition_filename(
            "attachment; filename*=UTF-8''rozporz%C4%85dzenie.pdf",
        );
        assert_eq!(r.as_deref(), Some("rozporządzenie.pdf"));
    }

    #[test]
    fn filename_star_wins_over_quoted() {
        let r = parse_content_disposition_filename(
            "attachment; filename*=UTF-8''a.pdf; filename=\"b.pdf\"",
        );
        assert_eq!(r.as_deref(), Some("a.pdf"));

        let r = parse_content_disposition_filename(
            "attachment; filename=\"b.pdf\"; filename*=UTF-8''a.pdf",
        );
        assert_eq!(r.as_deref(), Some("a.pdf"));
    }

    #[test]
    fn filename_star_with_language_and_other_charset() {
        let r =
            parse_content_disposition_filename("inline; filename*=iso-8859-2'pl'akt%20nr%201.pdf");
        assert_eq!(r.as_deref(), Some("akt nr 1.pdf"));
    }

    #[test]
    fn quoted_wins_over_bare_and_unescapes() {
        let r = parse_content_disposition_filename(
            "attachment; filename=\"say \\\"hi\\\".pdf\"",
        );
        assert_eq!(r.as_deref(), Some("say \"hi\".pdf"));
    }

    #[test]
    fn semicolon_inside_quotes_is_part_of_the_name() {
        let r =
            parse_content_disposition_filename("attachment; filename=\"Projekt; wersja 2.pdf\"");
        assert_eq!(r.as_deref(), Some("Projekt; wersja 2.pdf"));

        let r = parse_content_disposition_filename(
            "attachment; filename=\"a \\\"x;y\\\".pdf\"; size=10",
        );
        assert_eq!(r.as_deref(), Some("a \"x;y\".pdf"));
    }

    #[test]
    fn split_params_respects_quotes() {
        assert_eq!(
            split_params("attachment; filename=\"a;b.pdf\"; x=1"),
            vec!["attachment", " filename=\"a;b.pdf\"", " x=1"]
        );
    }

    #[test]
    fn parameter_names_are_case_insensitive() {
        let r = parse_content_disposition_filename("attachment; FILENAME=\"x.pdf\"");
        assert_eq!(r.as_deref(), Some("x.pdf"));
    }

    #[test]
    fn missing_filename() {
        assert_eq!(parse_content_disposition_filename("inline"), None);
        assert_eq!(parse_content_disposition_filename("attachment; filename=\"\""), None);
        assert_eq!(parse_content_disposition_filename(""), None);
    }

    #[test]
    fn malformed_percent_escape_is_kept() {
        let r = parse_content_disposition_filename("attachment; filename*=UTF-8''100%25%zz.pdf");
        assert_eq!(r.as_deref(), Some("100%%zz.pdf"));
    }
}
