//! Fetched HTTP response.

/// Status, headers of the final hop, and the full body.
#[derive(Debug, Clone, Default)]
pub struct Response {
    pub status: u32,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// First value of header `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Collects raw header lines from libcurl's header callback.
///
/// Each status line (`HTTP/...`) starts a new header block, so after redirects
/// only the final response's headers remain.
#[derive(Debug, Default)]
pub(crate) struct HeaderCollector {
    headers: Vec<(String, String)>,
}

impl HeaderCollector {
    pub(crate) fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if line.starts_with("HTTP/") {
            self.headers.clear();
            return;
        }
        if let Some((name, value)) = line.split_once(':') {
            self.headers
                .push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    pub(crate) fn into_headers(self) -> Vec<(String, String)> {
        self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(lines: &[&str]) -> Vec<(String, String)> {
        let mut c = HeaderCollector::default();
        for l in lines {
            c.push_line(l);
        }
        c.into_headers()
    }

    #[test]
    fn keeps_only_final_hop() {
        let headers = collect(&[
            "HTTP/1.1 302 Found\r\n",
            "Location: /attachment/42/download\r\n",
            "\r\n",
            "HTTP/1.1 200 OK\r\n",
            "Content-Type: application/pdf\r\n",
            "Content-Disposition: attachment; filename=\"a.pdf\"\r\n",
            "\r\n",
        ]);
        assert_eq!(headers.len(), 2);
        let r = Response {
            status: 200,
            headers,
            body: Vec::new(),
        };
        assert_eq!(r.header("content-type"), Some("application/pdf"));
        assert_eq!(r.header("Location"), None);
    }

    #[test]
    fn header_value_may_contain_colons() {
        let headers = collect(&["HTTP/2 200", "Link: <https://x/>; rel=\"canonical\""]);
        assert_eq!(headers[0].1, "<https://x/>; rel=\"canonical\"");
    }

    #[test]
    fn text_is_lossy() {
        let r = Response {
            body: vec![b'o', b'k', 0xff],
            ..Response::default()
        };
        assert_eq!(r.text(), "ok\u{fffd}");
    }
}
