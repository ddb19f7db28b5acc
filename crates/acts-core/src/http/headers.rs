//! Fixed request header set.

/// Browser-like User-Agent; some of the target sites reject unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Accept header for document downloads.
pub const DEFAULT_ACCEPT: &str = "application/pdf,application/octet-stream;q=0.9,*/*;q=0.8";

/// Headers sent with every request. Built once from configuration and passed
/// explicitly to whoever issues requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    user_agent: String,
    accept: String,
}

impl Default for RequestHeaders {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT, DEFAULT_ACCEPT)
    }
}

impl RequestHeaders {
    pub fn new(user_agent: impl Into<String>, accept: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            accept: accept.into(),
        }
    }

    /// Headers for HTML page fetches.
    pub fn page(&self) -> Vec<(String, String)> {
        vec![("User-Agent".to_string(), self.user_agent.clone())]
    }

    /// Headers for document downloads, optionally with a Referer.
    pub fn download(&self, referer: Option<&str>) -> Vec<(String, String)> {
        let mut headers = self.page();
        headers.push(("Accept".to_string(), self.accept.clone()));
        if let Some(r) = referer {
            headers.push(("Referer".to_string(), r.to_string()));
        }
        headers
    }
}
