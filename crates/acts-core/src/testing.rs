//! Scripted [`Fetch`] for unit tests.

use crate::http::{Fetch, FetchError, Response};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

enum Scripted {
    Ok(Response),
    Status(u32),
}

/// Answers from a fixed URL → response table; unknown URLs get HTTP 404.
#[derive(Default)]
pub(crate) struct ScriptedFetch {
    routes: HashMap<String, Scripted>,
    calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl ScriptedFetch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn ok(mut self, url: &str, response: Response) -> Self {
        self.routes.insert(url.to_string(), Scripted::Ok(response));
        self
    }

    pub(crate) fn status(mut self, url: &str, code: u32) -> Self {
        self.routes.insert(url.to_string(), Scripted::Status(code));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(u, _)| u.clone()).collect()
    }

    pub(crate) fn last_headers(&self) -> Vec<(String, String)> {
        self.calls
            .borrow()
            .last()
            .map(|(_, h)| h.clone())
            .unwrap_or_default()
    }
}

impl Fetch for ScriptedFetch {
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
        _timeout: Duration,
    ) -> Result<Response, FetchError> {
        self.calls
            .borrow_mut()
            .push((url.to_string(), headers.to_vec()));
        match self.routes.get(url) {
            Some(Scripted::Ok(r)) => Ok(r.clone()),
            Some(Scripted::Status(code)) => Err(FetchError::Status {
                url: url.to_string(),
                code: *code,
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                code: 404,
            }),
        }
    }
}

pub(crate) fn pdf(content_disposition: Option<&str>) -> Response {
    let mut headers = vec![("Content-Type".to_string(), "application/octet-stream".to_string())];
    if let Some(cd) = content_disposition {
        headers.push(("Content-Disposition".to_string(), cd.to_string()));
    }
    Response {
        status: 200,
        headers,
        body: b"%PDF-1.4\n%test\n".to_vec(),
    }
}

pub(crate) fn html_page() -> Response {
    html(b"<html><body>Brak pliku</body></html>")
}

pub(crate) fn html(body: &[u8]) -> Response {
    Response {
        status: 200,
        headers: vec![("Content-Type".to_string(), "text/html; charset=utf-8".to_string())],
        body: body.to_vec(),
    }
}
