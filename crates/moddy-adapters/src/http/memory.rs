//! Canned HTTP responses for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use moddy_core::{
    application::{ApplicationError, ports::HttpClient},
    error::ModdyResult,
};

/// A request seen by [`MemoryHttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// HTTP client answering from a URL → body map. Unknown URLs fail with 404.
#[derive(Debug, Clone, Default)]
pub struct MemoryHttpClient {
    responses: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl MemoryHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn with_response(self, url: impl Into<String>, body: impl AsRef<[u8]>) -> Self {
        if let Ok(mut responses) = self.responses.write() {
            responses.insert(url.into(), body.as_ref().to_vec());
        }
        self
    }

    /// Every request made so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .read()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn respond(&self, url: &str, headers: &[(&'static str, &'static str)]) -> ModdyResult<Vec<u8>> {
        self.requests
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?
            .push(RecordedRequest {
                url: url.to_string(),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            });

        let responses = self
            .responses
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        responses.get(url).cloned().ok_or_else(|| {
            ApplicationError::Http {
                url: url.to_string(),
                reason: "HTTP 404 Not Found".into(),
            }
            .into()
        })
    }
}

impl HttpClient for MemoryHttpClient {
    fn get_text(
        &self,
        url: &str,
        headers: &[(&'static str, &'static str)],
    ) -> ModdyResult<String> {
        let body = self.respond(url, headers)?;
        String::from_utf8(body).map_err(|e| {
            ApplicationError::Parse {
                source_name: url.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn get_bytes(&self, url: &str) -> ModdyResult<Vec<u8>> {
        self.respond(url, &[])
    }
}
