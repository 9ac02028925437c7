//! Blocking HTTP client built on `reqwest`.

use std::time::Duration;

use moddy_core::{
    application::{ApplicationError, ports::HttpClient},
    error::{ModdyError, ModdyResult},
};
use reqwest::blocking::{Client, Response};
use tracing::debug;

/// Production HTTP client.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Build a client with a per-request `timeout` and default `user_agent`.
    pub fn new(timeout: Duration, user_agent: &str) -> ModdyResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| ModdyError::Internal {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    fn get(&self, url: &str, headers: &[(&'static str, &'static str)]) -> ModdyResult<Response> {
        debug!(%url, "GET");
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request.send().map_err(|e| http_error(url, e))?;
        response.error_for_status().map_err(|e| http_error(url, e))
    }
}

impl HttpClient for ReqwestClient {
    fn get_text(
        &self,
        url: &str,
        headers: &[(&'static str, &'static str)],
    ) -> ModdyResult<String> {
        self.get(url, headers)?
            .text()
            .map_err(|e| http_error(url, e))
    }

    fn get_bytes(&self, url: &str) -> ModdyResult<Vec<u8>> {
        self.get(url, &[])?
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| http_error(url, e))
    }
}

fn http_error(url: &str, e: reqwest::Error) -> ModdyError {
    let reason = match e.status() {
        Some(status) => format!("HTTP {status}"),
        None if e.is_timeout() => "timed out".to_string(),
        None => e.to_string(),
    };
    ApplicationError::Http {
        url: url.to_string(),
        reason,
    }
    .into()
}
