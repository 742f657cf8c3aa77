use crate::jira::{Page, PageSource, Resource};
use crate::model::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::trace;

const JSON_CONTENT: &str = "application/json";

/// Connection settings for one tracker instance.
#[derive(Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
    pub timeout: Option<Duration>,
}

impl JiraConfig {
    pub fn new(
        base_url: impl ToString,
        email: impl ToString,
        api_token: impl ToString,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let base_url = base_url.to_string().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::Config("tracker base URL is empty".to_string()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "tracker base URL `{base_url}` must start with http:// or https://"
            )));
        }
        Ok(Self {
            base_url,
            email: email.to_string(),
            api_token: api_token.to_string(),
            timeout,
        })
    }
}

impl fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraConfig")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct JiraClient {
    config: JiraConfig,
    http: Client,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT));
        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|source| Error::Http {
            url: config.base_url.clone(),
            source,
        })?;
        Ok(Self::with_http_client(config, http))
    }

    /// Uses a prebuilt HTTP client; the `Accept` header is still set per request.
    pub fn with_http_client(config: JiraConfig, http: Client) -> Self {
        Self { config, http }
    }

    pub fn url(&self, resource: &Resource) -> String {
        format!("{}{}", self.config.base_url, resource.path())
    }
}

impl PageSource for JiraClient {
    async fn fetch_page(
        &self,
        resource: &Resource,
        start_at: usize,
        page_size: usize,
    ) -> Result<Page> {
        let url = self.url(resource);
        let response = self
            .http
            .get(&url)
            .query(&resource.query(start_at, page_size))
            .header(ACCEPT, JSON_CONTENT)
            .basic_auth(&self.config.email, Some(&self.config.api_token))
            .send()
            .await
            .map_err(|source| Error::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }

        let body = response.text().await.map_err(|source| Error::Http {
            url: url.clone(),
            source,
        })?;
        trace!(%url, start_at, bytes = body.len(), "received page");
        let payload: Value =
            serde_json::from_str(&body).map_err(|source| Error::Payload { url, source })?;
        Page::from_payload(resource, start_at, &payload)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
