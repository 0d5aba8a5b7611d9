use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use reqwest::{Client, ClientBuilder};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use url::Url;

use super::PageResponse;
use crate::core::{CheckError, CheckResult};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> CheckResult<PageResponse>;
}

/// Single-attempt GET fetcher. The client timeout covers the whole exchange,
/// connect through body read, and aborts the in-flight request on expiry.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> CheckResult<Self> {
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(CheckError::Network)?;

        Ok(Self { client, timeout })
    }

    fn extract_headers(response: &reqwest::Response) -> HashMap<String, String> {
        response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect()
    }

    fn classify(&self, err: reqwest::Error) -> CheckError {
        if err.is_timeout() {
            CheckError::Timeout {
                limit: self.timeout,
            }
        } else {
            CheckError::Network(err)
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> CheckResult<PageResponse> {
        info!("Fetching URL: {}", url);
        let timestamp = Utc::now();
        let started = Instant::now();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        let status_message = response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
        let headers = Self::extract_headers(&response);

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let response_time = started.elapsed();

        debug!(
            "Received response: status={}, body_length={}, elapsed={}ms",
            status,
            body.len(),
            response_time.as_millis()
        );

        Ok(PageResponse {
            status,
            status_message,
            response_time,
            body,
            headers,
            timestamp,
        })
    }
}
