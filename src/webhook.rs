use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use url::Url;

use crate::error::RequestError;

/// Anything that can turn an article URL into summary text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, url: &str) -> Result<String, RequestError>;
}

#[derive(Serialize)]
struct WebhookRequest<'a> {
    url: &'a str,
}

/// Forwards the URL to the automation webhook and returns its plain-text reply.
///
/// One POST per call. No retry, no timeout.
#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    endpoint: Url,
}

impl WebhookClient {
    pub fn new(endpoint: Url) -> Result<Self, RequestError> {
        let client = ClientBuilder::new()
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Summarizer for WebhookClient {
    async fn summarize(&self, url: &str) -> Result<String, RequestError> {
        // .json() sets Content-Type: application/json
        let res = self
            .client
            .post(self.endpoint.clone())
            .json(&WebhookRequest { url })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }

        let summary = res.text().await?;
        if summary.is_empty() {
            return Err(RequestError::EmptySummary);
        }

        Ok(summary)
    }
}
