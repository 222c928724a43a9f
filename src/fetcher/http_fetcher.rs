use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::app::Result;
use crate::config::PreviewConfig;
use crate::fetcher::Fetcher;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &PreviewConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;
        response.error_for_status_ref()?;

        let body = response.text().await?;
        debug!("Fetched {} bytes of markup from {}", body.len(), url);
        Ok(body)
    }
}
