use crate::domain::ports::page_fetcher::PageFetcher;
use crate::infrastructure::feeds::BROWSER_USER_AGENT;
use std::time::Duration;

pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(BROWSER_USER_AGENT)
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch article: {e}"))?;
        if !resp.status().is_success() {
            return Err(format!("Failed to fetch article: {}", resp.status()));
        }
        resp.text()
            .await
            .map_err(|e| format!("Failed to read article body: {e}"))
    }
}
