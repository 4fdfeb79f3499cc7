#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches a web page and returns its raw HTML.
    async fn fetch_html(&self, url: &str) -> Result<String, String>;
}
