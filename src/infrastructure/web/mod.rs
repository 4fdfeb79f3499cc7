pub mod article;
pub mod http_fetcher;
