//! Shared test helpers: in-memory fakes for every network port.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use stockbro::domain::entities::news::NewsItem;
use stockbro::domain::entities::stock::{
    FinancialDataModule, HistoricalBar, MarketQuote, PriceModule, QuoteSummary, SummaryDetailModule,
    SummaryProfileModule,
};
use stockbro::domain::ports::generative_model::{GenerationRequest, GenerativeModel};
use stockbro::domain::ports::market_data::{MarketDataError, MarketDataProvider};
use stockbro::domain::ports::page_fetcher::PageFetcher;
use stockbro::StockBro;

#[derive(Clone)]
pub struct FakeSymbol {
    pub summary: QuoteSummary,
    pub quote: MarketQuote,
    pub bars: Vec<HistoricalBar>,
}

/// Market data served from fixed tables. Unknown symbols are `NotFound`,
/// symbols in `unreachable` and unknown regions are a network error.
#[derive(Default)]
pub struct FakeMarket {
    pub symbols: HashMap<String, FakeSymbol>,
    pub unreachable: HashSet<String>,
    pub trending: HashMap<String, Vec<MarketQuote>>,
    pub news: Option<Vec<NewsItem>>,
    pub news_queries: Mutex<Vec<String>>,
    pub history_intervals: Mutex<Vec<String>>,
}

impl FakeMarket {
    pub fn with_symbol(mut self, symbol: &str, closes: &[f64]) -> Self {
        self.symbols.insert(symbol.to_string(), fake_symbol(symbol, closes));
        self
    }

    pub fn with_entry(mut self, symbol: &str, entry: FakeSymbol) -> Self {
        self.symbols.insert(symbol.to_string(), entry);
        self
    }

    pub fn with_unreachable(mut self, symbol: &str) -> Self {
        self.unreachable.insert(symbol.to_string());
        self
    }

    pub fn with_trending(mut self, region: &str, quotes: Vec<MarketQuote>) -> Self {
        self.trending.insert(region.to_string(), quotes);
        self
    }

    pub fn with_news(mut self, items: Vec<NewsItem>) -> Self {
        self.news = Some(items);
        self
    }

    fn lookup(&self, symbol: &str) -> Result<&FakeSymbol, MarketDataError> {
        if self.unreachable.contains(symbol) {
            return Err(MarketDataError::Network(format!("connection reset fetching {symbol}")));
        }
        self.symbols
            .get(symbol)
            .ok_or_else(|| MarketDataError::NotFound(symbol.to_string()))
    }
}

#[async_trait]
impl MarketDataProvider for FakeMarket {
    fn name(&self) -> &str {
        "fake"
    }

    async fn quote(&self, symbol: &str) -> Result<MarketQuote, MarketDataError> {
        Ok(self.lookup(symbol)?.quote.clone())
    }

    async fn quote_summary(&self, symbol: &str) -> Result<QuoteSummary, MarketDataError> {
        Ok(self.lookup(symbol)?.summary.clone())
    }

    async fn historical(
        &self,
        symbol: &str,
        _start: DateTime<Utc>,
        interval: &str,
    ) -> Result<Vec<HistoricalBar>, MarketDataError> {
        self.history_intervals.lock().unwrap().push(interval.to_string());
        Ok(self.lookup(symbol)?.bars.clone())
    }

    async fn trending(&self, region: &str, _count: usize) -> Result<Vec<MarketQuote>, MarketDataError> {
        self.trending
            .get(region)
            .cloned()
            .ok_or_else(|| MarketDataError::Network(format!("region {region} unavailable")))
    }

    async fn search_news(&self, query: &str, count: usize) -> Result<Vec<NewsItem>, MarketDataError> {
        self.news_queries.lock().unwrap().push(query.to_string());
        match &self.news {
            Some(items) => Ok(items.iter().take(count).cloned().collect()),
            None => Err(MarketDataError::Network("search unavailable".into())),
        }
    }
}

pub fn fake_symbol(symbol: &str, closes: &[f64]) -> FakeSymbol {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| HistoricalBar {
            date: start + Duration::days(i as i64),
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
            volume: Some(1_000),
        })
        .collect();
    FakeSymbol {
        summary: QuoteSummary {
            price: Some(PriceModule {
                symbol: symbol.to_string(),
                long_name: Some(format!("{symbol} Inc.")),
                short_name: Some(symbol.to_string()),
                regular_market_price: closes.last().copied(),
            }),
            summary_detail: Some(SummaryDetailModule {
                market_cap: Some(1.5e12),
                trailing_pe: Some(25.0),
                dividend_yield: Some(0.01),
            }),
            financial_data: Some(FinancialDataModule {
                recommendation_key: Some("strong_buy".to_string()),
            }),
            summary_profile: Some(SummaryProfileModule {
                long_business_summary: Some(format!("{symbol} makes things.")),
            }),
        },
        quote: MarketQuote {
            symbol: symbol.to_string(),
            long_name: Some(format!("{symbol} Inc.")),
            full_exchange_name: Some("NasdaqGS".to_string()),
            quote_type: Some("EQUITY".to_string()),
            regular_market_price: closes.last().copied(),
            ..Default::default()
        },
        bars,
    }
}

pub fn equity(symbol: &str, price: f64, change: f64) -> MarketQuote {
    MarketQuote {
        symbol: symbol.to_string(),
        long_name: Some(format!("{symbol} Inc.")),
        quote_type: Some("EQUITY".to_string()),
        regular_market_price: Some(price),
        regular_market_change: Some(change),
        regular_market_change_percent: Some(change / price * 100.0),
        ..Default::default()
    }
}

pub fn news_item(n: usize) -> NewsItem {
    NewsItem {
        uuid: format!("uuid-{n}"),
        title: format!("Headline {n}"),
        publisher: "Wire".to_string(),
        link: format!("https://news.example/{n}"),
        published: NaiveDate::from_ymd_opt(2024, 5, 1),
        thumbnail: None,
    }
}

/// Returns a fixed answer and records every prompt it was given.
pub struct FakeModel {
    answer: Result<serde_json::Value, String>,
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl FakeModel {
    pub fn answering(answer: serde_json::Value) -> Self {
        Self {
            answer: Ok(answer),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            answer: Err(error.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeModel for FakeModel {
    fn name(&self) -> &str {
        "fake-model"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<serde_json::Value, String> {
        self.requests.lock().unwrap().push(request.clone());
        self.answer.clone()
    }
}

/// Serves HTML by URL; anything else fails.
#[derive(Default)]
pub struct FakePages {
    pub pages: HashMap<String, String>,
}

impl FakePages {
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }
}

#[async_trait]
impl PageFetcher for FakePages {
    async fn fetch_html(&self, url: &str) -> Result<String, String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| format!("404 for {url}"))
    }
}

pub fn setup() -> StockBro {
    setup_with(FakeMarket::default())
}

pub fn setup_with(market: FakeMarket) -> StockBro {
    StockBro::with_providers(
        ":memory:",
        Arc::new(market),
        Arc::new(FakeModel::failing("no model in this test")),
        Arc::new(FakePages::default()),
    )
    .unwrap()
}
