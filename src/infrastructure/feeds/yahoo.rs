use super::BROWSER_USER_AGENT;
use crate::domain::entities::news::NewsItem;
use crate::domain::entities::stock::{
    FinancialDataModule, HistoricalBar, MarketQuote, PriceModule, QuoteSummary,
    SummaryDetailModule, SummaryProfileModule,
};
use crate::domain::ports::market_data::{MarketDataError, MarketDataProvider};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::OnceCell;

const QUERY1: &str = "https://query1.finance.yahoo.com";
const QUERY2: &str = "https://query2.finance.yahoo.com";
const SUMMARY_MODULES: &str = "price,summaryDetail,financialData,summaryProfile";

/// Yahoo Finance client. Chart and search endpoints need no auth; the
/// quote and quoteSummary endpoints need a session cookie plus crumb,
/// fetched once on first use.
pub struct YahooFinance {
    client: reqwest::Client,
    crumb: OnceCell<String>,
}

impl YahooFinance {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(BROWSER_USER_AGENT)
                .cookie_store(true)
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            crumb: OnceCell::new(),
        }
    }

    async fn crumb(&self) -> Result<&str, MarketDataError> {
        let crumb = self
            .crumb
            .get_or_try_init(|| async {
                // only sets the session cookie; the status is usually 404
                let _ = self.client.get("https://fc.yahoo.com").send().await;
                let resp = self
                    .client
                    .get(format!("{QUERY1}/v1/test/getcrumb"))
                    .send()
                    .await
                    .map_err(|e| MarketDataError::Network(e.to_string()))?;
                if !resp.status().is_success() {
                    return Err(MarketDataError::Network(format!(
                        "Yahoo crumb request returned {}",
                        resp.status()
                    )));
                }
                let crumb = resp
                    .text()
                    .await
                    .map_err(|e| MarketDataError::Network(e.to_string()))?;
                tracing::debug!("acquired Yahoo crumb");
                Ok(crumb.trim().to_string())
            })
            .await?;
        Ok(crumb.as_str())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
        subject: &str,
    ) -> Result<T, MarketDataError> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| MarketDataError::Network(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::NotFound(subject.to_string()));
        }
        if !status.is_success() {
            return Err(MarketDataError::Network(format!(
                "Yahoo API returned {status} for {subject}"
            )));
        }

        resp.json()
            .await
            .map_err(|e| MarketDataError::Parse(e.to_string()))
    }

    async fn fetch_chart(
        &self,
        symbol: &str,
        query: &[(&str, String)],
    ) -> Result<ChartData, MarketDataError> {
        let url = endpoint(QUERY1, &["v8", "finance", "chart", symbol])?;
        let data: ChartResponse = self.get_json(url, query, symbol).await?;
        data.into_first(symbol)
    }

    async fn quotes(&self, symbols: &[String]) -> Result<Vec<MarketQuote>, MarketDataError> {
        if symbols.is_empty() {
            return Ok(vec![]);
        }
        let crumb = self.crumb().await?.to_string();
        let url = endpoint(QUERY1, &["v7", "finance", "quote"])?;
        let data: QuoteResponse = self
            .get_json(
                url,
                &[("symbols", symbols.join(",")), ("crumb", crumb)],
                "quote batch",
            )
            .await?;
        Ok(data
            .quote_response
            .result
            .into_iter()
            .map(RawQuote::into_quote)
            .collect())
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinance {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    async fn quote(&self, symbol: &str) -> Result<MarketQuote, MarketDataError> {
        let chart = self
            .fetch_chart(
                symbol,
                &[("range", "1d".to_string()), ("interval", "1d".to_string())],
            )
            .await?;
        Ok(chart.meta.into_quote())
    }

    async fn quote_summary(&self, symbol: &str) -> Result<QuoteSummary, MarketDataError> {
        let crumb = self.crumb().await?.to_string();
        let url = endpoint(QUERY2, &["v10", "finance", "quoteSummary", symbol])?;
        let data: QuoteSummaryResponse = self
            .get_json(
                url,
                &[("modules", SUMMARY_MODULES.to_string()), ("crumb", crumb)],
                symbol,
            )
            .await?;
        data.into_summary(symbol)
    }

    async fn historical(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        interval: &str,
    ) -> Result<Vec<HistoricalBar>, MarketDataError> {
        let chart = self
            .fetch_chart(
                symbol,
                &[
                    ("period1", start.timestamp().to_string()),
                    ("period2", Utc::now().timestamp().to_string()),
                    ("interval", interval.to_string()),
                    ("events", "history".to_string()),
                ],
            )
            .await?;
        Ok(chart.into_bars())
    }

    async fn trending(&self, region: &str, count: usize) -> Result<Vec<MarketQuote>, MarketDataError> {
        let url = endpoint(QUERY1, &["v1", "finance", "trending", region])?;
        let data: TrendingResponse = self
            .get_json(url, &[("count", count.to_string())], region)
            .await?;
        let symbols = data.into_symbols();
        self.quotes(&symbols).await
    }

    async fn search_news(&self, query: &str, count: usize) -> Result<Vec<NewsItem>, MarketDataError> {
        let url = endpoint(QUERY2, &["v1", "finance", "search"])?;
        let data: SearchResponse = self
            .get_json(
                url,
                &[
                    ("q", query.to_string()),
                    ("newsCount", count.to_string()),
                    ("quotesCount", "0".to_string()),
                ],
                query,
            )
            .await?;
        Ok(data.news.into_iter().map(RawNews::into_item).collect())
    }
}

/// Joins path segments onto `base`, percent-encoding each one so a symbol
/// cannot change the request target.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, MarketDataError> {
    let mut url = Url::parse(base).map_err(|e| MarketDataError::Parse(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| MarketDataError::Parse(format!("{base} cannot take a path")))?
        .extend(segments);
    Ok(url)
}

// --- v8 chart ---

#[derive(Debug, serde::Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, serde::Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<YahooError>,
}

#[derive(Debug, serde::Deserialize)]
struct YahooError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl YahooError {
    fn into_error(self, subject: &str) -> MarketDataError {
        let code = self.code.unwrap_or_default();
        if code.eq_ignore_ascii_case("not found") {
            MarketDataError::NotFound(subject.to_string())
        } else {
            MarketDataError::Parse(format!(
                "Yahoo error {code}: {}",
                self.description.unwrap_or_default()
            ))
        }
    }
}

impl ChartResponse {
    fn into_first(self, symbol: &str) -> Result<ChartData, MarketDataError> {
        if let Some(err) = self.chart.error {
            return Err(err.into_error(symbol));
        }
        self.chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| MarketDataError::NotFound(symbol.to_string()))
    }
}

#[derive(Debug, serde::Deserialize)]
struct ChartData {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Option<ChartIndicators>,
}

#[derive(Debug, serde::Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    symbol: String,
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    long_name: Option<String>,
    #[serde(default)]
    full_exchange_name: Option<String>,
    #[serde(default)]
    instrument_type: Option<String>,
    #[serde(default)]
    regular_market_price: Option<f64>,
    #[serde(default)]
    chart_previous_close: Option<f64>,
}

impl ChartMeta {
    fn into_quote(self) -> MarketQuote {
        let (change, change_pct) = match (self.regular_market_price, self.chart_previous_close) {
            (Some(price), Some(prev)) if prev > 0.0 => {
                let change = price - prev;
                (Some(change), Some(change / prev * 100.0))
            }
            _ => (None, None),
        };
        MarketQuote {
            symbol: self.symbol,
            long_name: self.long_name,
            short_name: self.short_name,
            full_exchange_name: self.full_exchange_name,
            quote_type: self.instrument_type,
            regular_market_price: self.regular_market_price,
            regular_market_change: change,
            regular_market_change_percent: change_pct,
        }
    }
}

impl ChartData {
    /// Zips the parallel OHLCV arrays; bars with a null price are dropped.
    fn into_bars(self) -> Vec<HistoricalBar> {
        let q = self
            .indicators
            .and_then(|i| i.quote.into_iter().next())
            .unwrap_or_default();

        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, ts)| {
                let date = DateTime::from_timestamp(*ts, 0)?.date_naive();
                Some(HistoricalBar {
                    date,
                    open: (*q.open.get(i)?)?,
                    high: (*q.high.get(i)?)?,
                    low: (*q.low.get(i)?)?,
                    close: (*q.close.get(i)?)?,
                    volume: q.volume.get(i).copied().flatten(),
                })
            })
            .collect()
    }
}

// --- v10 quoteSummary ---

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteSummaryResponse {
    quote_summary: QuoteSummaryResult,
}

#[derive(Debug, serde::Deserialize)]
struct QuoteSummaryResult {
    result: Option<Vec<RawSummary>>,
    error: Option<YahooError>,
}

/// Yahoo wraps numbers as `{"raw": 1.0, "fmt": "1.00"}`, or `{}` when absent.
#[derive(Debug, Default, serde::Deserialize)]
struct RawNumber {
    #[serde(default)]
    raw: Option<f64>,
}

fn raw(n: Option<RawNumber>) -> Option<f64> {
    n.and_then(|n| n.raw)
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSummary {
    #[serde(default)]
    price: Option<RawPrice>,
    #[serde(default)]
    summary_detail: Option<RawSummaryDetail>,
    #[serde(default)]
    financial_data: Option<RawFinancialData>,
    #[serde(default)]
    summary_profile: Option<RawSummaryProfile>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPrice {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    long_name: Option<String>,
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    regular_market_price: Option<RawNumber>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSummaryDetail {
    #[serde(default)]
    market_cap: Option<RawNumber>,
    #[serde(default, rename = "trailingPE")]
    trailing_pe: Option<RawNumber>,
    #[serde(default)]
    dividend_yield: Option<RawNumber>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFinancialData {
    #[serde(default)]
    recommendation_key: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSummaryProfile {
    #[serde(default)]
    long_business_summary: Option<String>,
}

impl QuoteSummaryResponse {
    fn into_summary(self, symbol: &str) -> Result<QuoteSummary, MarketDataError> {
        if let Some(err) = self.quote_summary.error {
            return Err(err.into_error(symbol));
        }
        let raw_summary = self
            .quote_summary
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| MarketDataError::NotFound(symbol.to_string()))?;

        Ok(QuoteSummary {
            price: raw_summary.price.map(|p| PriceModule {
                symbol: p.symbol.unwrap_or_else(|| symbol.to_string()),
                long_name: p.long_name,
                short_name: p.short_name,
                regular_market_price: raw(p.regular_market_price),
            }),
            summary_detail: raw_summary.summary_detail.map(|d| SummaryDetailModule {
                market_cap: raw(d.market_cap),
                trailing_pe: raw(d.trailing_pe),
                dividend_yield: raw(d.dividend_yield),
            }),
            financial_data: raw_summary.financial_data.map(|f| FinancialDataModule {
                recommendation_key: f.recommendation_key,
            }),
            summary_profile: raw_summary.summary_profile.map(|p| SummaryProfileModule {
                long_business_summary: p.long_business_summary,
            }),
        })
    }
}

// --- v1 trending + v7 quote ---

#[derive(Debug, serde::Deserialize)]
struct TrendingResponse {
    finance: TrendingFinance,
}

#[derive(Debug, serde::Deserialize)]
struct TrendingFinance {
    #[serde(default)]
    result: Option<Vec<TrendingResult>>,
}

#[derive(Debug, serde::Deserialize)]
struct TrendingResult {
    #[serde(default)]
    quotes: Vec<TrendingSymbol>,
}

#[derive(Debug, serde::Deserialize)]
struct TrendingSymbol {
    symbol: String,
}

impl TrendingResponse {
    fn into_symbols(self) -> Vec<String> {
        self.finance
            .result
            .unwrap_or_default()
            .into_iter()
            .flat_map(|r| r.quotes)
            .map(|q| q.symbol)
            .collect()
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResponse {
    quote_response: QuoteResult,
}

#[derive(Debug, serde::Deserialize)]
struct QuoteResult {
    #[serde(default)]
    result: Vec<RawQuote>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuote {
    symbol: String,
    #[serde(default)]
    quote_type: Option<String>,
    #[serde(default)]
    long_name: Option<String>,
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    full_exchange_name: Option<String>,
    #[serde(default)]
    regular_market_price: Option<f64>,
    #[serde(default)]
    regular_market_change: Option<f64>,
    #[serde(default)]
    regular_market_change_percent: Option<f64>,
}

impl RawQuote {
    fn into_quote(self) -> MarketQuote {
        MarketQuote {
            symbol: self.symbol,
            long_name: self.long_name,
            short_name: self.short_name,
            full_exchange_name: self.full_exchange_name,
            quote_type: self.quote_type,
            regular_market_price: self.regular_market_price,
            regular_market_change: self.regular_market_change,
            regular_market_change_percent: self.regular_market_change_percent,
        }
    }
}

// --- v1 search ---

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    news: Vec<RawNews>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNews {
    uuid: String,
    title: String,
    #[serde(default)]
    publisher: String,
    link: String,
    #[serde(default)]
    provider_publish_time: Option<i64>,
    #[serde(default)]
    thumbnail: Option<RawThumbnail>,
}

#[derive(Debug, serde::Deserialize)]
struct RawThumbnail {
    #[serde(default)]
    resolutions: Vec<RawResolution>,
}

#[derive(Debug, serde::Deserialize)]
struct RawResolution {
    url: String,
    #[serde(default)]
    tag: String,
}

impl RawNews {
    fn into_item(self) -> NewsItem {
        NewsItem {
            uuid: self.uuid,
            title: self.title,
            publisher: self.publisher,
            link: self.link,
            published: self
                .provider_publish_time
                .and_then(|t| DateTime::from_timestamp(t, 0))
                .map(|dt| dt.date_naive()),
            thumbnail: self
                .thumbnail
                .and_then(|t| t.resolutions.into_iter().find(|r| r.tag == "m"))
                .map(|r| r.url),
        }
    }
}
