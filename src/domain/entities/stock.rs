use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// One OHLC(V) bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

/// Point-in-time quote as the provider reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarketQuote {
    pub symbol: String,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub full_exchange_name: Option<String>,
    pub quote_type: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_change: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceModule {
    pub symbol: String,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub regular_market_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryDetailModule {
    pub market_cap: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub dividend_yield: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialDataModule {
    pub recommendation_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryProfileModule {
    pub long_business_summary: Option<String>,
}

/// Quote-summary modules; any of them may be absent for a thinly covered symbol.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteSummary {
    pub price: Option<PriceModule>,
    pub summary_detail: Option<SummaryDetailModule>,
    pub financial_data: Option<FinancialDataModule>,
    pub summary_profile: Option<SummaryProfileModule>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockDetails {
    pub name: String,
    pub description: String,
    pub exchange: String,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub analyst_recommendation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockData {
    pub symbol: String,
    pub details: StockDetails,
    pub historical: Vec<HistoricalBar>,
}

impl StockData {
    /// Renders the bars as the `date,open,high,low,close` CSV fed to prompts.
    pub fn history_csv(&self) -> String {
        history_csv(&self.historical)
    }

    /// Last close and its change against the bar before it.
    pub fn latest_move(&self) -> Option<PriceMove> {
        PriceMove::from_bars(&self.historical)
    }
}

pub fn history_csv(bars: &[HistoricalBar]) -> String {
    let mut out = String::from("date,open,high,low,close");
    for b in bars {
        out.push('\n');
        out.push_str(&format!("{},{},{},{},{}", b.date, b.open, b.high, b.low, b.close));
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceMove {
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl PriceMove {
    pub fn from_bars(bars: &[HistoricalBar]) -> Option<Self> {
        let last = bars.last()?;
        let prev = if bars.len() > 1 {
            bars[bars.len() - 2].close
        } else {
            last.close
        };
        let change = last.close - prev;
        let change_percent = if prev != 0.0 { change / prev * 100.0 } else { 0.0 };
        Some(Self {
            price: last.close,
            change,
            change_percent,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingStock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// A row of the side-by-side comparison. Missing values print as "N/A".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub symbol: String,
    pub name: String,
    #[serde(serialize_with = "or_na")]
    pub price: Option<f64>,
    #[serde(serialize_with = "or_na")]
    pub market_cap: Option<f64>,
    #[serde(serialize_with = "or_na")]
    pub pe_ratio: Option<f64>,
    #[serde(serialize_with = "or_na")]
    pub dividend_yield: Option<f64>,
    #[serde(serialize_with = "or_na")]
    pub analyst_recommendation: Option<String>,
}

impl ComparisonRow {
    pub fn not_found(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: format!("{symbol} (Data not found)"),
            price: None,
            market_cap: None,
            pe_ratio: None,
            dividend_yield: None,
            analyst_recommendation: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.price.is_none() && self.name.ends_with("(Data not found)")
    }
}

fn or_na<T: Serialize, S: Serializer>(value: &Option<T>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => v.serialize(s),
        None => s.serialize_str("N/A"),
    }
}
