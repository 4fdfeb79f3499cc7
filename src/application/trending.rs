use crate::domain::entities::stock::{MarketQuote, TrendingStock};
use crate::domain::ports::market_data::MarketDataProvider;
use std::collections::HashSet;
use std::sync::Arc;

/// Regions tried in order until one yields enough equities.
pub const TRENDING_REGIONS: [&str; 7] = ["US", "GB", "IN", "CA", "AU", "DE", "HK"];
const QUOTES_PER_REGION: usize = 15;
const TRENDING_LIMIT: usize = 5;

pub struct TrendingUseCase {
    market: Arc<dyn MarketDataProvider>,
}

impl TrendingUseCase {
    pub fn new(market: Arc<dyn MarketDataProvider>) -> Self {
        Self { market }
    }

    /// Never fails; an empty list means no region produced enough results.
    pub async fn execute(&self) -> Vec<TrendingStock> {
        for region in TRENDING_REGIONS {
            match self.market.trending(region, QUOTES_PER_REGION).await {
                Ok(quotes) => {
                    let mut trending = filter_equities(quotes);
                    if trending.len() >= TRENDING_LIMIT {
                        trending.truncate(TRENDING_LIMIT);
                        return trending;
                    }
                    tracing::debug!(region, found = trending.len(), "not enough trending equities");
                }
                Err(e) => {
                    tracing::warn!(region, error = %e, "could not fetch trending stocks");
                }
            }
        }
        tracing::error!("failed to fetch trending stocks from any region");
        Vec::new()
    }
}

/// Equities with both a price and a change, first occurrence per symbol.
fn filter_equities(quotes: Vec<MarketQuote>) -> Vec<TrendingStock> {
    let mut seen = HashSet::new();
    quotes
        .into_iter()
        .filter_map(|q| {
            if q.quote_type.as_deref() != Some("EQUITY") {
                return None;
            }
            let price = q.regular_market_price?;
            let change = q.regular_market_change?;
            if !seen.insert(q.symbol.clone()) {
                return None;
            }
            let name = q
                .long_name
                .or(q.short_name)
                .unwrap_or_else(|| q.symbol.clone());
            Some(TrendingStock {
                symbol: q.symbol,
                name,
                price,
                change,
                change_percent: q.regular_market_change_percent.unwrap_or(0.0),
            })
        })
        .collect()
}
