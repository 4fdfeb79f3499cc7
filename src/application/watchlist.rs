use crate::application::collection::{JsonCollection, WATCHLIST_KEY};
use crate::application::stock_data::StockDataUseCase;
use crate::domain::entities::snapshot::WatchlistRow;
use crate::domain::error::DomainError;
use crate::domain::ports::key_value_store::KeyValueStore;
use crate::domain::values::symbol::Symbol;
use crate::domain::values::timeframe::Timeframe;
use futures::future::join_all;
use std::sync::Arc;

pub struct WatchlistUseCase {
    items: JsonCollection<String>,
    stock_data: Arc<StockDataUseCase>,
}

impl WatchlistUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>, stock_data: Arc<StockDataUseCase>) -> Result<Self, DomainError> {
        Ok(Self {
            items: JsonCollection::load(store, WATCHLIST_KEY)?,
            stock_data,
        })
    }

    pub fn list(&self) -> Result<Vec<String>, DomainError> {
        self.items.items()
    }

    pub fn contains(&self, symbol: &Symbol) -> Result<bool, DomainError> {
        Ok(self.list()?.iter().any(|s| s == symbol.as_str()))
    }

    /// Returns false when the symbol was already listed.
    pub fn add(&self, symbol: &Symbol) -> Result<bool, DomainError> {
        self.items.update(|items| {
            if items.iter().any(|s| s == symbol.as_str()) {
                return false;
            }
            items.push(symbol.to_string());
            true
        })
    }

    /// Returns false when the symbol was not listed.
    pub fn remove(&self, symbol: &Symbol) -> Result<bool, DomainError> {
        self.items.update(|items| {
            let before = items.len();
            items.retain(|s| s != symbol.as_str());
            items.len() != before
        })
    }

    /// Latest daily move for every listed symbol; symbols that fail to load
    /// are left out.
    pub async fn snapshot(&self) -> Result<Vec<WatchlistRow>, DomainError> {
        let symbols = self.list()?;
        let rows = join_all(symbols.iter().map(|raw| async move {
            let symbol = match Symbol::parse(raw) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!(symbol = %raw, error = %e, "skipping invalid watchlist entry");
                    return None;
                }
            };
            let data = match self.stock_data.execute(&symbol, Timeframe::Daily).await {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!(%symbol, error = %e, "skipping watchlist entry");
                    return None;
                }
            };
            let Some(mv) = data.latest_move() else {
                tracing::warn!(%symbol, "no price bars, skipping watchlist entry");
                return None;
            };
            Some(WatchlistRow {
                symbol: data.symbol,
                name: data.details.name,
                price: mv.price,
                change: mv.change,
                change_percent: mv.change_percent,
            })
        }))
        .await;
        Ok(rows.into_iter().flatten().collect())
    }
}
