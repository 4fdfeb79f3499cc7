use crate::application::collection::{JsonCollection, PORTFOLIO_KEY};
use crate::application::stock_data::StockDataUseCase;
use crate::domain::entities::portfolio_item::PortfolioItem;
use crate::domain::entities::snapshot::{HoldingRow, PortfolioSnapshot};
use crate::domain::error::DomainError;
use crate::domain::ports::key_value_store::KeyValueStore;
use crate::domain::values::forms::validate_position_form;
use crate::domain::values::symbol::Symbol;
use crate::domain::values::timeframe::Timeframe;
use futures::future::join_all;
use std::sync::Arc;

pub struct PortfolioUseCase {
    items: JsonCollection<PortfolioItem>,
    stock_data: Arc<StockDataUseCase>,
}

impl PortfolioUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>, stock_data: Arc<StockDataUseCase>) -> Result<Self, DomainError> {
        Ok(Self {
            items: JsonCollection::load(store, PORTFOLIO_KEY)?,
            stock_data,
        })
    }

    pub fn list(&self) -> Result<Vec<PortfolioItem>, DomainError> {
        self.items.items()
    }

    /// Adds a lot, merging into an existing position at the
    /// quantity-weighted average price. Returns the resulting position.
    pub fn add(&self, symbol: &Symbol, quantity: f64, purchase_price: f64) -> Result<PortfolioItem, DomainError> {
        validate_position_form(quantity, purchase_price).map_err(DomainError::InvalidInput)?;
        let item = self.items.update(|items| {
            match items.iter_mut().find(|i| i.symbol == symbol.as_str()) {
                Some(existing) => {
                    existing.merge(quantity, purchase_price);
                    existing.clone()
                }
                None => {
                    let item = PortfolioItem::new(symbol.to_string(), quantity, purchase_price);
                    items.push(item.clone());
                    item
                }
            }
        })?;
        tracing::info!(%symbol, quantity, "portfolio updated");
        Ok(item)
    }

    /// Overwrites quantity and average price of an existing position.
    pub fn update(&self, symbol: &Symbol, quantity: f64, purchase_price: f64) -> Result<PortfolioItem, DomainError> {
        validate_position_form(quantity, purchase_price).map_err(DomainError::InvalidInput)?;
        self.items
            .update(|items| {
                items
                    .iter_mut()
                    .find(|i| i.symbol == symbol.as_str())
                    .map(|existing| {
                        existing.quantity = quantity;
                        existing.purchase_price = purchase_price;
                        existing.clone()
                    })
            })?
            .ok_or_else(|| DomainError::NotFound(format!("{symbol} is not in your portfolio")))
    }

    /// Returns false when the symbol was not held.
    pub fn remove(&self, symbol: &Symbol) -> Result<bool, DomainError> {
        self.items.update(|items| {
            let before = items.len();
            items.retain(|i| i.symbol != symbol.as_str());
            items.len() != before
        })
    }

    /// Values every position at the latest daily close.
    pub async fn snapshot(&self) -> Result<PortfolioSnapshot, DomainError> {
        let positions = self.list()?;
        let rows = join_all(positions.iter().map(|item| async move {
            let symbol = match Symbol::parse(&item.symbol) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!(symbol = %item.symbol, error = %e, "skipping invalid portfolio position");
                    return None;
                }
            };
            let data = match self.stock_data.execute(&symbol, Timeframe::Daily).await {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!(%symbol, error = %e, "skipping portfolio position");
                    return None;
                }
            };
            let Some(mv) = data.latest_move() else {
                tracing::warn!(%symbol, "no price bars, skipping portfolio position");
                return None;
            };
            Some(holding_row(item, data.details.name, mv.price, mv.change, mv.change_percent))
        }))
        .await;

        let mut holdings = Vec::new();
        let mut unavailable = Vec::new();
        for (item, row) in positions.iter().zip(rows) {
            match row {
                Some(r) => holdings.push(r),
                None => unavailable.push(item.symbol.clone()),
            }
        }
        Ok(PortfolioSnapshot::from_rows(holdings, unavailable))
    }
}

fn holding_row(item: &PortfolioItem, name: String, price: f64, change: f64, change_percent: f64) -> HoldingRow {
    let market_value = item.quantity * price;
    let cost_basis = item.cost_basis();
    let gain = market_value - cost_basis;
    HoldingRow {
        symbol: item.symbol.clone(),
        name,
        quantity: item.quantity,
        purchase_price: item.purchase_price,
        current_price: price,
        change,
        change_percent,
        market_value,
        cost_basis,
        gain,
        gain_percent: if cost_basis != 0.0 { gain / cost_basis * 100.0 } else { 0.0 },
    }
}
