use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchlistRow {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingRow {
    pub symbol: String,
    pub name: String,
    pub quantity: f64,
    pub purchase_price: f64,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub market_value: f64,
    pub cost_basis: f64,
    pub gain: f64,
    pub gain_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSnapshot {
    pub holdings: Vec<HoldingRow>,
    pub total_market_value: f64,
    pub total_cost_basis: f64,
    pub total_gain: f64,
    pub total_gain_percent: f64,
    /// Symbols whose prices could not be fetched.
    pub unavailable: Vec<String>,
}

impl PortfolioSnapshot {
    pub fn from_rows(holdings: Vec<HoldingRow>, unavailable: Vec<String>) -> Self {
        let total_market_value: f64 = holdings.iter().map(|h| h.market_value).sum();
        let total_cost_basis: f64 = holdings.iter().map(|h| h.cost_basis).sum();
        let total_gain = total_market_value - total_cost_basis;
        let total_gain_percent = if total_cost_basis != 0.0 {
            total_gain / total_cost_basis * 100.0
        } else {
            0.0
        };
        Self {
            holdings,
            total_market_value,
            total_cost_basis,
            total_gain,
            total_gain_percent,
            unavailable,
        }
    }
}
