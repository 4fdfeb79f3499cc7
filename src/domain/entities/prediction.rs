use super::stock::{HistoricalBar, StockDetails};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedSeries {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecommendation {
    pub name: String,
    pub description: String,
}

/// Model answer for the single-symbol trend prompt. Nothing here is computed
/// locally; the numbers are whatever the model returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPrediction {
    pub analysis: String,
    pub predicted_series: PredictedSeries,
    pub indicator_recommendations: Vec<IndicatorRecommendation>,
    pub profit_probability: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockAnalysis {
    pub symbol: String,
    pub timeframe: String,
    pub details: StockDetails,
    pub historical: Vec<HistoricalBar>,
    pub prediction: TrendPrediction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerRecommendation {
    pub ticker: String,
    pub action: TradeAction,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub position_size_pct: f64,
    pub profit_probability: f64,
    pub rationale: String,
}

/// Model answer for the multi-ticker strategy prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyPlan {
    pub market_overview: String,
    pub recommendations: Vec<TickerRecommendation>,
    pub risk_notes: Vec<String>,
}
