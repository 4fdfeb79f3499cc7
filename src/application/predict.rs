use crate::application::generation::generate_structured;
use crate::application::stock_data::StockDataUseCase;
use crate::domain::entities::prediction::{StockAnalysis, TrendPrediction};
use crate::domain::error::DomainError;
use crate::domain::ports::generative_model::GenerativeModel;
use crate::domain::values::symbol::Symbol;
use crate::domain::values::timeframe::Timeframe;
use crate::prompts::trend::{TrendPromptInput, TREND_PREDICTION};
use std::sync::Arc;

pub struct PredictTrendsUseCase {
    stock_data: Arc<StockDataUseCase>,
    model: Arc<dyn GenerativeModel>,
}

impl PredictTrendsUseCase {
    pub fn new(stock_data: Arc<StockDataUseCase>, model: Arc<dyn GenerativeModel>) -> Self {
        Self { stock_data, model }
    }

    /// Runs the trend prompt over an already rendered history CSV.
    pub async fn predict(
        &self,
        symbol: &Symbol,
        historical_csv: &str,
        timeframe: Timeframe,
    ) -> Result<TrendPrediction, DomainError> {
        let timeframe = timeframe.to_string();
        let request = TREND_PREDICTION.request(&TrendPromptInput {
            stock_symbol: symbol.as_str(),
            historical_data: historical_csv,
            timeframe: &timeframe,
        })?;
        generate_structured(self.model.as_ref(), &request).await
    }

    /// Stock lookup followed by a prediction over the fetched history.
    pub async fn analyze(&self, symbol: &Symbol, timeframe: Timeframe) -> Result<StockAnalysis, DomainError> {
        let data = self.stock_data.execute(symbol, timeframe).await?;
        let prediction = self.predict(symbol, &data.history_csv(), timeframe).await?;
        Ok(StockAnalysis {
            symbol: data.symbol,
            timeframe: timeframe.to_string(),
            details: data.details,
            historical: data.historical,
            prediction,
        })
    }
}
