use crate::application::generation::generate_structured;
use crate::application::stock_data::StockDataUseCase;
use crate::domain::entities::prediction::StrategyPlan;
use crate::domain::error::DomainError;
use crate::domain::ports::generative_model::GenerativeModel;
use crate::domain::values::comparison_request::ComparisonRequest;
use crate::domain::values::timeframe::Timeframe;
use crate::prompts::strategy_pipeline::{StrategyPromptInput, TickerHistory, STRATEGY_PIPELINE};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTolerance::Low => write!(f, "low"),
            RiskTolerance::Medium => write!(f, "medium"),
            RiskTolerance::High => write!(f, "high"),
        }
    }
}

impl FromStr for RiskTolerance {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskTolerance::Low),
            "medium" => Ok(RiskTolerance::Medium),
            "high" => Ok(RiskTolerance::High),
            _ => Err(format!("Unknown risk tolerance: {s} (use low, medium or high)")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlanParameters {
    pub timeframe: Timeframe,
    pub risk_tolerance: RiskTolerance,
    pub account_size: f64,
    pub max_position_pct: f64,
}

impl PlanParameters {
    fn validate(&self) -> Result<(), DomainError> {
        if !self.account_size.is_finite() || self.account_size <= 0.0 {
            return Err(DomainError::InvalidInput(
                "Account size must be positive.".to_string(),
            ));
        }
        if !(self.max_position_pct > 0.0 && self.max_position_pct <= 100.0) {
            return Err(DomainError::InvalidInput(
                "Maximum position size must be between 0 and 100 percent.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Multi-ticker plan from the later prompt version: every ticker's history
/// plus risk and sizing parameters go into one prompt.
pub struct StrategyPlanUseCase {
    stock_data: Arc<StockDataUseCase>,
    model: Arc<dyn GenerativeModel>,
}

impl StrategyPlanUseCase {
    pub fn new(stock_data: Arc<StockDataUseCase>, model: Arc<dyn GenerativeModel>) -> Self {
        Self { stock_data, model }
    }

    pub async fn execute(
        &self,
        tickers: &ComparisonRequest,
        params: &PlanParameters,
    ) -> Result<StrategyPlan, DomainError> {
        params.validate()?;

        let histories = try_join_all(tickers.symbols().iter().map(|symbol| async move {
            let data = self.stock_data.execute(symbol, params.timeframe).await?;
            Ok::<_, DomainError>(TickerHistory {
                symbol: data.symbol.clone(),
                history_csv: data.history_csv(),
            })
        }))
        .await?;

        let request = STRATEGY_PIPELINE.request(&StrategyPromptInput {
            tickers: histories,
            timeframe: params.timeframe.to_string(),
            risk_tolerance: params.risk_tolerance.to_string(),
            account_size: params.account_size,
            max_position_pct: params.max_position_pct,
        })?;
        generate_structured(self.model.as_ref(), &request).await
    }
}
