mod common;

use common::{FakeMarket, FakeModel, FakePages};
use serde_json::json;
use std::sync::Arc;
use stockbro::application::strategy_plan::{PlanParameters, RiskTolerance};
use stockbro::domain::entities::prediction::TradeAction;
use stockbro::domain::error::DomainError;
use stockbro::domain::values::comparison_request::ComparisonRequest;
use stockbro::domain::values::symbol::Symbol;
use stockbro::domain::values::timeframe::Timeframe;
use stockbro::StockBro;

fn setup(model: Arc<FakeModel>) -> StockBro {
    let market = FakeMarket::default()
        .with_symbol("AAPL", &[100.0, 101.0, 102.0])
        .with_symbol("MSFT", &[300.0, 305.0]);
    StockBro::with_providers(
        ":memory:",
        Arc::new(market),
        model,
        Arc::new(FakePages::default()),
    )
    .unwrap()
}

fn trend_answer() -> serde_json::Value {
    json!({
        "analysis": "Steady uptrend. Consider a momentum entry near 102.",
        "predicted_series": {"dates": ["2024-01-04", "2024-01-05"], "prices": [103.0, 104.5]},
        "indicator_recommendations": [
            {"name": "RSI", "description": "Shows if the stock is overbought."}
        ],
        "profit_probability": 0.62
    })
}

#[tokio::test]
async fn test_analyze_combines_data_and_prediction() {
    let model = Arc::new(FakeModel::answering(trend_answer()));
    let sb = setup(model.clone());

    let analysis = sb
        .analyze(&Symbol::parse("aapl").unwrap(), Timeframe::Weekly)
        .await
        .unwrap();

    assert_eq!(analysis.symbol, "AAPL");
    assert_eq!(analysis.timeframe, "weekly");
    assert_eq!(analysis.historical.len(), 3);
    assert_eq!(analysis.prediction.predicted_series.prices, vec![103.0, 104.5]);
    assert_eq!(analysis.prediction.profit_probability, 0.62);

    let requests = model.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].prompt_name, "trend_prediction");
    assert!(requests[0].prompt.contains("AAPL over a weekly timeframe"));
    assert!(requests[0].prompt.contains("date,open,high,low,close"));
    assert!(requests[0].prompt.contains("2024-01-03,101,103,100,102"));
}

#[tokio::test]
async fn test_predict_from_csv() {
    let model = Arc::new(FakeModel::answering(trend_answer()));
    let sb = setup(model.clone());

    let csv = "date,open,high,low,close\n2024-01-01,1,2,0.5,1.5";
    let prediction = sb
        .predict_trends(&Symbol::parse("TEST").unwrap(), csv, Timeframe::Monthly)
        .await
        .unwrap();
    assert_eq!(prediction.indicator_recommendations[0].name, "RSI");
    assert!(model.requests.lock().unwrap()[0].prompt.contains(csv));
}

#[tokio::test]
async fn test_malformed_answer_is_rejected() {
    let model = Arc::new(FakeModel::answering(json!({"analysis": "no series"})));
    let sb = setup(model);

    let err = sb
        .analyze(&Symbol::parse("AAPL").unwrap(), Timeframe::Daily)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Generation(_)));
    assert!(err.to_string().contains("trend_prediction"));
}

#[tokio::test]
async fn test_model_failure_surfaces() {
    let model = Arc::new(FakeModel::failing("quota exceeded"));
    let sb = setup(model);
    let err = sb
        .analyze(&Symbol::parse("AAPL").unwrap(), Timeframe::Daily)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "AI generation failed: quota exceeded");
}

#[tokio::test]
async fn test_unknown_symbol_skips_model() {
    let model = Arc::new(FakeModel::answering(trend_answer()));
    let sb = setup(model.clone());
    assert!(sb
        .analyze(&Symbol::parse("NOPE").unwrap(), Timeframe::Daily)
        .await
        .is_err());
    assert_eq!(model.calls(), 0);
}

fn plan_params() -> PlanParameters {
    PlanParameters {
        timeframe: Timeframe::Daily,
        risk_tolerance: RiskTolerance::High,
        account_size: 25_000.0,
        max_position_pct: 12.5,
    }
}

#[tokio::test]
async fn test_strategy_plan() {
    let model = Arc::new(FakeModel::answering(json!({
        "market_overview": "Large caps are grinding higher.",
        "recommendations": [{
            "ticker": "AAPL",
            "action": "buy",
            "entry_price": 102.0,
            "stop_loss": 97.0,
            "take_profit": 112.0,
            "position_size_pct": 10.0,
            "profit_probability": 0.6,
            "rationale": "Higher lows."
        }, {
            "ticker": "MSFT",
            "action": "hold",
            "entry_price": 305.0,
            "stop_loss": 290.0,
            "take_profit": 330.0,
            "position_size_pct": 0.0,
            "profit_probability": 0.5,
            "rationale": "Extended."
        }],
        "risk_notes": ["Earnings next week."]
    })));
    let sb = setup(model.clone());

    let tickers = ComparisonRequest::parse("AAPL,MSFT").unwrap();
    let plan = sb.strategy_plan(&tickers, &plan_params()).await.unwrap();

    assert_eq!(plan.recommendations.len(), 2);
    assert_eq!(plan.recommendations[0].action, TradeAction::Buy);
    assert_eq!(plan.recommendations[1].action, TradeAction::Hold);
    assert_eq!(plan.risk_notes, vec!["Earnings next week."]);

    let requests = model.requests.lock().unwrap();
    let prompt = &requests[0].prompt;
    assert_eq!(requests[0].prompt_name, "strategy_pipeline");
    assert!(prompt.contains("AAPL"));
    assert!(prompt.contains("MSFT"));
    assert!(prompt.contains("Risk tolerance: high"));
    assert!(prompt.contains("12.5% of the account"));
}

#[tokio::test]
async fn test_strategy_plan_validates_parameters() {
    let model = Arc::new(FakeModel::answering(json!({})));
    let sb = setup(model.clone());
    let tickers = ComparisonRequest::parse("AAPL").unwrap();

    let mut params = plan_params();
    params.account_size = 0.0;
    assert!(matches!(
        sb.strategy_plan(&tickers, &params).await,
        Err(DomainError::InvalidInput(_))
    ));

    let mut params = plan_params();
    params.max_position_pct = 150.0;
    assert!(sb.strategy_plan(&tickers, &params).await.is_err());
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_strategy_plan_fails_on_unknown_ticker() {
    let model = Arc::new(FakeModel::answering(json!({})));
    let sb = setup(model.clone());
    let tickers = ComparisonRequest::parse("AAPL,NOPE").unwrap();
    assert!(sb.strategy_plan(&tickers, &plan_params()).await.is_err());
    assert_eq!(model.calls(), 0);
}
