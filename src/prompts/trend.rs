use super::PromptTemplate;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
pub struct TrendPromptInput<'a> {
    pub stock_symbol: &'a str,
    pub historical_data: &'a str,
    pub timeframe: &'a str,
}

pub const TREND_PREDICTION: PromptTemplate = PromptTemplate {
    name: "trend_prediction",
    source: r#"You are an advanced AI-powered financial analyst and strategist specializing in stock market time series analysis. You are an expert at explaining complex topics to beginners. Your task is to:
- Ingest historical stock market data, including OHLC (Open, High, Low, Close) prices.
- Forecast likely price movements for the coming periods.
- Estimate the probability of the stock achieving a profit over the forecasted period.
- Develop a clear, actionable trading strategy (e.g., momentum-based, mean-reversion, breakout, swing trading) with specific entry and exit points.
- Provide risk management recommendations (stop-loss, take-profit, position sizing).

Analyze the provided historical stock data for {{ stock_symbol }} over a {{ timeframe }} timeframe and generate a trend prediction.

Historical Data:
{{ historical_data }}

Based on this data, provide:
1. A concise analysis summary written for an absolute beginner. Explain any trading strategies or financial terms in simple language. The summary MUST include a recommended trading strategy, specific entry/exit points, and risk management advice (stop-loss, take-profit).
2. A predicted price series for the next 30 periods.
3. A list of 5-7 technical indicators that would be most useful for this specific stock, each with its name and a concise description for a novice.
4. An estimated profit probability for the stock over the forecast horizon, between 0 and 1.
"#,
    output_schema,
};

fn output_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "analysis": {"type": "string"},
            "predicted_series": {
                "type": "object",
                "properties": {
                    "dates": {"type": "array", "items": {"type": "string"}},
                    "prices": {"type": "array", "items": {"type": "number"}}
                },
                "required": ["dates", "prices"]
            },
            "indicator_recommendations": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "description": {"type": "string"}
                    },
                    "required": ["name", "description"]
                }
            },
            "profit_probability": {"type": "number"}
        },
        "required": ["analysis", "predicted_series", "indicator_recommendations", "profit_probability"]
    })
}
