use super::PromptTemplate;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
pub struct TickerHistory {
    pub symbol: String,
    pub history_csv: String,
}

/// Inputs of the multi-ticker prompt. Percentages are 0-100.
#[derive(Debug, Serialize)]
pub struct StrategyPromptInput {
    pub tickers: Vec<TickerHistory>,
    pub timeframe: String,
    pub risk_tolerance: String,
    pub account_size: f64,
    pub max_position_pct: f64,
}

pub const STRATEGY_PIPELINE: PromptTemplate = PromptTemplate {
    name: "strategy_pipeline",
    source: r#"You are a disciplined, safety-minded financial strategist. You compare several stocks and propose a trading plan that protects capital first.

Account size: {{ account_size }}
Risk tolerance: {{ risk_tolerance }}
Maximum position size: {{ max_position_pct }}% of the account
Timeframe: {{ timeframe }}

{% for t in tickers %}Historical data for {{ t.symbol }}:
{{ t.history_csv }}

{% endfor %}For the market as a whole, write a short overview of conditions visible in this data.

For every ticker above, provide:
1. An action: buy, sell or hold.
2. An entry price, a stop-loss and a take-profit level.
3. A position size as a percentage of the account, never above the maximum position size, smaller for lower risk tolerance.
4. An estimated profit probability between 0 and 1.
5. A short rationale a beginner can follow.

Finish with a list of risk notes covering anything that could invalidate the plan.
"#,
    output_schema,
};

fn output_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "market_overview": {"type": "string"},
            "recommendations": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ticker": {"type": "string"},
                        "action": {"type": "string", "enum": ["buy", "sell", "hold"]},
                        "entry_price": {"type": "number"},
                        "stop_loss": {"type": "number"},
                        "take_profit": {"type": "number"},
                        "position_size_pct": {"type": "number"},
                        "profit_probability": {"type": "number"},
                        "rationale": {"type": "string"}
                    },
                    "required": ["ticker", "action", "entry_price", "stop_loss", "take_profit",
                                 "position_size_pct", "profit_probability", "rationale"]
                }
            },
            "risk_notes": {"type": "array", "items": {"type": "string"}}
        },
        "required": ["market_overview", "recommendations", "risk_notes"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_every_ticker() {
        let input = StrategyPromptInput {
            tickers: vec![
                TickerHistory {
                    symbol: "AAPL".into(),
                    history_csv: "date,open,high,low,close\n2024-03-01,1,2,0.5,1.5".into(),
                },
                TickerHistory {
                    symbol: "MSFT".into(),
                    history_csv: "date,open,high,low,close\n2024-03-01,3,4,2.5,3.5".into(),
                },
            ],
            timeframe: "daily".into(),
            risk_tolerance: "low".into(),
            account_size: 10000.0,
            max_position_pct: 12.5,
        };
        let text = STRATEGY_PIPELINE.render_text(&input).unwrap();
        assert!(text.contains("Historical data for AAPL:"));
        assert!(text.contains("Historical data for MSFT:"));
        assert!(text.contains("Risk tolerance: low"));
        assert!(text.contains("12.5% of the account"));
    }
}
