use super::PromptTemplate;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
pub struct NewsPromptInput<'a> {
    pub article: &'a str,
}

pub const NEWS_SUMMARY: PromptTemplate = PromptTemplate {
    name: "news_summary",
    source: r#"You are a financial news analyst. Your task is to provide a clear and concise summary of the provided article and analyze its potential impact on the financial markets.

Article Content:
{{ article }}

Based on the article, provide:
1. A brief, neutral summary of the key information presented.
2. An analysis of the potential market impact. Consider whether this news is likely to be positive, negative, or neutral for the company or sector involved.
"#,
    output_schema,
};

fn output_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "summary": {"type": "string"},
            "impact": {"type": "string"}
        },
        "required": ["summary", "impact"]
    })
}
