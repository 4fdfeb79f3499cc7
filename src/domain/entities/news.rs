use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    pub uuid: String,
    pub title: String,
    pub publisher: String,
    pub link: String,
    pub published: Option<NaiveDate>,
    pub thumbnail: Option<String>,
}

/// Model answer for the news-summary prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSummary {
    pub summary: String,
    pub impact: String,
}

impl NewsSummary {
    pub fn insufficient_content() -> Self {
        Self {
            summary: "Could not retrieve enough article content to summarize.".to_string(),
            impact: "N/A".to_string(),
        }
    }
}
