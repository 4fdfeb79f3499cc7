pub mod comparison_request;
pub mod forms;
pub mod news_category;
pub mod recommendation;
pub mod symbol;
pub mod timeframe;
