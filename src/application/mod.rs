pub mod collection;
pub mod compare;
pub mod generation;
pub mod news;
pub mod portfolio;
pub mod predict;
pub mod stock_data;
pub mod strategies;
pub mod strategy_plan;
pub mod summarize_news;
pub mod trending;
pub mod watchlist;
