pub mod news;
pub mod portfolio_item;
pub mod prediction;
pub mod snapshot;
pub mod stock;
pub mod strategy;
