pub mod generative_model;
pub mod key_value_store;
pub mod market_data;
pub mod page_fetcher;
