use crate::application::news::NEWS_COUNT;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stockbro", about = "Stock lookup, AI trend analysis, news and a local portfolio")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Company details and price history
    Lookup {
        symbol: String,
        /// daily, weekly or monthly
        #[arg(long, default_value = "daily")]
        timeframe: String,
    },
    /// AI trend prediction over the price history
    Predict {
        symbol: String,
        #[arg(long, default_value = "daily")]
        timeframe: String,
    },
    /// Multi-ticker AI strategy plan
    Plan {
        /// Comma-separated symbols, at most 4
        symbols: String,
        #[arg(long, default_value = "daily")]
        timeframe: String,
        /// low, medium or high
        #[arg(long, default_value = "medium")]
        risk: String,
        #[arg(long, default_value = "10000")]
        account_size: f64,
        /// Largest single position, percent of the account
        #[arg(long, default_value = "10")]
        max_position_pct: f64,
    },
    /// Top trending equities
    Trending,
    /// Market news by free-text query or category
    News {
        /// Free-text query
        query: Option<String>,
        /// market-news, technology, finance, economy or crypto
        #[arg(long, conflicts_with = "query")]
        category: Option<String>,
        #[arg(long, default_value_t = NEWS_COUNT)]
        limit: usize,
    },
    /// Summarize a news article with the AI model
    Summarize { url: String },
    /// Side-by-side comparison of up to 4 symbols
    Compare {
        /// Comma-separated symbols
        symbols: String,
    },
    /// Add a symbol to the watchlist
    WatchAdd { symbol: String },
    /// Remove a symbol from the watchlist
    WatchRemove { symbol: String },
    /// Show the watchlist
    Watchlist {
        /// Include the latest daily price move
        #[arg(long)]
        live: bool,
    },
    /// Buy into a position (merges with an existing one)
    PortfolioAdd {
        symbol: String,
        quantity: f64,
        purchase_price: f64,
    },
    /// Overwrite quantity and average price of a position
    PortfolioUpdate {
        symbol: String,
        quantity: f64,
        purchase_price: f64,
    },
    /// Remove a position
    PortfolioRemove { symbol: String },
    /// Show the portfolio
    Portfolio {
        /// Value positions at the latest close
        #[arg(long)]
        live: bool,
    },
    /// Save a strategy note
    StrategyAdd { title: String, description: String },
    /// Edit a strategy note
    StrategyUpdate {
        id: String,
        title: String,
        description: String,
    },
    /// Delete a strategy note
    StrategyRemove { id: String },
    /// List strategy notes
    Strategies,
}
