pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod prompts;

use crate::application::compare::CompareUseCase;
use crate::application::news::NewsUseCase;
use crate::application::portfolio::PortfolioUseCase;
use crate::application::predict::PredictTrendsUseCase;
use crate::application::stock_data::StockDataUseCase;
use crate::application::strategies::StrategyUseCase;
use crate::application::strategy_plan::{PlanParameters, StrategyPlanUseCase};
use crate::application::summarize_news::SummarizeNewsUseCase;
use crate::application::trending::TrendingUseCase;
use crate::application::watchlist::WatchlistUseCase;
use crate::config::{AiProvider, Settings};
use crate::domain::entities::news::{NewsItem, NewsSummary};
use crate::domain::entities::portfolio_item::PortfolioItem;
use crate::domain::entities::prediction::{StockAnalysis, StrategyPlan, TrendPrediction};
use crate::domain::entities::snapshot::{PortfolioSnapshot, WatchlistRow};
use crate::domain::entities::stock::{ComparisonRow, StockData, TrendingStock};
use crate::domain::entities::strategy::Strategy;
use crate::domain::error::DomainError;
use crate::domain::ports::generative_model::GenerativeModel;
use crate::domain::ports::key_value_store::KeyValueStore;
use crate::domain::ports::market_data::MarketDataProvider;
use crate::domain::ports::page_fetcher::PageFetcher;
use crate::domain::values::comparison_request::ComparisonRequest;
use crate::domain::values::symbol::Symbol;
use crate::domain::values::timeframe::Timeframe;
use crate::infrastructure::feeds::yahoo::YahooFinance;
use crate::infrastructure::generative::gemini::GeminiModel;
use crate::infrastructure::generative::openai::OpenAiModel;
use crate::infrastructure::sqlite::kv_store::SqliteKeyValueStore;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::web::http_fetcher::HttpPageFetcher;
use rusqlite::Connection;
use std::sync::Arc;

pub struct StockBro {
    stock_data_uc: Arc<StockDataUseCase>,
    predict_uc: PredictTrendsUseCase,
    plan_uc: StrategyPlanUseCase,
    trending_uc: TrendingUseCase,
    news_uc: NewsUseCase,
    summarize_uc: SummarizeNewsUseCase,
    compare_uc: CompareUseCase,
    watchlist_uc: WatchlistUseCase,
    portfolio_uc: PortfolioUseCase,
    strategy_uc: StrategyUseCase,
}

impl StockBro {
    pub fn new(settings: &Settings) -> Result<Self, DomainError> {
        let market: Arc<dyn MarketDataProvider> = Arc::new(YahooFinance::new(settings.http_timeout));
        let model: Arc<dyn GenerativeModel> = match settings.ai_provider {
            AiProvider::Gemini => Arc::new(GeminiModel::new(
                settings.ai_api_key.clone(),
                settings.ai_model.clone(),
                settings.http_timeout,
            )),
            AiProvider::OpenAi => Arc::new(OpenAiModel::new(
                settings.ai_api_key.clone(),
                settings.ai_model.clone(),
                settings.http_timeout,
            )),
        };
        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpPageFetcher::new(settings.http_timeout));

        Self::with_providers(&settings.db_path, market, model, fetcher)
    }

    pub fn with_providers(
        db_path: &str,
        market: Arc<dyn MarketDataProvider>,
        model: Arc<dyn GenerativeModel>,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        run_migrations(&conn).map_err(DomainError::Database)?;
        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new(conn));

        let stock_data_uc = Arc::new(StockDataUseCase::new(market.clone()));

        Ok(Self {
            predict_uc: PredictTrendsUseCase::new(stock_data_uc.clone(), model.clone()),
            plan_uc: StrategyPlanUseCase::new(stock_data_uc.clone(), model.clone()),
            trending_uc: TrendingUseCase::new(market.clone()),
            news_uc: NewsUseCase::new(market.clone()),
            summarize_uc: SummarizeNewsUseCase::new(fetcher, model),
            compare_uc: CompareUseCase::new(market),
            watchlist_uc: WatchlistUseCase::new(store.clone(), stock_data_uc.clone())?,
            portfolio_uc: PortfolioUseCase::new(store.clone(), stock_data_uc.clone())?,
            strategy_uc: StrategyUseCase::new(store)?,
            stock_data_uc,
        })
    }

    // Market data and AI
    pub async fn stock_data(&self, symbol: &Symbol, timeframe: Timeframe) -> Result<StockData, DomainError> {
        self.stock_data_uc.execute(symbol, timeframe).await
    }

    pub async fn predict_trends(
        &self,
        symbol: &Symbol,
        historical_csv: &str,
        timeframe: Timeframe,
    ) -> Result<TrendPrediction, DomainError> {
        self.predict_uc.predict(symbol, historical_csv, timeframe).await
    }

    pub async fn analyze(&self, symbol: &Symbol, timeframe: Timeframe) -> Result<StockAnalysis, DomainError> {
        self.predict_uc.analyze(symbol, timeframe).await
    }

    pub async fn strategy_plan(
        &self,
        tickers: &ComparisonRequest,
        params: &PlanParameters,
    ) -> Result<StrategyPlan, DomainError> {
        self.plan_uc.execute(tickers, params).await
    }

    pub async fn trending(&self) -> Vec<TrendingStock> {
        self.trending_uc.execute().await
    }

    pub async fn news(&self, query: Option<&str>) -> Vec<NewsItem> {
        self.news_uc.execute(query).await
    }

    pub async fn summarize_article(&self, url: &str) -> Result<NewsSummary, DomainError> {
        self.summarize_uc.execute(url).await
    }

    pub async fn compare(&self, request: &ComparisonRequest) -> Vec<ComparisonRow> {
        self.compare_uc.execute(request).await
    }

    // Watchlist
    pub fn watchlist(&self) -> Result<Vec<String>, DomainError> {
        self.watchlist_uc.list()
    }

    pub fn watchlist_contains(&self, symbol: &Symbol) -> Result<bool, DomainError> {
        self.watchlist_uc.contains(symbol)
    }

    pub fn watch_add(&self, symbol: &Symbol) -> Result<bool, DomainError> {
        self.watchlist_uc.add(symbol)
    }

    pub fn watch_remove(&self, symbol: &Symbol) -> Result<bool, DomainError> {
        self.watchlist_uc.remove(symbol)
    }

    pub async fn watchlist_snapshot(&self) -> Result<Vec<WatchlistRow>, DomainError> {
        self.watchlist_uc.snapshot().await
    }

    // Portfolio
    pub fn portfolio(&self) -> Result<Vec<PortfolioItem>, DomainError> {
        self.portfolio_uc.list()
    }

    pub fn portfolio_add(&self, symbol: &Symbol, quantity: f64, purchase_price: f64) -> Result<PortfolioItem, DomainError> {
        self.portfolio_uc.add(symbol, quantity, purchase_price)
    }

    pub fn portfolio_update(&self, symbol: &Symbol, quantity: f64, purchase_price: f64) -> Result<PortfolioItem, DomainError> {
        self.portfolio_uc.update(symbol, quantity, purchase_price)
    }

    pub fn portfolio_remove(&self, symbol: &Symbol) -> Result<bool, DomainError> {
        self.portfolio_uc.remove(symbol)
    }

    pub async fn portfolio_snapshot(&self) -> Result<PortfolioSnapshot, DomainError> {
        self.portfolio_uc.snapshot().await
    }

    // Strategy notes
    pub fn strategies(&self) -> Result<Vec<Strategy>, DomainError> {
        self.strategy_uc.list()
    }

    pub fn strategy_add(&self, title: String, description: String) -> Result<Strategy, DomainError> {
        self.strategy_uc.add(title, description)
    }

    pub fn strategy_update(&self, strategy: Strategy) -> Result<(), DomainError> {
        self.strategy_uc.update(strategy)
    }

    pub fn strategy_remove(&self, id: &str) -> Result<bool, DomainError> {
        self.strategy_uc.remove(id)
    }
}
