mod common;

use common::{news_item, setup_with, FakeMarket};
use std::sync::Arc;
use stockbro::application::news::NewsUseCase;
use stockbro::domain::values::news_category::NewsCategory;

#[tokio::test]
async fn test_default_query() {
    let market = Arc::new(FakeMarket::default().with_news((0..50).map(news_item).collect()));
    let uc = NewsUseCase::new(market.clone());

    let items = uc.execute(None).await;
    assert_eq!(items.len(), 40);
    uc.execute(Some("   ")).await;
    assert_eq!(
        *market.news_queries.lock().unwrap(),
        vec!["market news", "market news"]
    );
}

#[tokio::test]
async fn test_category_query() {
    let market = Arc::new(FakeMarket::default().with_news(vec![news_item(1)]));
    let uc = NewsUseCase::new(market.clone());

    let query = "market-news".parse::<NewsCategory>().unwrap().query();
    let items = uc.execute(Some(&query)).await;
    assert_eq!(items[0].title, "Headline 1");
    assert_eq!(*market.news_queries.lock().unwrap(), vec!["market news"]);
}

#[tokio::test]
async fn test_provider_failure_is_empty() {
    let sb = setup_with(FakeMarket::default());
    assert!(sb.news(Some("earnings")).await.is_empty());
}
