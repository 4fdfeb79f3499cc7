mod common;

use common::{setup, setup_with, FakeMarket, FakeModel, FakePages};
use std::sync::Arc;
use stockbro::domain::ports::key_value_store::KeyValueStore;
use stockbro::domain::values::symbol::Symbol;
use stockbro::infrastructure::sqlite::kv_store::SqliteKeyValueStore;
use stockbro::infrastructure::sqlite::migrations::run_migrations;
use stockbro::StockBro;

fn sym(s: &str) -> Symbol {
    Symbol::parse(s).unwrap()
}

#[test]
fn test_add_and_list() {
    let sb = setup();
    assert!(sb.watch_add(&sym("aapl")).unwrap());
    assert!(sb.watch_add(&sym("MSFT")).unwrap());

    assert_eq!(sb.watchlist().unwrap(), vec!["AAPL", "MSFT"]);
    assert!(sb.watchlist_contains(&sym("AAPL")).unwrap());
    assert!(!sb.watchlist_contains(&sym("TSLA")).unwrap());
}

#[test]
fn test_add_is_idempotent() {
    let sb = setup();
    assert!(sb.watch_add(&sym("AAPL")).unwrap());
    assert!(!sb.watch_add(&sym(" aapl ")).unwrap());
    assert_eq!(sb.watchlist().unwrap().len(), 1);
}

#[test]
fn test_remove() {
    let sb = setup();
    sb.watch_add(&sym("AAPL")).unwrap();
    sb.watch_add(&sym("MSFT")).unwrap();

    assert!(sb.watch_remove(&sym("AAPL")).unwrap());
    assert!(!sb.watch_remove(&sym("AAPL")).unwrap());
    assert_eq!(sb.watchlist().unwrap(), vec!["MSFT"]);
}

#[tokio::test]
async fn test_snapshot_skips_failed_symbols() {
    let market = FakeMarket::default()
        .with_symbol("AAPL", &[100.0, 110.0])
        .with_symbol("MSFT", &[50.0, 40.0]);
    let sb = setup_with(market);
    for s in ["AAPL", "ZZZZ", "MSFT"] {
        sb.watch_add(&sym(s)).unwrap();
    }

    let rows = sb.watchlist_snapshot().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].symbol, "AAPL");
    assert_eq!(rows[0].name, "AAPL Inc.");
    assert_eq!(rows[0].price, 110.0);
    assert_eq!(rows[0].change, 10.0);
    assert!((rows[0].change_percent - 10.0).abs() < 1e-9);
    assert_eq!(rows[1].symbol, "MSFT");
    assert_eq!(rows[1].change, -10.0);
}

#[tokio::test]
async fn test_snapshot_skips_invalid_stored_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stockbro.db");
    let path = path.to_str().unwrap();

    let conn = rusqlite::Connection::open(path).unwrap();
    run_migrations(&conn).unwrap();
    SqliteKeyValueStore::new(conn)
        .set("stockbro-watchlist", r#"["AAPL","WAYTOOLONG"]"#)
        .unwrap();

    let sb = StockBro::with_providers(
        path,
        Arc::new(FakeMarket::default().with_symbol("AAPL", &[1.0, 2.0])),
        Arc::new(FakeModel::failing("unused")),
        Arc::new(FakePages::default()),
    )
    .unwrap();

    let rows = sb.watchlist_snapshot().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].symbol, "AAPL");
}
