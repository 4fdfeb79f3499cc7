mod common;

use common::{FakeMarket, FakeModel, FakePages};
use std::sync::{Arc, Mutex};
use stockbro::application::collection::JsonCollection;
use stockbro::domain::error::DomainError;
use stockbro::domain::ports::key_value_store::KeyValueStore;
use stockbro::domain::values::symbol::Symbol;
use stockbro::infrastructure::sqlite::kv_store::SqliteKeyValueStore;
use stockbro::infrastructure::sqlite::migrations::run_migrations;
use stockbro::StockBro;

fn open(path: &str) -> StockBro {
    StockBro::with_providers(
        path,
        Arc::new(FakeMarket::default()),
        Arc::new(FakeModel::failing("unused")),
        Arc::new(FakePages::default()),
    )
    .unwrap()
}

fn raw_store(path: &str) -> SqliteKeyValueStore {
    let conn = rusqlite::Connection::open(path).unwrap();
    run_migrations(&conn).unwrap();
    SqliteKeyValueStore::new(conn)
}

#[test]
fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stockbro.db");
    let path = path.to_str().unwrap();

    {
        let sb = open(path);
        sb.watch_add(&Symbol::parse("AAPL").unwrap()).unwrap();
        sb.portfolio_add(&Symbol::parse("MSFT").unwrap(), 3.0, 100.0)
            .unwrap();
        sb.strategy_add("Trend".into(), "Follow the 200-day average".into())
            .unwrap();
    }

    let sb = open(path);
    assert_eq!(sb.watchlist().unwrap(), vec!["AAPL"]);
    assert_eq!(sb.portfolio().unwrap()[0].quantity, 3.0);
    assert_eq!(sb.strategies().unwrap()[0].title, "Trend");
}

#[test]
fn test_stored_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stockbro.db");
    let path = path.to_str().unwrap();

    {
        let sb = open(path);
        sb.portfolio_add(&Symbol::parse("AAPL").unwrap(), 2.0, 10.0)
            .unwrap();
    }

    let stored = raw_store(path).get("stockbro-portfolio").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(value[0]["symbol"], "AAPL");
    assert_eq!(value[0]["purchasePrice"], 10.0);
}

#[test]
fn test_corrupt_json_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stockbro.db");
    let path = path.to_str().unwrap();

    raw_store(path)
        .set("stockbro-watchlist", "{not json")
        .unwrap();

    let sb = open(path);
    assert!(sb.watchlist().unwrap().is_empty());

    // the next write replaces the corrupt blob
    sb.watch_add(&Symbol::parse("TSLA").unwrap()).unwrap();
    assert_eq!(
        raw_store(path).get("stockbro-watchlist").unwrap().as_deref(),
        Some(r#"["TSLA"]"#)
    );
}

/// Reads succeed from a fixed blob; every write fails until `healthy` is set.
struct FlakyStore {
    blob: Mutex<Option<String>>,
    healthy: Mutex<bool>,
}

impl FlakyStore {
    fn new(blob: Option<&str>) -> Self {
        Self {
            blob: Mutex::new(blob.map(String::from)),
            healthy: Mutex::new(false),
        }
    }

    fn write_guard(&self) -> Result<(), DomainError> {
        if *self.healthy.lock().unwrap() {
            Ok(())
        } else {
            Err(DomainError::Database("disk full".into()))
        }
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.blob.lock().unwrap().clone())
    }

    fn set(&self, _key: &str, value: &str) -> Result<(), DomainError> {
        self.write_guard()?;
        *self.blob.lock().unwrap() = Some(value.to_string());
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), DomainError> {
        self.write_guard()?;
        *self.blob.lock().unwrap() = None;
        Ok(())
    }
}

#[test]
fn test_failed_write_leaves_cache_unchanged() {
    let store = Arc::new(FlakyStore::new(None));
    let list: JsonCollection<String> = JsonCollection::load(store.clone(), "stockbro-watchlist").unwrap();

    let err = list.update(|v| v.push("AAPL".to_string())).unwrap_err();
    assert!(matches!(err, DomainError::Database(_)));
    assert!(list.items().unwrap().is_empty());

    *store.healthy.lock().unwrap() = true;
    list.update(|v| v.push("TSLA".to_string())).unwrap();
    assert_eq!(list.items().unwrap(), vec!["TSLA"]);
    assert_eq!(store.blob.lock().unwrap().as_deref(), Some(r#"["TSLA"]"#));
}

#[test]
fn test_failed_removal_keeps_entry() {
    let store = Arc::new(FlakyStore::new(Some(r#"["AAPL"]"#)));
    let list: JsonCollection<String> = JsonCollection::load(store.clone(), "stockbro-watchlist").unwrap();

    assert!(list.update(|v| v.clear()).is_err());
    assert_eq!(list.items().unwrap(), vec!["AAPL"]);
}

#[test]
fn test_emptied_collection_drops_its_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stockbro.db");
    let path = path.to_str().unwrap();

    {
        let sb = open(path);
        let aapl = Symbol::parse("AAPL").unwrap();
        sb.watch_add(&aapl).unwrap();
        sb.watch_remove(&aapl).unwrap();
    }

    assert_eq!(raw_store(path).get("stockbro-watchlist").unwrap(), None);
    assert!(open(path).watchlist().unwrap().is_empty());
}
