use crate::domain::error::DomainError;
use crate::domain::ports::key_value_store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex};

pub const WATCHLIST_KEY: &str = "stockbro-watchlist";
pub const PORTFOLIO_KEY: &str = "stockbro-portfolio";
pub const STRATEGIES_KEY: &str = "stockbro-strategies";

/// A JSON array stored under one key, cached in memory and written back
/// whole after every mutation.
pub struct JsonCollection<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    items: Mutex<Vec<T>>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Missing or unreadable JSON starts the collection empty.
    pub fn load(store: Arc<dyn KeyValueStore>, key: &'static str) -> Result<Self, DomainError> {
        let items = match store.get(key)? {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(key, error = %e, "stored collection is corrupt, starting empty");
                Vec::new()
            }),
        };
        Ok(Self {
            store,
            key,
            items: Mutex::new(items),
        })
    }

    pub fn items(&self) -> Result<Vec<T>, DomainError> {
        let items = self
            .items
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(items.clone())
    }

    /// Applies `f` to a copy of the cached list and persists it. The cache
    /// only takes the new list once the store accepted it. An emptied list
    /// drops its key.
    pub fn update<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> Result<R, DomainError> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut next = items.clone();
        let out = f(&mut next);
        if next.is_empty() {
            self.store.remove(self.key)?;
        } else {
            let json = serde_json::to_string(&next)
                .map_err(|e| DomainError::Parse(format!("Failed to serialize {}: {e}", self.key)))?;
            self.store.set(self.key, &json)?;
        }
        *items = next;
        Ok(out)
    }
}
