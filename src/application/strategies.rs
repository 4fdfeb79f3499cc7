use crate::application::collection::{JsonCollection, STRATEGIES_KEY};
use crate::domain::entities::strategy::Strategy;
use crate::domain::error::DomainError;
use crate::domain::ports::key_value_store::KeyValueStore;
use crate::domain::values::forms::validate_strategy_form;
use std::sync::Arc;

pub struct StrategyUseCase {
    items: JsonCollection<Strategy>,
}

impl StrategyUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Result<Self, DomainError> {
        Ok(Self {
            items: JsonCollection::load(store, STRATEGIES_KEY)?,
        })
    }

    pub fn list(&self) -> Result<Vec<Strategy>, DomainError> {
        self.items.items()
    }

    pub fn add(&self, title: String, description: String) -> Result<Strategy, DomainError> {
        validate_strategy_form(&title, &description).map_err(DomainError::InvalidInput)?;
        let mut strategy = Strategy::new(title, description);
        self.items.update(|items| {
            // two notes created within the same millisecond
            let base = strategy.id.clone();
            let mut n = 1;
            while items.iter().any(|s| s.id == strategy.id) {
                strategy.id = format!("{base}-{n}");
                n += 1;
            }
            items.push(strategy.clone());
        })?;
        tracing::info!(id = %strategy.id, "strategy added");
        Ok(strategy)
    }

    pub fn update(&self, strategy: Strategy) -> Result<(), DomainError> {
        validate_strategy_form(&strategy.title, &strategy.description)
            .map_err(DomainError::InvalidInput)?;
        let id = strategy.id.clone();
        let found = self.items.update(|items| {
            match items.iter_mut().find(|s| s.id == strategy.id) {
                Some(existing) => {
                    *existing = strategy;
                    true
                }
                None => false,
            }
        })?;
        if !found {
            return Err(DomainError::NotFound(format!("Strategy not found: {id}")));
        }
        Ok(())
    }

    /// Returns false when no strategy had that id.
    pub fn remove(&self, id: &str) -> Result<bool, DomainError> {
        self.items.update(|items| {
            let before = items.len();
            items.retain(|s| s.id != id);
            items.len() != before
        })
    }
}
