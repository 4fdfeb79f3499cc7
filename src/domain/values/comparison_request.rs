use super::symbol::{Symbol, MAX_SYMBOL_LEN};

pub const MAX_COMPARISON_SYMBOLS: usize = 4;

/// A validated, comma-separated list of symbols to compare side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    symbols: Vec<Symbol>,
}

impl ComparisonRequest {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        if parts
            .iter()
            .any(|p| p.is_empty() || p.chars().count() > MAX_SYMBOL_LEN)
        {
            return Err(format!(
                "Each symbol must be between 1 and {MAX_SYMBOL_LEN} characters."
            ));
        }
        if parts.len() > MAX_COMPARISON_SYMBOLS {
            return Err(format!(
                "You can compare up to {MAX_COMPARISON_SYMBOLS} symbols at a time."
            ));
        }
        let symbols = parts
            .into_iter()
            .map(Symbol::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { symbols })
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}
