use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_SYMBOL_LEN: usize = 5;

/// A ticker symbol as typed by the user: trimmed, uppercased, 1 to 5 chars.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let s = raw.trim();
        if s.is_empty() {
            return Err("Stock symbol is required.".to_string());
        }
        if s.chars().count() > MAX_SYMBOL_LEN {
            return Err(format!(
                "Stock symbol must be {MAX_SYMBOL_LEN} characters or less."
            ));
        }
        Ok(Symbol(s.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::parse(s)
    }
}
