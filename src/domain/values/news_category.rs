use std::fmt;
use std::str::FromStr;

/// Curated news tabs. Each maps onto a plain search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsCategory {
    MarketNews,
    Technology,
    Finance,
    Economy,
    Crypto,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 5] = [
        NewsCategory::MarketNews,
        NewsCategory::Technology,
        NewsCategory::Finance,
        NewsCategory::Economy,
        NewsCategory::Crypto,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            NewsCategory::MarketNews => "market-news",
            NewsCategory::Technology => "technology",
            NewsCategory::Finance => "finance",
            NewsCategory::Economy => "economy",
            NewsCategory::Crypto => "crypto",
        }
    }

    pub fn query(&self) -> String {
        self.slug().replacen('-', " ", 1)
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for NewsCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NewsCategory::ALL
            .into_iter()
            .find(|c| c.slug() == s.trim().to_lowercase())
            .ok_or_else(|| {
                let known: Vec<&str> = NewsCategory::ALL.iter().map(|c| c.slug()).collect();
                format!("Unknown news category: {s} (use one of {})", known.join(", "))
            })
    }
}
