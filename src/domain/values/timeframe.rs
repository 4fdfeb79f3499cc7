use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse chart timeframe. Each one fixes both how far back history goes
/// and the bar interval requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Timeframe {
    /// daily: 3 months back, weekly: 1 year, monthly: 5 years.
    pub fn start_date(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let months = match self {
            Timeframe::Daily => 3,
            Timeframe::Weekly => 12,
            Timeframe::Monthly => 60,
        };
        now.checked_sub_months(Months::new(months)).unwrap_or(now)
    }

    pub fn interval(&self) -> &'static str {
        match self {
            Timeframe::Daily => "1d",
            Timeframe::Weekly => "1wk",
            Timeframe::Monthly => "1mo",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeframe::Daily => write!(f, "daily"),
            Timeframe::Weekly => write!(f, "weekly"),
            Timeframe::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for Timeframe {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Timeframe::Daily),
            "weekly" => Ok(Timeframe::Weekly),
            "monthly" => Ok(Timeframe::Monthly),
            _ => Err(format!("Unknown timeframe: {s} (use daily, weekly or monthly)")),
        }
    }
}
