use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A free-text trading strategy note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl Strategy {
    pub fn new(title: String, description: String) -> Self {
        Self::created_at(Utc::now(), title, description)
    }

    pub fn created_at(at: DateTime<Utc>, title: String, description: String) -> Self {
        Self {
            id: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            title,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_is_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let s = Strategy::created_at(at, "Breakout".into(), "Buy new highs".into());
        assert_eq!(s.id, "2024-01-02T03:04:05.000Z");
    }
}
