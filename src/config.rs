use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DB_PATH: &str = "./stockbro.db";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiProvider {
    #[default]
    Gemini,
    OpenAi,
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiProvider::Gemini => write!(f, "gemini"),
            AiProvider::OpenAi => write!(f, "openai"),
        }
    }
}

impl FromStr for AiProvider {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(AiProvider::Gemini),
            "openai" => Ok(AiProvider::OpenAi),
            other => Err(format!("Unknown AI provider: {other} (use gemini or openai)")),
        }
    }
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub db_path: String,
    pub ai_provider: AiProvider,
    pub ai_api_key: String,
    /// Provider default when unset.
    pub ai_model: Option<String>,
    pub http_timeout: Duration,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            ai_provider: AiProvider::default(),
            ai_api_key: String::new(),
            ai_model: None,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let defaults = Self::default();
        let ai_provider = match var("STOCKBRO_AI_PROVIDER") {
            Some(p) => p.parse()?,
            None => defaults.ai_provider,
        };
        let http_timeout = match var("STOCKBRO_HTTP_TIMEOUT_SECS") {
            Some(s) => Duration::from_secs(
                s.trim()
                    .parse()
                    .map_err(|_| format!("Invalid STOCKBRO_HTTP_TIMEOUT_SECS: {s}"))?,
            ),
            None => defaults.http_timeout,
        };
        let settings = Self {
            db_path: var("STOCKBRO_DB").unwrap_or(defaults.db_path),
            ai_provider,
            ai_api_key: var("STOCKBRO_AI_API_KEY").unwrap_or_default(),
            ai_model: var("STOCKBRO_AI_MODEL").filter(|m| !m.trim().is_empty()),
            http_timeout,
            log_level: var("RUST_LOG").unwrap_or(defaults.log_level),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.db_path.trim().is_empty() {
            return Err("STOCKBRO_DB must not be empty".to_string());
        }
        if self.http_timeout.is_zero() {
            return Err("STOCKBRO_HTTP_TIMEOUT_SECS must be greater than 0".to_string());
        }
        Ok(())
    }
}
