use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Simulated typing delay window before a reply, in milliseconds.
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: 800,
            delay_max_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Postgres session store when set, in-memory otherwise.
    pub database_url: Option<String>,
    /// JSON catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
    pub chat: ChatConfig,
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = ChatConfig::default();
        let delay_min_ms = env_u64("CHAT_DELAY_MIN_MS", defaults.delay_min_ms);
        let delay_max_ms = env_u64("CHAT_DELAY_MAX_MS", defaults.delay_max_ms);
        if delay_max_ms < delay_min_ms {
            anyhow::bail!(
                "CHAT_DELAY_MAX_MS ({delay_max_ms}) is below CHAT_DELAY_MIN_MS ({delay_min_ms})"
            );
        }

        Ok(Self {
            database_url: non_empty_env("DATABASE_URL"),
            catalog_path: non_empty_env("CATALOG_PATH").map(PathBuf::from),
            chat: ChatConfig {
                delay_min_ms,
                delay_max_ms,
            },
        })
    }
}
