//! Lightweight configuration loader.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars
//! (`APP_SEARCH__HIGHLIGHT=true` sets `search.highlight`). Every key has a
//! default, so an empty environment yields a usable [`Settings`].

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_HIGHLIGHT_OPEN_TAG: &str = r#"<span style="background:yellow">"#;
pub const DEFAULT_HIGHLIGHT_CLOSE_TAG: &str = "</span>";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisSettings {
    pub url: String,
}

impl Default for RedisSettings {
    fn default() -> Self { Self { url: DEFAULT_REDIS_URL.to_string() } }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub with_scores: bool,
    pub highlight: bool,
    pub highlight_open_tag: String,
    pub highlight_close_tag: String,
    /// `0` disables the timeout.
    pub timeout_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            with_scores: true,
            highlight: false,
            highlight_open_tag: DEFAULT_HIGHLIGHT_OPEN_TAG.to_string(),
            highlight_close_tag: DEFAULT_HIGHLIGHT_CLOSE_TAG.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub redis: RedisSettings,
    pub search: SearchSettings,
}

pub struct Config {
    figment: Figment,
}

impl Config {
    /// Loads from the current working directory.
    pub fn load() -> anyhow::Result<Self> { Self::load_from(Path::new(".")) }

    pub fn load_from(dir: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Settings::default())).merge(Toml::file(dir.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    pub fn settings(&self) -> anyhow::Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read settings: {}", e))
    }

    fn validate(&self) -> anyhow::Result<()> {
        let settings = self.settings()?;
        if settings.redis.url.trim().is_empty() {
            anyhow::bail!(crate::error::Error::InvalidConfig("redis.url must not be empty".into()));
        }
        if settings.search.highlight && settings.search.highlight_open_tag.is_empty() {
            anyhow::bail!(crate::error::Error::InvalidConfig("search.highlight_open_tag must not be empty when highlighting".into()));
        }
        Ok(())
    }
}
