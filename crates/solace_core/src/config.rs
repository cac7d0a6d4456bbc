use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Application configuration, loaded from TOML with env-var overrides.
///
/// The API key is deliberately not part of this struct: `GEMINI_API_KEY` is
/// read from the environment at startup and its absence is fatal, so it
/// never rides through defaults or a config file checked into a repo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SolaceConfig {
    pub model: ModelConfig,
}

impl SolaceConfig {
    /// Load config from a TOML file, falling back to defaults for missing
    /// fields. After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: SolaceConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, return
    /// defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("GEMINI_MODEL") {
            self.model.name = v;
        }
        if let Ok(v) = std::env::var("GEMINI_BASE_URL") {
            self.model.base_url = Some(v);
        }
        if let Ok(v) = std::env::var("SOLACE_TEMPERATURE") {
            if let Ok(n) = v.parse() {
                self.model.temperature = n;
            }
        }
        if let Ok(v) = std::env::var("SOLACE_TIMEOUT_SECS") {
            if let Ok(n) = v.parse() {
                self.model.timeout_secs = n;
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Gemini model name.
    pub name: String,
    /// Override for the API base URL (tests, proxies).
    pub base_url: Option<String>,
    /// Sampling temperature for chat; structured calls use their own.
    pub temperature: f32,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".to_string(),
            base_url: None,
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}
