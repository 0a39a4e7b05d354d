use std::env;

const DEFAULT_MODELS: &str = "dall-e-2,dall-e-3";

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            base_url: None,
            timeout_secs: None,
        }
    }
}

impl BackendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env::var("IMAGEGEN_BASE_URL").ok();
        let timeout_secs = env::var("IMAGEGEN_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        BackendConfig {
            base_url,
            timeout_secs,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Option<BackendConfig>,
    pub models: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend: None,
            models: split_models(DEFAULT_MODELS),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let models = env::var("IMAGEGEN_MODELS")
            .map(|raw| split_models(&raw))
            .unwrap_or_else(|_| split_models(DEFAULT_MODELS));

        Config {
            backend: Some(BackendConfig::from_env()),
            models,
        }
    }

    pub fn with_backend(mut self, config: BackendConfig) -> Self {
        self.backend = Some(config);
        self
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }
}

fn split_models(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect()
}
