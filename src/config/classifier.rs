// src/config/classifier.rs
use super::consts::*;

/// Settings for the external text classifier. Passed into the client at
/// construction; nothing reads the environment after that.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifierConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_CLASSIFIER_URL),
            api_key: None,
            model: s!(DEFAULT_CLASSIFIER_MODEL),
            temperature: DEFAULT_CLASSIFIER_TEMPERATURE,
            timeout_secs: DEFAULT_CLASSIFIER_TIMEOUT_SECS,
        }
    }
}

impl ClassifierConfig {
    /// Defaults overridden by `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `BETSLIP_MODEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut cfg = Self::default();
        cfg.api_key = non_empty(ENV_API_KEY);
        if let Some(url) = non_empty(ENV_BASE_URL) {
            cfg.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(model) = non_empty(ENV_MODEL) {
            cfg.model = model;
        }
        cfg
    }
}
