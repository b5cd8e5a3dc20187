// src/config/consts.rs

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const PROCESSED_SUFFIX: &str = "_processed";
pub const LIST_SEP: &str = " | ";

// Classifier
pub const DEFAULT_CLASSIFIER_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CLASSIFIER_MODEL: &str = "gpt-3.5-turbo-0125";
pub const DEFAULT_CLASSIFIER_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_MODEL: &str = "BETSLIP_MODEL";
