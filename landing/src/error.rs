//! Error type for the hero crate.
//!
//! Nothing here ever reaches the visitor: UI paths log and degrade to no-ops.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum HeroError {
    /// Config JSON did not parse
    #[error("invalid hero config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A duration that must be strictly positive was not
    #[error("{field} must be > 0 (got {value})")]
    NonPositiveDuration { field: String, value: f64 },

    /// A stagger or offset that must be non-negative was negative
    #[error("{field} must be >= 0 (got {value})")]
    NegativeTime { field: String, value: f64 },

    /// Ease name not understood
    #[error("unknown ease `{0}`")]
    UnknownEase(String),

    /// Log level string not understood
    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),

    /// Browser API failure
    #[error("dom: {0}")]
    Dom(String),
}

impl From<JsValue> for HeroError {
    fn from(value: JsValue) -> Self {
        HeroError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T> = std::result::Result<T, HeroError>;
