//! Error types shared by the hello_bus programs

use thiserror::Error;

pub type HelloResult<T> = std::result::Result<T, HelloError>;

#[derive(Debug, Error)]
pub enum HelloError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Publish failed on '{key_expr}': {message}")]
    Publish { key_expr: String, message: String },

    #[error("Subscribe failed on '{key_expr}': {message}")]
    Subscribe { key_expr: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),
}

impl HelloError {
    pub fn config(msg: impl Into<String>) -> Self {
        HelloError::Config(msg.into())
    }

    pub fn session(msg: impl Into<String>) -> Self {
        HelloError::Session(msg.into())
    }

    pub fn publish(key_expr: &str, msg: impl std::fmt::Display) -> Self {
        HelloError::Publish {
            key_expr: key_expr.to_string(),
            message: msg.to_string(),
        }
    }

    pub fn subscribe(key_expr: &str, msg: impl std::fmt::Display) -> Self {
        HelloError::Subscribe {
            key_expr: key_expr.to_string(),
            message: msg.to_string(),
        }
    }
}
