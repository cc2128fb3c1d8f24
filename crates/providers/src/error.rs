//! Error types for provider operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Invalid configuration for {provider} provider")]
    InvalidConfig { provider: String },

    #[error("{provider} provider is not initialized")]
    NotInitialized { provider: String },

    #[error("Provider \"{0}\" not found")]
    NotFound(String),

    #[error("Invalid send options: {0}")]
    InvalidOptions(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProviderError>;
