// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("API error {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("Malformed response from solver: {0}")]
    MalformedResponse(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SolveError>;
