//! Error types for DEWII.
//!
//! The progression engine itself never fails; these cover the outer
//! surfaces (config loading, custom title tables, CLI input).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DewiiError {
    #[error("Invalid title table: {0}")]
    InvalidTitleTable(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl DewiiError {
    /// Stable numeric code, used as part of CLI diagnostics.
    pub fn code(&self) -> i32 {
        match self {
            DewiiError::InvalidTitleTable(_) => 10,
            DewiiError::Config(_) => 11,
            DewiiError::InvalidDate(_) => 12,
            DewiiError::Io(_) => 20,
            DewiiError::Json(_) => 21,
            DewiiError::Toml(_) => 22,
        }
    }
}

pub type Result<T> = std::result::Result<T, DewiiError>;
