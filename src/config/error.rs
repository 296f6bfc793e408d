// src/config/error.rs
//
// Errors raised while loading or validating config.toml

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("style.palette must contain at least one color")]
    EmptyPalette,

    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
