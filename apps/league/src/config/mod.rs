//! Runtime configuration.

pub mod rules;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable '{name}' must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}
