//! Configuration and process identity.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ChillogConfig (which variables to read)
//!
//! process environment + OS hostname
//!     → identity.rs (resolve once)
//!     → Identity (immutable, shared via Arc with every Logger)
//! ```
//!
//! # Design Decisions
//! - Identity is resolved once at startup and never changes
//! - Missing service name is the only fatal condition
//! - Hostname resolution never fails; it degrades to an empty string
//! - Resolution takes injected lookups so it can be tested without touching the environment

pub mod identity;
pub mod loader;
pub mod schema;
pub mod validation;

use thiserror::Error;

pub use identity::Identity;
pub use loader::load_config;
pub use schema::ChillogConfig;
pub use validation::{validate_config, ValidationError};

/// Error type for configuration loading and identity resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("{var} is not set. Please set it in your environment variable.")]
    MissingService { var: String },

    #[error("{var} is not valid UTF-8")]
    NotUnicode { var: String },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
