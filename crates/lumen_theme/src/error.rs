//! Error types for theming

use std::path::PathBuf;

use lumen_core::ColorParseError;
use thiserror::Error;

/// Theme errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A theme was requested from a scope with no provider above it
    #[error("no theme provider in scope: wrap the tree with ThemeScope::provide")]
    NoProvider,

    /// Strict parse of a variant name failed
    #[error("unknown {axis} '{name}'")]
    UnknownVariant { axis: &'static str, name: String },

    /// A color override could not be parsed
    #[error("invalid color for '{token}'")]
    InvalidColor {
        token: String,
        #[source]
        source: ColorParseError,
    },

    /// A config file could not be read
    #[error("failed to read theme config {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file is not valid TOML for [`crate::ThemeConfig`]
    #[error("failed to parse theme config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize theme config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
