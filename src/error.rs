//! Error types for phpgen.
//!
//! Inside the code model only alias insertion and placeholder
//! substitution can fail; the other variants belong to the edges of the
//! crate (loading configuration and model files).

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// An alias was requested that is already bound to a different name.
    #[error("alias '{alias}' used already for '{existing}', cannot use for '{requested}'")]
    NamingConflict {
        /// The contested alias.
        alias: String,
        /// The fully-qualified name the alias is already bound to.
        existing: String,
        /// The fully-qualified name the caller tried to bind.
        requested: String,
    },

    /// A code snippet has more `?` placeholders than arguments.
    #[error("not enough arguments for the placeholders in `{code}`")]
    MissingArgument { code: String },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read model {path}: {source}")]
    ModelRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model {path}: {source}")]
    ModelParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this is a [`Error::NamingConflict`].
    pub fn is_naming_conflict(&self) -> bool {
        matches!(self, Self::NamingConflict { .. })
    }
}
