//! Startup errors.

use std::path::PathBuf;

use thiserror::Error;

use cti_schema_core::SchemaError;

pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Errors that abort building the schema registry.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A definition or manifest was rejected by the schema layer.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The configuration names a module that is not built in.
    #[error("unknown module: '{0}'")]
    UnknownModule(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl BootstrapError {
    /// The schema error underneath, if any.
    pub fn as_schema_error(&self) -> Option<&SchemaError> {
        match self {
            BootstrapError::Schema(err) => Some(err),
            _ => None,
        }
    }
}
