//! Schema error type.
//!
//! ```text
//! SchemaError
//! ├── UnsupportedCategory   - configuration error, aborts startup
//! ├── ConverterNotFound     - no converter bound for a type
//! ├── RepresentativeNotFound
//! ├── IdentifierNotFound    - no identifier rules bound for a type
//! ├── MissingIdentifierData - rules matched no field of the input
//! └── ValidationFailed      - a registered validator rejected the input
//! ```
//!
//! Only `UnsupportedCategory` can be raised while populating the registry.
//! The rest are produced by the read side.

use thiserror::Error;

/// Errors raised by schema registration and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The category is not one of the five recognized categories.
    #[error("unsupported category: '{0}'")]
    UnsupportedCategory(String),

    /// No converter is registered for the entity type.
    #[error("no converter registered for entity type '{0}'")]
    ConverterNotFound(String),

    /// No representative function is registered for the entity type.
    #[error("no representative registered for entity type '{0}'")]
    RepresentativeNotFound(String),

    /// No identifier definition is registered for the entity type.
    #[error("no identifier definition registered for entity type '{0}'")]
    IdentifierNotFound(String),

    /// None of the identifier rules found a value in the input.
    #[error("cannot generate standard id for '{0}': no identifier field present in data")]
    MissingIdentifierData(String),

    /// A registered validator rejected the input.
    #[error("validation failed for '{entity_type}': {reason}")]
    ValidationFailed {
        /// The entity type being validated.
        entity_type: String,
        /// Validator-supplied reason.
        reason: String,
    },
}

impl SchemaError {
    /// Check if this error signals a startup configuration mistake.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, SchemaError::UnsupportedCategory(_))
    }
}
