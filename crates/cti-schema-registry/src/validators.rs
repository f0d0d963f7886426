//! Creation and update validators.

use rustc_hash::FxHashMap;
use serde_json::Value;

use cti_schema_core::{SchemaError, TypeHash, Validators};

/// Which validator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationPhase {
    Creation,
    Update,
}

/// Validators keyed by entity type.
///
/// A type without validators, or without a validator for the requested phase,
/// gets default validation: every input is accepted.
#[derive(Debug, Default)]
pub struct ValidatorRegistry {
    by_type: FxHashMap<TypeHash, Validators>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, validators: Validators) {
        self.by_type.insert(TypeHash::from_name(name), validators);
    }

    /// Drop the validators of `name`, restoring default validation.
    pub fn remove(&mut self, name: &str) -> Option<Validators> {
        self.by_type.remove(&TypeHash::from_name(name))
    }

    pub fn get(&self, name: &str) -> Option<&Validators> {
        self.by_type.get(&TypeHash::from_name(name))
    }

    pub fn validate(
        &self,
        name: &str,
        input: &Value,
        phase: ValidationPhase,
    ) -> Result<(), SchemaError> {
        let validator = self.get(name).and_then(|v| match phase {
            ValidationPhase::Creation => v.creation.as_ref(),
            ValidationPhase::Update => v.update.as_ref(),
        });
        match validator {
            Some(validator) => validator
                .validate(input)
                .map_err(|reason| SchemaError::ValidationFailed {
                    entity_type: name.to_string(),
                    reason,
                }),
            None => Ok(()),
        }
    }
}
