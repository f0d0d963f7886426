//! Function-typed registry entries.
//!
//! Converters, representatives, validators, and identifier resolvers are
//! supplied by feature modules as closures. Each wrapper stores the callable
//! behind an `Arc` so definitions stay cheap to clone and a populated registry
//! is `Send + Sync`.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// An entity as held by the storage layer.
pub type StoreEntity = Map<String, Value>;

/// An entity in its external STIX wire representation.
pub type StixObject = Map<String, Value>;

/// Maps a stored entity to its STIX representation.
#[derive(Clone)]
pub struct Converter {
    inner: Arc<dyn Fn(&StoreEntity) -> StixObject + Send + Sync>,
}

impl Converter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&StoreEntity) -> StixObject + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Converter that copies the listed attributes and maps `standard_id` to
    /// `id` and `entity_type` to the lowercased `type`.
    pub fn from_attributes(entity_type: &str, attributes: Vec<String>) -> Self {
        let stix_type = entity_type.to_lowercase();
        Self::new(move |entity| {
            let mut stix = StixObject::new();
            if let Some(id) = entity.get(crate::attributes::STANDARD_ID) {
                stix.insert("id".to_string(), id.clone());
            }
            stix.insert("type".to_string(), Value::String(stix_type.clone()));
            for name in &attributes {
                if name == crate::attributes::STANDARD_ID {
                    continue;
                }
                if let Some(value) = entity.get(name) {
                    stix.insert(name.clone(), value.clone());
                }
            }
            stix
        })
    }

    pub fn convert(&self, entity: &StoreEntity) -> StixObject {
        (self.inner)(entity)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter").finish_non_exhaustive()
    }
}

/// Derives a human-readable display string for an instance.
#[derive(Clone)]
pub struct Representative {
    inner: Arc<dyn Fn(&StixObject) -> String + Send + Sync>,
}

impl Representative {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&StixObject) -> String + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Representative reading a single string field, falling back to `id`.
    pub fn field(name: &'static str) -> Self {
        Self::new(move |stix| {
            stix.get(name)
                .or_else(|| stix.get("id"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        })
    }

    pub fn represent(&self, stix: &StixObject) -> String {
        (self.inner)(stix)
    }
}

impl fmt::Debug for Representative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Representative").finish_non_exhaustive()
    }
}

/// Validates an input document; `Err` carries the rejection reason.
#[derive(Clone)]
pub struct ValidatorFn {
    inner: Arc<dyn Fn(&Value) -> Result<(), String> + Send + Sync>,
}

impl ValidatorFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    pub fn validate(&self, input: &Value) -> Result<(), String> {
        (self.inner)(input)
    }
}

impl fmt::Debug for ValidatorFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorFn").finish_non_exhaustive()
    }
}

/// Normalizes one identifier field before it is hashed.
#[derive(Clone)]
pub struct FieldResolver {
    inner: Arc<dyn Fn(&Value) -> Value + Send + Sync>,
}

impl FieldResolver {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    pub fn resolve(&self, value: &Value) -> Value {
        (self.inner)(value)
    }
}

impl fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldResolver").finish_non_exhaustive()
    }
}

/// Produces an identifier component without looking at the input.
#[derive(Clone)]
pub struct IdGenerator {
    inner: Arc<dyn Fn() -> String + Send + Sync>,
}

impl IdGenerator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    pub fn generate(&self) -> String {
        (self.inner)()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}
