//! SchemaRegistry - the context object every entity type is bound into.
//!
//! # Storage Model
//!
//! The registry owns one sub-registry per concern. Each is reachable through an
//! accessor for reads; writes go through [`SchemaRegistry::bind`].
//!
//! # Thread Safety
//!
//! Registration takes `&mut self` and is expected to run single-threaded during
//! startup. Every stored entry is `Send + Sync`, so a finished registry can be
//! moved into an `Arc` and shared read-only.

use std::fmt;

use serde_json::Value;
use uuid::Uuid;

use cti_schema_core::{SchemaError, StixObject, StoreEntity};

use crate::{
    AttributeRegistry, CategoryRegistry, ConverterRegistry, DepsKeyRegistry, GraphqlRegistry,
    IdentifierRegistry, RelationRegistry, RelationsRefRegistry, RepresentativeRegistry,
    ValidationPhase, ValidatorRegistry,
};

/// Process-wide schema state, owned explicitly.
#[derive(Default)]
pub struct SchemaRegistry {
    pub(crate) categories: CategoryRegistry,
    pub(crate) converters: ConverterRegistry,
    pub(crate) representatives: RepresentativeRegistry,
    pub(crate) validators: ValidatorRegistry,
    pub(crate) graphql: GraphqlRegistry,
    pub(crate) identifiers: IdentifierRegistry,
    pub(crate) attributes: AttributeRegistry,
    pub(crate) deps_keys: DepsKeyRegistry,
    pub(crate) relations: RelationRegistry,
    pub(crate) relations_refs: RelationsRefRegistry,
    /// Bound type names, in bind order.
    pub(crate) types: Vec<String>,
}

impl SchemaRegistry {
    /// Create an empty registry using the default identifier namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry hashing standard ids under `namespace`.
    pub fn with_identifier_namespace(namespace: Uuid) -> Self {
        Self {
            identifiers: IdentifierRegistry::with_namespace(namespace),
            ..Self::default()
        }
    }

    // ==========================================================================
    // Sub-registries
    // ==========================================================================

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn converters(&self) -> &ConverterRegistry {
        &self.converters
    }

    pub fn representatives(&self) -> &RepresentativeRegistry {
        &self.representatives
    }

    pub fn validators(&self) -> &ValidatorRegistry {
        &self.validators
    }

    pub fn graphql(&self) -> &GraphqlRegistry {
        &self.graphql
    }

    pub fn identifiers(&self) -> &IdentifierRegistry {
        &self.identifiers
    }

    pub fn attributes(&self) -> &AttributeRegistry {
        &self.attributes
    }

    pub fn deps_keys(&self) -> &DepsKeyRegistry {
        &self.deps_keys
    }

    pub fn relations(&self) -> &RelationRegistry {
        &self.relations
    }

    pub fn relations_refs(&self) -> &RelationsRefRegistry {
        &self.relations_refs
    }

    // ==========================================================================
    // Lookups
    // ==========================================================================

    /// Bound type names, in bind order. A type bound twice appears once.
    pub fn registered_types(&self) -> &[String] {
        &self.types
    }

    pub fn contains_type(&self, name: &str) -> bool {
        self.types.iter().any(|t| t == name)
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Convert a stored entity of type `name` to its STIX representation.
    pub fn convert(&self, name: &str, entity: &StoreEntity) -> Result<StixObject, SchemaError> {
        let (_, converter) = self
            .converters
            .get(name)
            .ok_or_else(|| SchemaError::ConverterNotFound(name.to_string()))?;
        Ok(converter.convert(entity))
    }

    /// Display string for a STIX object of type `name`.
    pub fn representative(&self, name: &str, stix: &StixObject) -> Result<String, SchemaError> {
        let representative = self
            .representatives
            .get(name)
            .ok_or_else(|| SchemaError::RepresentativeNotFound(name.to_string()))?;
        Ok(representative.represent(stix))
    }

    /// Run the registered validator of `name` for `phase`.
    pub fn validate(
        &self,
        name: &str,
        input: &Value,
        phase: ValidationPhase,
    ) -> Result<(), SchemaError> {
        self.validators.validate(name, input, phase)
    }

    /// Compute the standard id of `data` for type `name`.
    pub fn generate_standard_id(&self, name: &str, data: &Value) -> Result<String, SchemaError> {
        self.identifiers.generate_standard_id(name, data)
    }
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("types", &self.types.len())
            .field("converters", &self.converters.len())
            .field("attributes", &self.attributes.len())
            .field("relation_keys", &self.relations.len())
            .field("graphql", &self.graphql.len())
            .field("deps_keys", &self.deps_keys.keys().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_registry_is_empty() {
        let registry = SchemaRegistry::new();
        assert_eq!(registry.type_count(), 0);
        assert!(registry.converters().is_empty());
        assert!(registry.attributes().is_empty());
        assert!(registry.relations().is_empty());
        assert!(registry.graphql().is_empty());
    }

    #[test]
    fn identifier_namespace_is_configurable() {
        let namespace = Uuid::from_u128(42);
        let registry = SchemaRegistry::with_identifier_namespace(namespace);
        assert_eq!(registry.identifiers().namespace(), namespace);
        assert_eq!(SchemaRegistry::new().identifiers().namespace(), crate::OPENCTI_NAMESPACE);
    }

    #[test]
    fn lookups_on_unknown_type() {
        let registry = SchemaRegistry::new();
        assert_eq!(
            registry.convert("Report", &StoreEntity::new()),
            Err(SchemaError::ConverterNotFound("Report".to_string()))
        );
        assert_eq!(
            registry.representative("Report", &StixObject::new()),
            Err(SchemaError::RepresentativeNotFound("Report".to_string()))
        );
        assert!(registry.validate("Report", &json!({}), ValidationPhase::Creation).is_ok());
    }

    #[test]
    fn debug_shows_counts() {
        let shown = format!("{:?}", SchemaRegistry::new());
        assert!(shown.starts_with("SchemaRegistry"));
        assert!(shown.contains("types: 0"));
    }
}
