//! Identifier rules and standard id generation.
//!
//! A standard id is `{type}--{uuid}` where the uuid is a v5 hash of the
//! canonical JSON of the identifier components. Two inputs with the same
//! identifying fields always get the same id.

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use uuid::Uuid;

use cti_schema_core::{IdentifierDefinition, IdentifierRule, SchemaError, TypeHash};

/// Default v5 namespace for standard ids.
pub const OPENCTI_NAMESPACE: Uuid = Uuid::from_u128(0x00abedb4_aa42_466c_9c01_fed23315a9b7);

/// Identifier definitions, keyed by entity type.
#[derive(Debug)]
pub struct IdentifierRegistry {
    namespace: Uuid,
    by_type: FxHashMap<TypeHash, IdentifierDefinition>,
}

impl Default for IdentifierRegistry {
    fn default() -> Self {
        Self::with_namespace(OPENCTI_NAMESPACE)
    }
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(namespace: Uuid) -> Self {
        Self {
            namespace,
            by_type: FxHashMap::default(),
        }
    }

    pub fn namespace(&self) -> Uuid {
        self.namespace
    }

    pub fn register(&mut self, name: &str, definition: IdentifierDefinition) {
        self.by_type.insert(TypeHash::from_name(name), definition);
    }

    pub fn get(&self, name: &str) -> Option<&IdentifierDefinition> {
        self.by_type.get(&TypeHash::from_name(name))
    }

    /// Collect the identifier components of `data` for type `name`.
    ///
    /// Each key takes the first non-null source field, normalized by the
    /// field's resolver when one is registered. Keys with no value are left out.
    pub fn components(&self, name: &str, data: &Value) -> Result<Map<String, Value>, SchemaError> {
        let definition = self
            .get(name)
            .ok_or_else(|| SchemaError::IdentifierNotFound(name.to_string()))?;

        let mut components = Map::new();
        for (key, rule) in &definition.definition {
            let value = match rule {
                IdentifierRule::Fields(sources) => sources.iter().find_map(|src| {
                    let raw = data.get(src).filter(|v| !v.is_null())?;
                    Some(match definition.resolvers.get(src) {
                        Some(resolver) => resolver.resolve(raw),
                        None => raw.clone(),
                    })
                }),
                IdentifierRule::Generator(generator) => Some(Value::String(generator.generate())),
            };
            if let Some(value) = value {
                components.insert(key.clone(), value);
            }
        }
        Ok(components)
    }

    /// Compute the standard id of `data` for type `name`.
    pub fn generate_standard_id(&self, name: &str, data: &Value) -> Result<String, SchemaError> {
        let components = self.components(name, data)?;
        if components.is_empty() {
            return Err(SchemaError::MissingIdentifierData(name.to_string()));
        }
        let canonical = Value::Object(components).to_string();
        let uuid = Uuid::new_v5(&self.namespace, canonical.as_bytes());
        Ok(format!("{}--{}", name.to_lowercase(), uuid))
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cti_schema_core::{FieldResolver, IdGenerator};
    use serde_json::json;

    fn indicator_rules() -> IdentifierDefinition {
        IdentifierDefinition::new().with_rule("pattern", IdentifierRule::field("pattern"))
    }

    #[test]
    fn unknown_type() {
        let registry = IdentifierRegistry::new();
        let err = registry
            .generate_standard_id("Indicator", &json!({}))
            .unwrap_err();
        assert_eq!(err, SchemaError::IdentifierNotFound("Indicator".to_string()));
    }

    #[test]
    fn standard_id_is_deterministic() {
        let mut registry = IdentifierRegistry::new();
        registry.register("Indicator", indicator_rules());

        let data = json!({ "pattern": "[ipv4-addr:value = '1.2.3.4']", "name": "a" });
        let other = json!({ "pattern": "[ipv4-addr:value = '1.2.3.4']", "name": "b" });

        let id = registry.generate_standard_id("Indicator", &data).unwrap();
        assert!(id.starts_with("indicator--"));
        assert_eq!(id, registry.generate_standard_id("Indicator", &other).unwrap());
    }

    #[test]
    fn different_content_different_id() {
        let mut registry = IdentifierRegistry::new();
        registry.register("Indicator", indicator_rules());

        let a = registry
            .generate_standard_id("Indicator", &json!({ "pattern": "a" }))
            .unwrap();
        let b = registry
            .generate_standard_id("Indicator", &json!({ "pattern": "b" }))
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn namespace_changes_id() {
        let mut default_ns = IdentifierRegistry::new();
        let mut custom_ns = IdentifierRegistry::with_namespace(Uuid::from_u128(1));
        default_ns.register("Indicator", indicator_rules());
        custom_ns.register("Indicator", indicator_rules());

        let data = json!({ "pattern": "a" });
        assert_ne!(
            default_ns.generate_standard_id("Indicator", &data).unwrap(),
            custom_ns.generate_standard_id("Indicator", &data).unwrap()
        );
    }

    #[test]
    fn first_present_source_wins() {
        let mut registry = IdentifierRegistry::new();
        registry.register(
            "Report",
            IdentifierDefinition::new().with_rule(
                "name",
                IdentifierRule::Fields(vec!["name".to_string(), "title".to_string()]),
            ),
        );

        let components = registry
            .components("Report", &json!({ "name": null, "title": "Q3 summary" }))
            .unwrap();
        assert_eq!(components["name"], "Q3 summary");
    }

    #[test]
    fn resolver_normalizes_before_hashing() {
        let mut registry = IdentifierRegistry::new();
        registry.register(
            "City",
            IdentifierDefinition::new()
                .with_rule("name", IdentifierRule::field("name"))
                .with_resolver(
                    "name",
                    FieldResolver::new(|v| {
                        Value::String(v.as_str().unwrap_or_default().to_lowercase())
                    }),
                ),
        );

        assert_eq!(
            registry.generate_standard_id("City", &json!({ "name": "Paris" })),
            registry.generate_standard_id("City", &json!({ "name": "PARIS" }))
        );
    }

    #[test]
    fn generator_rule_needs_no_input() {
        let mut registry = IdentifierRegistry::new();
        registry.register(
            "Settings",
            IdentifierDefinition::new().with_rule(
                "id",
                IdentifierRule::Generator(IdGenerator::new(|| "settings".to_string())),
            ),
        );

        let components = registry.components("Settings", &json!({})).unwrap();
        assert_eq!(components["id"], "settings");
        assert!(registry.generate_standard_id("Settings", &json!({})).is_ok());
    }

    #[test]
    fn missing_identifier_data() {
        let mut registry = IdentifierRegistry::new();
        registry.register("Indicator", indicator_rules());

        let err = registry
            .generate_standard_id("Indicator", &json!({ "name": "no pattern" }))
            .unwrap_err();
        assert_eq!(err, SchemaError::MissingIdentifierData("Indicator".to_string()));
    }
}
