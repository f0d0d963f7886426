//! Declarative entity types.
//!
//! A manifest describes an entity type without code: attributes, relations,
//! refs, dependency keys, and identifier fields. It is turned into an
//! [`EntityTypeDefinition`] with an attribute-driven converter and a
//! field-based representative.
//!
//! ```yaml
//! types:
//!   - id: malware-analyses
//!     name: Malware-Analysis
//!     category: Stix-Domain-Object
//!     attributes:
//!       - { name: product, mandatory: external }
//!       - { name: result_name }
//!     identifier:
//!       product: [product]
//!       result: [result_name]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use cti_schema_core::{
    AttributeDefinition, AttributeFlags, AttributeType, Converter, DepsKey, EntityTypeDefinition,
    GraphqlDefinition, IdentifierDefinition, IdentifierRule, Mandatory, RelationDeclaration,
    RelationRefDefinition, Representative, SchemaError, TypeInfo,
};

use crate::error::{BootstrapError, Result};

/// A file holding one or more manifests.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestFile {
    pub types: Vec<TypeManifest>,
}

impl ManifestFile {
    /// Load a manifest file. `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| BootstrapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if is_json {
            serde_json::from_str(&source).map_err(|source| BootstrapError::Json {
                path: path.to_path_buf(),
                source,
            })
        } else {
            serde_yaml::from_str(&source).map_err(|source| BootstrapError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Convert every manifest, failing on the first invalid one.
    pub fn into_definitions(self) -> std::result::Result<Vec<EntityTypeDefinition>, SchemaError> {
        self.types.into_iter().map(EntityTypeDefinition::try_from).collect()
    }
}

fn default_attribute_type() -> AttributeType {
    AttributeType::String
}

/// Declarative attribute.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeManifest {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type", default = "default_attribute_type")]
    pub attribute_type: AttributeType,
    #[serde(default)]
    pub mandatory: Mandatory,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub upsert: bool,
}

impl From<AttributeManifest> for AttributeDefinition {
    fn from(manifest: AttributeManifest) -> Self {
        let mut flags = AttributeFlags::empty();
        flags.set(AttributeFlags::MULTIPLE, manifest.multiple);
        flags.set(AttributeFlags::UPSERT, manifest.upsert);

        let mut attribute =
            AttributeDefinition::new(manifest.name, manifest.attribute_type, manifest.mandatory)
                .with_flags(flags);
        attribute.label = manifest.label;
        attribute
    }
}

fn default_representative_field() -> String {
    "name".to_string()
}

/// Declarative entity type.
///
/// `category` is kept as a string until conversion so that an unsupported
/// value is reported as [`SchemaError::UnsupportedCategory`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeManifest {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub aliased: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeManifest>,
    #[serde(default)]
    pub relations: Vec<RelationDeclaration>,
    #[serde(default)]
    pub relations_refs: Option<Vec<RelationRefDefinition>>,
    #[serde(default)]
    pub deps_keys: Option<Vec<DepsKey>>,
    /// Identifier key to candidate source fields.
    #[serde(default)]
    pub identifier: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub graphql_schema: Option<String>,
    /// Field the representative reads.
    #[serde(default = "default_representative_field")]
    pub representative_field: String,
}

impl TryFrom<TypeManifest> for EntityTypeDefinition {
    type Error = SchemaError;

    fn try_from(manifest: TypeManifest) -> std::result::Result<Self, Self::Error> {
        let mut type_info = TypeInfo::parse(manifest.id, manifest.name, &manifest.category)?;
        type_info.aliased = manifest.aliased;

        let attributes: Vec<AttributeDefinition> =
            manifest.attributes.into_iter().map(Into::into).collect();
        let exported = attributes.iter().map(|a| a.name.clone()).collect();
        let converter = Converter::from_attributes(&type_info.name, exported);

        let field = manifest.representative_field;
        let representative = Representative::new(move |stix| {
            stix.get(&field)
                .or_else(|| stix.get("id"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        });

        let identifier = manifest.identifier.into_iter().fold(
            IdentifierDefinition::new(),
            |identifier, (key, sources)| identifier.with_rule(key, IdentifierRule::Fields(sources)),
        );

        let mut definition = EntityTypeDefinition::new(type_info, converter, representative)
            .with_attributes(attributes)
            .with_identifier(identifier)
            .with_graphql(GraphqlDefinition::new(manifest.graphql_schema.unwrap_or_default()));
        definition.relations = manifest.relations;
        definition.relations_refs = manifest.relations_refs;
        definition.deps_keys = manifest.deps_keys;
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cti_schema_core::{Category, StixObject};

    const MANIFEST: &str = r#"
types:
  - id: malware-analyses
    name: Malware-Analysis
    category: Stix-Domain-Object
    aliased: true
    attributes:
      - { name: product, mandatory: external }
      - { name: submitted, type: date }
      - { name: analysis_sco_refs, multiple: true, upsert: true }
    relations:
      - name: analysis-of
        targets:
          - { name: analysis-of, type: Malware }
    relations_refs:
      - { input_name: createdBy, database_name: created-by }
    deps_keys:
      - { src: createdBy }
    identifier:
      product: [product]
    representative_field: product
"#;

    fn parse(source: &str) -> ManifestFile {
        serde_yaml::from_str(source).unwrap()
    }

    #[test]
    fn manifest_converts_to_definition() {
        let mut definitions = parse(MANIFEST).into_definitions().unwrap();
        let definition = definitions.remove(0);

        assert_eq!(definition.type_info.name, "Malware-Analysis");
        assert_eq!(definition.type_info.category, Category::StixDomainObject);
        assert!(definition.type_info.aliased);
        assert_eq!(definition.attributes.len(), 3);
        assert_eq!(definition.attributes[1].attribute_type, AttributeType::Date);
        assert!(definition.attributes[2].is_multiple());
        assert!(definition.attributes[2].is_upsert());
        assert!(definition.attributes[0].is_mandatory());
        assert_eq!(definition.relations[0].targets[0].target_type, "Malware");
        assert_eq!(definition.relations_refs.as_ref().map(Vec::len), Some(1));
        assert_eq!(definition.deps_keys.as_ref().map(Vec::len), Some(1));
        assert!(definition.identifier.definition.contains_key("product"));
    }

    #[test]
    fn representative_reads_configured_field() {
        let definition = parse(MANIFEST).into_definitions().unwrap().remove(0);
        let mut stix = StixObject::new();
        stix.insert("product".to_string(), Value::String("sandbox".to_string()));
        assert_eq!(definition.representative.represent(&stix), "sandbox");
    }

    #[test]
    fn unsupported_category_is_rejected() {
        let file = parse(
            r#"
types:
  - { id: artifacts, name: Artifact, category: Stix-Cyber-Observable }
"#,
        );
        let err = file.into_definitions().unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnsupportedCategory("Stix-Cyber-Observable".to_string())
        );
    }

    #[test]
    fn unknown_manifest_field_is_rejected() {
        let result = serde_yaml::from_str::<ManifestFile>(
            r#"
types:
  - { id: x, name: X, category: Container, colour: red }
"#,
        );
        assert!(result.is_err());
    }
}
