//! Static definition of one entity type.
//!
//! A feature module builds exactly one [`EntityTypeDefinition`] at startup and
//! hands it to the registry, which consumes it.
//!
//! ```
//! use cti_schema_core::{
//!     AttributeDefinition, Category, Converter, EntityTypeDefinition, RelationDeclaration,
//!     RelationTarget, Representative, TypeInfo,
//! };
//!
//! let definition = EntityTypeDefinition::new(
//!     TypeInfo::new("report", "Report", Category::Container),
//!     Converter::from_attributes("Report", vec!["name".to_string()]),
//!     Representative::field("name"),
//! )
//! .with_attribute(AttributeDefinition::string("name"))
//! .with_relation(RelationDeclaration::new(
//!     "related-to",
//!     vec![RelationTarget::new("related-to", "Indicator")],
//! ));
//!
//! assert_eq!(definition.type_info.name, "Report");
//! assert_eq!(definition.relations.len(), 1);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeDefinition, Mandatory};
use crate::functions::{Converter, FieldResolver, IdGenerator, Representative, ValidatorFn};
use crate::{Category, SchemaError};

/// Identity and classification of an entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Module identifier.
    pub id: String,
    /// Entity type name (e.g. `Report`).
    pub name: String,
    /// Whether instances may carry alternate names.
    pub aliased: bool,
    pub category: Category,
}

impl TypeInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aliased: false,
            category,
        }
    }

    /// Create type info from an untyped category name.
    ///
    /// Fails with [`SchemaError::UnsupportedCategory`] if `category` is not one
    /// of the five recognized wire names.
    pub fn parse(
        id: impl Into<String>,
        name: impl Into<String>,
        category: &str,
    ) -> Result<Self, SchemaError> {
        Ok(Self::new(id, name, category.parse()?))
    }

    /// Mark the type as alias-capable.
    pub fn aliased(mut self) -> Self {
        self.aliased = true;
        self
    }
}

/// GraphQL schema fragment and resolver map contributed by a module.
///
/// The registry stores these as-is; merging is done by the GraphQL layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphqlDefinition {
    /// SDL type definitions.
    pub schema: String,
    /// Resolver map: GraphQL type name to resolved field names.
    pub resolvers: BTreeMap<String, Vec<String>>,
}

impl GraphqlDefinition {
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            resolvers: BTreeMap::new(),
        }
    }

    /// Declare resolved fields for a GraphQL type.
    pub fn with_resolver<I, S>(mut self, type_name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resolvers
            .entry(type_name.into())
            .or_default()
            .extend(fields.into_iter().map(Into::into));
        self
    }
}

/// How one key of the identifier object is derived.
#[derive(Debug, Clone)]
pub enum IdentifierRule {
    /// First present field among the listed sources.
    Fields(Vec<String>),
    /// Fixed component computed without looking at the input.
    Generator(IdGenerator),
}

impl IdentifierRule {
    pub fn field(src: impl Into<String>) -> Self {
        IdentifierRule::Fields(vec![src.into()])
    }
}

/// Rules used to compute a stable, content-derived identifier.
#[derive(Debug, Clone, Default)]
pub struct IdentifierDefinition {
    /// Identifier key to derivation rule. Iterated in key order.
    pub definition: BTreeMap<String, IdentifierRule>,
    /// Per-field normalization applied before hashing.
    pub resolvers: BTreeMap<String, FieldResolver>,
}

impl IdentifierDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, key: impl Into<String>, rule: IdentifierRule) -> Self {
        self.definition.insert(key.into(), rule);
        self
    }

    pub fn with_resolver(mut self, field: impl Into<String>, resolver: FieldResolver) -> Self {
        self.resolvers.insert(field.into(), resolver);
        self
    }
}

/// One permitted target of a relation declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationTarget {
    /// Relation label of the target, as written in declarations and manifests
    /// (`{ name, type }`). The binder does not read it: table entries take the
    /// declaration's name and are keyed by `target_type`.
    pub name: String,
    /// Target entity type.
    #[serde(rename = "type")]
    pub target_type: String,
}

impl RelationTarget {
    pub fn new(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_type: target_type.into(),
        }
    }
}

/// An outgoing relation type and the targets it may point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDeclaration {
    pub name: String,
    pub targets: Vec<RelationTarget>,
}

impl RelationDeclaration {
    pub fn new(name: impl Into<String>, targets: Vec<RelationTarget>) -> Self {
        Self {
            name: name.into(),
            targets,
        }
    }
}

/// A meta-relationship ref stored as an attribute of the source entity
/// (e.g. `objectLabel` stored as `object-label`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRefDefinition {
    /// Name used in API inputs.
    pub input_name: String,
    /// Name used by the storage layer.
    pub database_name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub mandatory: Mandatory,
    #[serde(default)]
    pub multiple: bool,
    /// Entity types the ref may point at.
    #[serde(default)]
    pub to_types: Vec<String>,
}

impl RelationRefDefinition {
    pub fn new(input_name: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            input_name: input_name.into(),
            database_name: database_name.into(),
            label: None,
            mandatory: Mandatory::No,
            multiple: false,
            to_types: Vec::new(),
        }
    }

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn to_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to_types = types.into_iter().map(Into::into).collect();
        self
    }
}

/// A field whose value must be resolved against other entities during input
/// processing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepsKey {
    pub src: String,
    /// Restrict resolution to these entity types.
    #[serde(default)]
    pub types: Option<Vec<String>>,
}

impl DepsKey {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            types: None,
        }
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }
}

/// Validators run on creation and update inputs.
#[derive(Debug, Clone, Default)]
pub struct Validators {
    pub creation: Option<ValidatorFn>,
    pub update: Option<ValidatorFn>,
}

/// Complete static description of one entity type.
#[derive(Debug, Clone)]
pub struct EntityTypeDefinition {
    pub type_info: TypeInfo,
    pub graphql: GraphqlDefinition,
    pub identifier: IdentifierDefinition,
    pub representative: Representative,
    pub converter: Converter,
    /// Declared attributes, in order.
    pub attributes: Vec<AttributeDefinition>,
    pub relations: Vec<RelationDeclaration>,
    pub relations_refs: Option<Vec<RelationRefDefinition>>,
    pub validators: Option<Validators>,
    pub deps_keys: Option<Vec<DepsKey>>,
}

impl EntityTypeDefinition {
    /// Create a definition with no attributes, relations, or optional parts.
    pub fn new(type_info: TypeInfo, converter: Converter, representative: Representative) -> Self {
        Self {
            type_info,
            graphql: GraphqlDefinition::default(),
            identifier: IdentifierDefinition::default(),
            representative,
            converter,
            attributes: Vec::new(),
            relations: Vec::new(),
            relations_refs: None,
            validators: None,
            deps_keys: None,
        }
    }

    pub fn with_graphql(mut self, graphql: GraphqlDefinition) -> Self {
        self.graphql = graphql;
        self
    }

    pub fn with_identifier(mut self, identifier: IdentifierDefinition) -> Self {
        self.identifier = identifier;
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeDefinition) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_attributes(
        mut self,
        attributes: impl IntoIterator<Item = AttributeDefinition>,
    ) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn with_relation(mut self, relation: RelationDeclaration) -> Self {
        self.relations.push(relation);
        self
    }

    pub fn with_relations_ref(mut self, relation_ref: RelationRefDefinition) -> Self {
        self.relations_refs.get_or_insert_with(Vec::new).push(relation_ref);
        self
    }

    pub fn with_validators(mut self, validators: Validators) -> Self {
        self.validators = Some(validators);
        self
    }

    pub fn with_deps_key(mut self, deps_key: DepsKey) -> Self {
        self.deps_keys.get_or_insert_with(Vec::new).push(deps_key);
        self
    }

    /// Entity type name.
    pub fn name(&self) -> &str {
        &self.type_info.name
    }
}
