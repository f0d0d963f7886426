//! Attribute schemas and dependency keys.

use rustc_hash::FxHashMap;

use cti_schema_core::attributes::{ALIASES, X_OPENCTI_ALIASES};
use cti_schema_core::{AttributeDefinition, Category, DepsKey, TypeHash};

/// Types whose alias list lives under `x_opencti_aliases` because STIX gives
/// them no `aliases` property.
const OPENCTI_ALIASED_TYPES: &[&str] = &[
    "Course-Of-Action",
    "Vulnerability",
    "Grouping",
    "Individual",
    "Organization",
    "Sector",
    "System",
    "Event",
    "Data-Component",
    "Data-Source",
];

/// Name of the alias-list attribute for an aliased type.
pub fn resolve_aliases_field(name: &str, category: Category) -> &'static str {
    if category == Category::Location || OPENCTI_ALIASED_TYPES.contains(&name) {
        X_OPENCTI_ALIASES
    } else {
        ALIASES
    }
}

/// Assembled attribute lists, keyed by entity type.
///
/// Re-registering a type replaces its list.
#[derive(Debug, Default)]
pub struct AttributeRegistry {
    by_type: FxHashMap<TypeHash, Vec<AttributeDefinition>>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, attributes: Vec<AttributeDefinition>) {
        self.by_type.insert(TypeHash::from_name(name), attributes);
    }

    /// Attributes of a type, in registration order.
    pub fn get(&self, name: &str) -> Option<&[AttributeDefinition]> {
        self.by_type
            .get(&TypeHash::from_name(name))
            .map(Vec::as_slice)
    }

    pub fn get_attribute(&self, name: &str, attribute: &str) -> Option<&AttributeDefinition> {
        self.get(name)?.iter().find(|a| a.name == attribute)
    }

    pub fn names(&self, name: &str) -> Vec<&str> {
        self.get(name)
            .map(|attrs| attrs.iter().map(|a| a.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Mandatory (caller-supplied) attributes of a type.
    pub fn mandatory(&self, name: &str) -> impl Iterator<Item = &AttributeDefinition> {
        self.get(name)
            .into_iter()
            .flatten()
            .filter(|a| a.is_mandatory())
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

/// Global list of dependency keys. Append-only.
#[derive(Debug, Default)]
pub struct DepsKeyRegistry {
    keys: Vec<DepsKey>,
}

impl DepsKeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, keys: impl IntoIterator<Item = DepsKey>) {
        self.keys.extend(keys);
    }

    pub fn keys(&self) -> &[DepsKey] {
        &self.keys
    }

    /// Dependency keys reading from `src`.
    pub fn for_source<'a>(&'a self, src: &'a str) -> impl Iterator<Item = &'a DepsKey> {
        self.keys.iter().filter(move |k| k.src == src)
    }
}
