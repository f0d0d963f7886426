//! Relation table, core-relationship catalog, and relations refs.

use std::fmt;

use rustc_hash::FxHashMap;

use cti_schema_core::{RelationRefDefinition, TypeHash};

/// Key of the relation table: a `(source, target)` entity type pair.
///
/// Displays as `{source}_{target}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationKey {
    pub source: String,
    pub target: String,
}

impl RelationKey {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for RelationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.source, self.target)
    }
}

/// One permitted relation between a source and a target type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationEntry {
    /// Relation name.
    pub name: String,
    /// Target entity type.
    pub target_type: String,
}

impl RelationEntry {
    pub fn new(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_type: target_type.into(),
        }
    }
}

/// Relation table plus the catalog of core relationship names.
///
/// Both are append-only. Several modules may contribute entries under the same
/// key, and the catalog keeps duplicates.
#[derive(Debug, Default)]
pub struct RelationRegistry {
    table: FxHashMap<RelationKey, Vec<RelationEntry>>,
    core_relationships: Vec<String>,
}

impl RelationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a relationship name in the catalog.
    pub fn add_core_relationship(&mut self, name: impl Into<String>) {
        self.core_relationships.push(name.into());
    }

    /// Append an entry under `key`, keeping whatever is already there.
    pub fn add(&mut self, key: RelationKey, entry: RelationEntry) {
        self.table.entry(key).or_default().push(entry);
    }

    /// Entries permitted from `source` to `target`, in registration order.
    pub fn between(&self, source: &str, target: &str) -> &[RelationEntry] {
        self.table
            .get(&RelationKey::new(source, target))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lookup by the rendered `{source}_{target}` key.
    ///
    /// Linear in the number of keys, and renders each one. Prefer
    /// [`between`](Self::between) when the pair is at hand.
    pub fn get(&self, key: &str) -> Option<&[RelationEntry]> {
        self.table
            .iter()
            .find(|(k, _)| k.to_string() == key)
            .map(|(_, entries)| entries.as_slice())
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&RelationKey> {
        let mut keys: Vec<_> = self.table.keys().collect();
        keys.sort();
        keys
    }

    pub fn core_relationships(&self) -> &[String] {
        &self.core_relationships
    }

    /// Whether `name` appears in the core-relationship catalog.
    pub fn is_core_relationship(&self, name: &str) -> bool {
        self.core_relationships.iter().any(|r| r == name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Meta-relationship ref declarations, keyed by entity type.
#[derive(Debug, Default)]
pub struct RelationsRefRegistry {
    by_type: FxHashMap<TypeHash, Vec<RelationRefDefinition>>,
}

impl RelationsRefRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, refs: Vec<RelationRefDefinition>) {
        self.by_type.insert(TypeHash::from_name(name), refs);
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<RelationRefDefinition>> {
        self.by_type.remove(&TypeHash::from_name(name))
    }

    pub fn get(&self, name: &str) -> &[RelationRefDefinition] {
        self.by_type
            .get(&TypeHash::from_name(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Find a ref of `name` by its API input name.
    pub fn by_input_name(&self, name: &str, input_name: &str) -> Option<&RelationRefDefinition> {
        self.get(name).iter().find(|r| r.input_name == input_name)
    }
}
