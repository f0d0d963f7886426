//! Category buckets, aliased types, and internal objects.

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};

use cti_schema_core::Bucket;

/// Type-hierarchy registry.
///
/// Bucket membership is a set: filing the same name twice under one bucket is
/// a no-op. Names inside a bucket iterate in sorted order.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    buckets: FxHashMap<Bucket, BTreeSet<String>>,
    aliased: FxHashSet<String>,
    internal_objects: FxHashSet<String>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// File `name` under `bucket`. Returns `false` if it was already there.
    pub fn add(&mut self, bucket: Bucket, name: impl Into<String>) -> bool {
        self.buckets.entry(bucket).or_default().insert(name.into())
    }

    /// Remove `name` from every type bucket and from the aliased and
    /// internal-object sets. Meta-relationship names are left alone.
    pub fn forget_type(&mut self, name: &str) {
        for (bucket, names) in &mut self.buckets {
            if *bucket != Bucket::StixMetaRelationship {
                names.remove(name);
            }
        }
        self.aliased.remove(name);
        self.internal_objects.remove(name);
    }

    /// Mark a type as alias-capable.
    pub fn register_aliased(&mut self, name: impl Into<String>) {
        self.aliased.insert(name.into());
    }

    /// Mark a type as a platform-internal object.
    pub fn register_internal_object(&mut self, name: impl Into<String>) {
        self.internal_objects.insert(name.into());
    }

    pub fn contains(&self, bucket: Bucket, name: &str) -> bool {
        self.buckets
            .get(&bucket)
            .is_some_and(|names| names.contains(name))
    }

    /// Names filed under a bucket, sorted.
    pub fn names(&self, bucket: Bucket) -> impl Iterator<Item = &str> {
        self.buckets
            .get(&bucket)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    /// Buckets that contain `name`, sorted.
    pub fn buckets_of(&self, name: &str) -> Vec<Bucket> {
        let mut found: Vec<Bucket> = self
            .buckets
            .iter()
            .filter(|(_, names)| names.contains(name))
            .map(|(bucket, _)| *bucket)
            .collect();
        found.sort();
        found
    }

    pub fn bucket_len(&self, bucket: Bucket) -> usize {
        self.buckets.get(&bucket).map_or(0, BTreeSet::len)
    }

    pub fn is_aliased(&self, name: &str) -> bool {
        self.aliased.contains(name)
    }

    pub fn is_internal_object(&self, name: &str) -> bool {
        self.internal_objects.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let mut registry = CategoryRegistry::new();
        assert!(registry.add(Bucket::Container, "Report"));
        assert!(!registry.add(Bucket::Container, "Report"));
        assert_eq!(registry.bucket_len(Bucket::Container), 1);
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = CategoryRegistry::new();
        registry.add(Bucket::StixDomainObject, "Report");
        registry.add(Bucket::StixDomainObject, "Indicator");
        registry.add(Bucket::StixDomainObject, "City");

        let names: Vec<_> = registry.names(Bucket::StixDomainObject).collect();
        assert_eq!(names, ["City", "Indicator", "Report"]);
    }

    #[test]
    fn empty_bucket() {
        let registry = CategoryRegistry::new();
        assert_eq!(registry.names(Bucket::Location).count(), 0);
        assert!(!registry.contains(Bucket::Location, "City"));
    }

    #[test]
    fn buckets_of_type() {
        let mut registry = CategoryRegistry::new();
        registry.add(Bucket::StixDomainObject, "City");
        registry.add(Bucket::Location, "City");

        assert_eq!(
            registry.buckets_of("City"),
            vec![Bucket::Location, Bucket::StixDomainObject]
        );
        assert!(registry.buckets_of("Report").is_empty());
    }

    #[test]
    fn forget_type_keeps_meta_relationships() {
        let mut registry = CategoryRegistry::new();
        registry.add(Bucket::StixDomainObject, "object-label");
        registry.add(Bucket::StixMetaRelationship, "object-label");
        registry.register_aliased("object-label");
        registry.register_internal_object("object-label");

        registry.forget_type("object-label");

        assert_eq!(registry.buckets_of("object-label"), vec![Bucket::StixMetaRelationship]);
        assert!(!registry.is_aliased("object-label"));
        assert!(!registry.is_internal_object("object-label"));
    }

    #[test]
    fn aliased_and_internal_flags() {
        let mut registry = CategoryRegistry::new();
        registry.register_aliased("Indicator");
        registry.register_internal_object("Settings");

        assert!(registry.is_aliased("Indicator"));
        assert!(!registry.is_aliased("Settings"));
        assert!(registry.is_internal_object("Settings"));
        assert!(!registry.is_internal_object("Indicator"));
    }
}
