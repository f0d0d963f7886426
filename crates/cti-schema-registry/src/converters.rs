//! Converter and representative registries.

use rustc_hash::FxHashMap;

use cti_schema_core::{Converter, ConverterKind, Representative, TypeHash};

/// Domain and meta converters, keyed by entity type.
#[derive(Debug, Default)]
pub struct ConverterRegistry {
    domain: FxHashMap<TypeHash, Converter>,
    meta: FxHashMap<TypeHash, Converter>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a converter under the given family, replacing any previous one
    /// in either family.
    pub fn register(&mut self, kind: ConverterKind, name: &str, converter: Converter) {
        let hash = TypeHash::from_name(name);
        match kind {
            ConverterKind::Domain => {
                self.meta.remove(&hash);
                self.domain.insert(hash, converter);
            }
            ConverterKind::Meta => {
                self.domain.remove(&hash);
                self.meta.insert(hash, converter);
            }
        }
    }

    /// Drop the converter of `name`. Returns `false` if it had none.
    pub fn remove(&mut self, name: &str) -> bool {
        let hash = TypeHash::from_name(name);
        let domain = self.domain.remove(&hash).is_some();
        let meta = self.meta.remove(&hash).is_some();
        domain || meta
    }

    /// Find the converter for a type, along with its family.
    pub fn get(&self, name: &str) -> Option<(ConverterKind, &Converter)> {
        let hash = TypeHash::from_name(name);
        self.domain
            .get(&hash)
            .map(|c| (ConverterKind::Domain, c))
            .or_else(|| self.meta.get(&hash).map(|c| (ConverterKind::Meta, c)))
    }

    pub fn kind(&self, name: &str) -> Option<ConverterKind> {
        self.get(name).map(|(kind, _)| kind)
    }

    pub fn len(&self) -> usize {
        self.domain.len() + self.meta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Representative functions, keyed by entity type.
#[derive(Debug, Default)]
pub struct RepresentativeRegistry {
    by_type: FxHashMap<TypeHash, Representative>,
}

impl RepresentativeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, representative: Representative) {
        self.by_type.insert(TypeHash::from_name(name), representative);
    }

    pub fn get(&self, name: &str) -> Option<&Representative> {
        self.by_type.get(&TypeHash::from_name(name))
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
    use cti_schema_core::StoreEntity;

    #[test]
    fn converter_lookup_reports_family() {
        let mut registry = ConverterRegistry::new();
        registry.register(
            ConverterKind::Domain,
            "Report",
            Converter::from_attributes("Report", Vec::new()),
        );
        registry.register(
            ConverterKind::Meta,
            "Label",
            Converter::from_attributes("Label", Vec::new()),
        );

        assert_eq!(registry.kind("Report"), Some(ConverterKind::Domain));
        assert_eq!(registry.kind("Label"), Some(ConverterKind::Meta));
        assert_eq!(registry.kind("Settings"), None);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn family_change_replaces_converter() {
        let mut registry = ConverterRegistry::new();
        let converter = Converter::from_attributes("Label", Vec::new());
        registry.register(ConverterKind::Domain, "Label", converter.clone());
        registry.register(ConverterKind::Meta, "Label", converter);

        assert_eq!(registry.kind("Label"), Some(ConverterKind::Meta));
        assert_eq!(registry.len(), 1);

        assert!(registry.remove("Label"));
        assert!(!registry.remove("Label"));
        assert!(registry.is_empty());
    }

    #[test]
    fn registered_converter_is_invoked() {
        let mut registry = ConverterRegistry::new();
        registry.register(
            ConverterKind::Domain,
            "Report",
            Converter::from_attributes("Report", Vec::new()),
        );

        let (_, converter) = registry.get("Report").unwrap();
        let stix = converter.convert(&StoreEntity::new());
        assert_eq!(stix["type"], "report");
    }

    #[test]
    fn representative_replaces_previous() {
        let mut registry = RepresentativeRegistry::new();
        registry.register("Report", Representative::new(|_| "first".to_string()));
        registry.register("Report", Representative::new(|_| "second".to_string()));

        assert_eq!(registry.len(), 1);
        let rep = registry.get("Report").unwrap();
        assert_eq!(rep.represent(&Default::default()), "second");
    }
}
