//! Schema bootstrap configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use uuid::Uuid;

use cti_schema_registry::OPENCTI_NAMESPACE;

use crate::error::{BootstrapError, Result};

/// Configuration for building the schema registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SchemaConfig {
    /// UUIDv5 namespace used for standard ids.
    pub identifier_namespace: Uuid,

    /// Built-in modules to load, by entity type name. `None` loads all of them.
    pub modules: Option<Vec<String>>,

    /// Warn about unknown module names instead of failing.
    pub skip_unknown_modules: bool,

    /// Manifest files bound after the built-in modules, in order.
    pub manifests: Vec<PathBuf>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            identifier_namespace: OPENCTI_NAMESPACE,
            modules: None,
            skip_unknown_modules: false,
            manifests: Vec::new(),
        }
    }
}

impl SchemaConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(source: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Load a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| BootstrapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source).map_err(|source| BootstrapError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SchemaConfig::default();
        assert_eq!(cfg.identifier_namespace, OPENCTI_NAMESPACE);
        assert!(cfg.modules.is_none());
        assert!(!cfg.skip_unknown_modules);
        assert!(cfg.manifests.is_empty());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = SchemaConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, SchemaConfig::default());
    }

    #[test]
    fn parse_full_document() {
        let cfg = SchemaConfig::from_yaml_str(
            r#"
identifier_namespace: "00000000-0000-0000-0000-000000000001"
modules: [Report, Indicator]
skip_unknown_modules: true
manifests:
  - schema/custom.yaml
"#,
        )
        .unwrap();

        assert_eq!(cfg.identifier_namespace, Uuid::from_u128(1));
        assert_eq!(
            cfg.modules,
            Some(vec!["Report".to_string(), "Indicator".to_string()])
        );
        assert!(cfg.skip_unknown_modules);
        assert_eq!(cfg.manifests, vec![PathBuf::from("schema/custom.yaml")]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(SchemaConfig::from_yaml_str("strict: true").is_err());
    }

    #[test]
    fn missing_file() {
        let err = SchemaConfig::from_path("/nonexistent/cti-schema.yaml").unwrap_err();
        assert!(matches!(err, BootstrapError::Io { .. }));
    }
}
