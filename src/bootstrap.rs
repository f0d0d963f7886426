//! Builds the schema registry at startup.
//!
//! Phases run in order and any failure aborts startup:
//!
//! 1. select built-in modules from the configuration
//! 2. bind built-in modules in load order
//! 3. bind manifests, file by file
//!
//! A manifest file is converted as a whole before any of its types is bound,
//! so a file with an invalid type contributes nothing.

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use cti_schema_core::EntityTypeDefinition;
use cti_schema_modules::MODULES;
use cti_schema_registry::SchemaRegistry;

use crate::error::{BootstrapError, Result};
use crate::{ManifestFile, SchemaConfig};

/// Built-in definitions selected by `config.modules`, in load order.
///
/// Names are matched against entity type names. The first unknown name, in
/// configuration order, fails unless `skip_unknown_modules` is set.
pub fn select_modules(config: &SchemaConfig) -> Result<Vec<EntityTypeDefinition>> {
    let Some(wanted) = &config.modules else {
        return Ok(cti_schema_modules::all());
    };

    for name in wanted {
        if cti_schema_modules::find(name).is_none() {
            if config.skip_unknown_modules {
                warn!(module = %name, "Skipping unknown module");
            } else {
                return Err(BootstrapError::UnknownModule(name.clone()));
            }
        }
    }

    let wanted: FxHashSet<&str> = wanted.iter().map(String::as_str).collect();

    Ok(MODULES
        .iter()
        .filter(|(name, _)| wanted.contains(name))
        .map(|(_, definition)| definition())
        .collect())
}

/// Build a registry from the built-in modules and configured manifests.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn bootstrap(config: &SchemaConfig) -> Result<SchemaRegistry> {
    let mut registry = SchemaRegistry::with_identifier_namespace(config.identifier_namespace);

    info!("Phase: modules");
    let builtins = select_modules(config)?;
    for definition in builtins {
        debug!(module = %definition.type_info.id, "Binding built-in module");
        registry.bind(definition);
    }

    info!("Phase: manifests");
    for path in &config.manifests {
        let definitions = ManifestFile::from_path(path)?.into_definitions()?;
        debug!(path = %path.display(), types = definitions.len(), "Binding manifest");
        registry.bind_all(definitions);
    }

    info!(
        types = registry.type_count(),
        relation_keys = registry.relations().len(),
        "Schema registry ready"
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(definitions: &[EntityTypeDefinition]) -> Vec<&str> {
        definitions.iter().map(EntityTypeDefinition::name).collect()
    }

    #[test]
    fn all_modules_by_default() {
        let definitions = select_modules(&SchemaConfig::default()).unwrap();
        assert_eq!(definitions.len(), MODULES.len());
    }

    #[test]
    fn selection_keeps_load_order() {
        let config = SchemaConfig {
            modules: Some(vec!["Report".to_string(), "Label".to_string()]),
            ..SchemaConfig::default()
        };
        let definitions = select_modules(&config).unwrap();
        assert_eq!(names(&definitions), ["Label", "Report"]);
    }

    #[test]
    fn unknown_module_fails() {
        let config = SchemaConfig {
            modules: Some(vec!["Campaign".to_string()]),
            ..SchemaConfig::default()
        };
        let err = select_modules(&config).unwrap_err();
        assert!(matches!(err, BootstrapError::UnknownModule(name) if name == "Campaign"));
    }

    #[test]
    fn first_unknown_module_in_config_order_is_reported() {
        let config = SchemaConfig {
            modules: Some(vec![
                "Report".to_string(),
                "Campaign".to_string(),
                "Incident".to_string(),
                "Note".to_string(),
            ]),
            ..SchemaConfig::default()
        };
        for _ in 0..4 {
            let err = select_modules(&config).unwrap_err();
            assert!(matches!(err, BootstrapError::UnknownModule(name) if name == "Campaign"));
        }
    }

    #[test]
    fn unknown_module_skipped_when_allowed() {
        let config = SchemaConfig {
            modules: Some(vec!["Campaign".to_string(), "City".to_string()]),
            skip_unknown_modules: true,
            ..SchemaConfig::default()
        };
        let definitions = select_modules(&config).unwrap();
        assert_eq!(names(&definitions), ["City"]);
    }
}
