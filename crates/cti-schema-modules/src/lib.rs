//! Built-in entity type modules.
//!
//! Each module exposes a `definition()` function returning the static
//! [`EntityTypeDefinition`] of one entity type:
//!
//! - **report** - `Report` container
//! - **indicator** - `Indicator` domain object
//! - **malware** - `Malware` domain object (aliased)
//! - **city** - `City` location (aliased)
//! - **label** - `Label` meta object
//! - **settings** - `Settings` internal object
//!
//! # Usage
//!
//! ```ignore
//! let mut registry = SchemaRegistry::new();
//! registry.bind_all(cti_schema_modules::all());
//! ```

pub mod city;
pub mod indicator;
pub mod label;
pub mod malware;
pub mod report;
pub mod settings;

mod stix;

use cti_schema_core::EntityTypeDefinition;

/// Constructor of a built-in definition.
pub type DefinitionFn = fn() -> EntityTypeDefinition;

/// Built-in modules by entity type name, in load order.
pub const MODULES: &[(&str, DefinitionFn)] = &[
    (label::NAME, label::definition),
    (settings::NAME, settings::definition),
    (city::NAME, city::definition),
    (malware::NAME, malware::definition),
    (indicator::NAME, indicator::definition),
    (report::NAME, report::definition),
];

/// Definitions of every built-in module, in load order.
pub fn all() -> Vec<EntityTypeDefinition> {
    MODULES.iter().map(|(_, definition)| definition()).collect()
}

/// Find a built-in module by entity type name.
pub fn find(name: &str) -> Option<DefinitionFn> {
    MODULES
        .iter()
        .find(|(module, _)| *module == name)
        .map(|(_, definition)| *definition)
}
