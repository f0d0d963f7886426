//! Schema registration layer for a cyber-threat-intelligence knowledge graph.
//!
//! This crate ties the workspace together:
//!
//! - [`SchemaConfig`] - what to load and how to hash standard ids
//! - [`TypeManifest`] - declarative entity types loaded from YAML or JSON
//! - [`bootstrap`] - builds a [`SchemaRegistry`] from built-in modules and manifests
//!
//! # Example
//!
//! ```
//! use cti_schema::{SchemaConfig, bootstrap};
//!
//! let registry = bootstrap(&SchemaConfig::default()).unwrap();
//! assert!(registry.contains_type("Report"));
//! ```

mod bootstrap;
mod config;
mod error;
mod manifest;

pub use bootstrap::{bootstrap, select_modules};
pub use config::SchemaConfig;
pub use error::BootstrapError;
pub use manifest::{AttributeManifest, ManifestFile, TypeManifest};

pub use cti_schema_core::SchemaError;
pub use cti_schema_registry::SchemaRegistry;
