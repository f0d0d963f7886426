//! Schema registry for the CTI knowledge graph.
//!
//! [`SchemaRegistry`] is the explicit context every feature module registers
//! into at startup. It replaces process-wide singletons: construct one,
//! [`bind`](SchemaRegistry::bind) each entity type definition into it, then
//! share it read-only.
//!
//! ```
//! use cti_schema_core::{
//!     Bucket, Category, Converter, EntityTypeDefinition, Representative, TypeInfo,
//! };
//! use cti_schema_registry::SchemaRegistry;
//!
//! let mut registry = SchemaRegistry::new();
//! registry.bind(EntityTypeDefinition::new(
//!     TypeInfo::new("settings", "Settings", Category::InternalObject),
//!     Converter::from_attributes("Settings", Vec::new()),
//!     Representative::field("platform_title"),
//! ));
//!
//! assert!(registry.categories().contains(Bucket::InternalObject, "Settings"));
//! assert!(registry.categories().is_internal_object("Settings"));
//! ```

mod attributes;
mod binder;
mod categories;
mod converters;
mod graphql;
mod identifiers;
mod registry;
mod relations;
mod validators;

pub use attributes::{AttributeRegistry, DepsKeyRegistry, resolve_aliases_field};
pub use categories::CategoryRegistry;
pub use converters::{ConverterRegistry, RepresentativeRegistry};
pub use graphql::GraphqlRegistry;
pub use identifiers::{IdentifierRegistry, OPENCTI_NAMESPACE};
pub use registry::SchemaRegistry;
pub use relations::{RelationEntry, RelationKey, RelationRegistry, RelationsRefRegistry};
pub use validators::{ValidationPhase, ValidatorRegistry};
