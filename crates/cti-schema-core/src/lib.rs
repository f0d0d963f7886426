//! Core data model for the CTI schema registration layer.
//!
//! This crate holds everything a feature module needs to describe one entity
//! type of the knowledge graph:
//!
//! - [`EntityTypeDefinition`] - the complete static description of a type
//! - [`Category`] / [`Bucket`] - type classification and the buckets it feeds
//! - [`AttributeDefinition`] - schema attributes, plus the [`attributes`] catalog
//!   of standard attributes appended by the binder
//! - [`Converter`], [`Representative`], [`ValidatorFn`] - function-typed entries
//! - [`TypeHash`] - deterministic identity used to key per-type registries
//! - [`SchemaError`] - the error type shared by every crate in the workspace
//!
//! Nothing here mutates shared state; registration lives in
//! `cti-schema-registry`.

pub mod attributes;
mod category;
mod definition;
mod error;
mod functions;
mod type_hash;

pub use attributes::{AttributeDefinition, AttributeFlags, AttributeType, Mandatory};
pub use category::{Bucket, Category, ConverterKind};
pub use definition::{
    DepsKey, EntityTypeDefinition, GraphqlDefinition, IdentifierDefinition, IdentifierRule,
    RelationDeclaration, RelationRefDefinition, RelationTarget, TypeInfo, Validators,
};
pub use error::SchemaError;
pub use functions::{
    Converter, FieldResolver, IdGenerator, Representative, StixObject, StoreEntity, ValidatorFn,
};
pub use type_hash::TypeHash;
