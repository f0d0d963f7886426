//! Entity type categories and the buckets they are filed under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// Coarse classification of an entity type.
///
/// The category decides which buckets a type lands in and which converter
/// family (if any) handles it. The set is closed: untyped category strings go
/// through [`FromStr`], which is the only place an unsupported category can
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    /// Report, Grouping, Note, ... Also a domain object.
    Container,
    /// City, Country, Region, ... Also a domain object.
    Location,
    /// Plain STIX domain object.
    StixDomainObject,
    /// Label, marking definition, external reference, ...
    StixMetaObject,
    /// Platform-internal object with no STIX representation.
    InternalObject,
}

/// Converter family a category is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConverterKind {
    /// Domain object to STIX converter.
    Domain,
    /// Meta object to STIX converter.
    Meta,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Container,
        Category::Location,
        Category::StixDomainObject,
        Category::StixMetaObject,
        Category::InternalObject,
    ];

    /// Wire name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Container => "Container",
            Category::Location => "Location",
            Category::StixDomainObject => "Stix-Domain-Object",
            Category::StixMetaObject => "Stix-Meta-Object",
            Category::InternalObject => "Internal-Object",
        }
    }

    /// Buckets a type of this category is registered under.
    pub fn buckets(self) -> &'static [Bucket] {
        match self {
            Category::Container => &[Bucket::Container, Bucket::StixDomainObject],
            Category::Location => &[Bucket::Location, Bucket::StixDomainObject],
            Category::StixDomainObject => &[Bucket::StixDomainObject],
            Category::StixMetaObject => &[Bucket::StixMetaObject],
            Category::InternalObject => &[Bucket::InternalObject],
        }
    }

    /// Converter family, or `None` for internal objects.
    pub fn converter_kind(self) -> Option<ConverterKind> {
        match self {
            Category::Container | Category::Location | Category::StixDomainObject => {
                Some(ConverterKind::Domain)
            }
            Category::StixMetaObject => Some(ConverterKind::Meta),
            Category::InternalObject => None,
        }
    }

    /// True for plain domain objects and the Container/Location variants.
    pub fn is_stix_domain_object(self) -> bool {
        matches!(
            self,
            Category::Container | Category::Location | Category::StixDomainObject
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SchemaError::UnsupportedCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

/// A named set of entity type names.
///
/// Every category maps onto one or two buckets; `StixMetaRelationship` holds
/// the database names of meta-relationship refs instead of type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Container,
    Location,
    StixDomainObject,
    StixMetaObject,
    InternalObject,
    StixMetaRelationship,
}

impl Bucket {
    /// Bucket name as used by the rest of the platform.
    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::Container => "Container",
            Bucket::Location => "Location",
            Bucket::StixDomainObject => "Stix-Domain-Object",
            Bucket::StixMetaObject => "Stix-Meta-Object",
            Bucket::InternalObject => "Internal-Object",
            Bucket::StixMetaRelationship => "stix-meta-relationship",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
