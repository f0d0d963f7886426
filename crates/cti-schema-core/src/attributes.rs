//! Schema attribute definitions.
//!
//! An [`AttributeDefinition`] describes one field stored on instances of an
//! entity type. Feature modules declare their own attributes; the binder then
//! wraps them with the standard attributes constructed by the functions in
//! this module ([`standard_id`], [`x_opencti_stix_ids`], ...).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Attribute name of the content-derived standard identifier.
pub const STANDARD_ID: &str = "standard_id";
/// Attribute name of the list of additional STIX ids.
pub const X_OPENCTI_STIX_IDS: &str = "x_opencti_stix_ids";
/// Attribute name of the revoked flag.
pub const REVOKED: &str = "revoked";
/// Attribute name of the confidence score.
pub const CONFIDENCE: &str = "confidence";
/// Attribute name of the language.
pub const LANG: &str = "lang";
/// STIX alias list.
pub const ALIASES: &str = "aliases";
/// Platform alias list, used where STIX defines no `aliases` property.
pub const X_OPENCTI_ALIASES: &str = "x_opencti_aliases";
/// Internal ids derived from aliases, used for deduplication.
pub const I_ALIASES_IDS: &str = "i_aliases_ids";

/// Storage type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Date,
    Numeric,
    Boolean,
    Dictionary,
    Json,
}

/// Whether an attribute must be provided, and by whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mandatory {
    /// Always filled by the platform.
    Internal,
    /// Must be supplied by the caller.
    External,
    /// Optional, but can be made mandatory per deployment.
    Customizable,
    #[default]
    No,
}

bitflags! {
    /// Behaviour flags of an attribute.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AttributeFlags: u8 {
        /// Holds a list of values.
        const MULTIPLE = 0x01;
        /// Merged on upsert instead of being replaced.
        const UPSERT = 0x02;
        /// Default value is editable in the entity settings.
        const EDIT_DEFAULT = 0x04;
    }
}

/// One attribute of an entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDefinition {
    /// Attribute name as stored.
    pub name: String,
    /// Human-readable label.
    pub label: Option<String>,
    /// Storage type.
    pub attribute_type: AttributeType,
    /// Mandatory policy.
    pub mandatory: Mandatory,
    /// Behaviour flags.
    pub flags: AttributeFlags,
}

impl AttributeDefinition {
    /// Create a new attribute with no flags and no label.
    pub fn new(
        name: impl Into<String>,
        attribute_type: AttributeType,
        mandatory: Mandatory,
    ) -> Self {
        Self {
            name: name.into(),
            label: None,
            attribute_type,
            mandatory,
            flags: AttributeFlags::empty(),
        }
    }

    /// Optional single-valued string attribute.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::String, Mandatory::No)
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the mandatory policy.
    pub fn with_mandatory(mut self, mandatory: Mandatory) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Add behaviour flags.
    pub fn with_flags(mut self, flags: AttributeFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Check if this attribute holds a list.
    pub fn is_multiple(&self) -> bool {
        self.flags.contains(AttributeFlags::MULTIPLE)
    }

    /// Check if this attribute is merged on upsert.
    pub fn is_upsert(&self) -> bool {
        self.flags.contains(AttributeFlags::UPSERT)
    }

    /// Check if the caller must supply this attribute.
    pub fn is_mandatory(&self) -> bool {
        self.mandatory == Mandatory::External
    }
}

// ============================================================================
// Standard attributes
// ============================================================================

/// The content-derived identifier. Always the first attribute of a type.
pub fn standard_id() -> AttributeDefinition {
    AttributeDefinition::new(STANDARD_ID, AttributeType::String, Mandatory::Internal)
        .with_label("Id")
}

/// Additional STIX ids merged into the entity.
pub fn x_opencti_stix_ids() -> AttributeDefinition {
    AttributeDefinition::new(X_OPENCTI_STIX_IDS, AttributeType::String, Mandatory::No)
        .with_label("STIX IDs")
        .with_flags(AttributeFlags::MULTIPLE | AttributeFlags::UPSERT)
}

pub fn revoked() -> AttributeDefinition {
    AttributeDefinition::new(REVOKED, AttributeType::Boolean, Mandatory::No)
        .with_label("Revoked")
        .with_flags(AttributeFlags::UPSERT)
}

pub fn confidence() -> AttributeDefinition {
    AttributeDefinition::new(CONFIDENCE, AttributeType::Numeric, Mandatory::Customizable)
        .with_label("Confidence")
        .with_flags(AttributeFlags::UPSERT | AttributeFlags::EDIT_DEFAULT)
}

pub fn lang() -> AttributeDefinition {
    AttributeDefinition::new(LANG, AttributeType::String, Mandatory::No)
        .with_label("Language")
        .with_flags(AttributeFlags::UPSERT)
}

/// Alias list attribute under the given field name.
pub fn aliases_field(name: &str) -> AttributeDefinition {
    AttributeDefinition::new(name, AttributeType::String, Mandatory::No)
        .with_label("Aliases")
        .with_flags(AttributeFlags::MULTIPLE | AttributeFlags::UPSERT)
}

pub fn i_aliases_ids() -> AttributeDefinition {
    AttributeDefinition::new(I_ALIASES_IDS, AttributeType::String, Mandatory::Internal)
        .with_flags(AttributeFlags::MULTIPLE)
}
