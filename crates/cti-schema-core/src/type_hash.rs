//! Deterministic hash-based identity for entity types.
//!
//! Per-type registries are keyed by [`TypeHash`] rather than by the type name
//! string. The hash is computed from the entity type name with XXHash64, so it
//! can be derived on the read side without a secondary name-to-id map.
//!
//! # Examples
//!
//! ```
//! use cti_schema_core::TypeHash;
//!
//! let report = TypeHash::from_name("Report");
//! assert_eq!(report, TypeHash::from_name("Report"));
//! assert_ne!(report, TypeHash::from_name("report"));
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain marker mixed into every entity type hash.
const ENTITY_TYPE: u64 = 0x2fac10b63a6cc57c;

/// A deterministic 64-bit hash identifying an entity type.
///
/// Entity type names are case-sensitive: `Report` and `report` hash differently.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a hash from an entity type name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(ENTITY_TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Check if this is the empty hash.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl From<&str> for TypeHash {
    fn from(name: &str) -> Self {
        TypeHash::from_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_hash_determinism() {
        assert_eq!(TypeHash::from_name("Report"), TypeHash::from_name("Report"));
        assert_eq!(TypeHash::from("Indicator"), TypeHash::from_name("Indicator"));
    }

    #[test]
    fn type_hash_uniqueness() {
        let report = TypeHash::from_name("Report");
        let indicator = TypeHash::from_name("Indicator");
        let city = TypeHash::from_name("City");

        assert_ne!(report, indicator);
        assert_ne!(report, city);
        assert_ne!(indicator, city);
    }

    #[test]
    fn type_hash_is_case_sensitive() {
        assert_ne!(TypeHash::from_name("Report"), TypeHash::from_name("report"));
    }

    #[test]
    fn empty_hash() {
        assert!(TypeHash::EMPTY.is_empty());
        assert!(!TypeHash::from_name("Report").is_empty());
    }

    #[test]
    fn display_is_hex() {
        let shown = TypeHash(0xff).to_string();
        assert_eq!(shown, "0x00000000000000ff");
    }
}
