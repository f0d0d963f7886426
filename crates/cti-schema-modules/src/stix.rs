//! Helpers shared by the built-in converters.

use cti_schema_core::{StixObject, StoreEntity};
use serde_json::Value;

/// Start a STIX object with `id`, `type`, and `spec_version`.
pub(crate) fn base(entity: &StoreEntity, stix_type: &str) -> StixObject {
    let mut stix = StixObject::new();
    if let Some(id) = entity.get("standard_id") {
        stix.insert("id".to_string(), id.clone());
    }
    stix.insert("type".to_string(), Value::String(stix_type.to_string()));
    stix.insert("spec_version".to_string(), Value::String("2.1".to_string()));
    stix
}

/// Copy present fields from the entity, renaming as given.
pub(crate) fn copy(entity: &StoreEntity, stix: &mut StixObject, fields: &[(&str, &str)]) {
    for (from, to) in fields {
        if let Some(value) = entity.get(*from).filter(|v| !v.is_null()) {
            stix.insert((*to).to_string(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn copy_skips_null_and_missing() {
        let Value::Object(entity) = json!({ "name": "x", "description": null }) else {
            unreachable!()
        };
        let mut stix = base(&entity, "malware");
        copy(
            &entity,
            &mut stix,
            &[("name", "name"), ("description", "description"), ("x_mitre_id", "external_id")],
        );

        assert_eq!(stix["name"], "x");
        assert_eq!(stix["spec_version"], "2.1");
        assert!(!stix.contains_key("description"));
        assert!(!stix.contains_key("external_id"));
        assert!(!stix.contains_key("id"));
    }
}
