//! `City` location.

use cti_schema_core::{
    AttributeDefinition, AttributeType, Category, Converter, EntityTypeDefinition, FieldResolver,
    GraphqlDefinition, IdGenerator, IdentifierDefinition, IdentifierRule, Mandatory,
    Representative, TypeInfo,
};
use serde_json::Value;

use crate::stix;

pub const NAME: &str = "City";

pub fn definition() -> EntityTypeDefinition {
    EntityTypeDefinition::new(
        TypeInfo::new("cities", NAME, Category::Location).aliased(),
        Converter::new(|entity| {
            let mut object = stix::base(entity, "location");
            stix::copy(
                entity,
                &mut object,
                &[
                    ("name", "name"),
                    ("description", "description"),
                    ("latitude", "latitude"),
                    ("longitude", "longitude"),
                    ("x_opencti_aliases", "x_opencti_aliases"),
                ],
            );
            object.insert("x_opencti_location_type".to_string(), Value::String(NAME.to_string()));
            object
        }),
        Representative::field("name"),
    )
    .with_graphql(GraphqlDefinition::new("type City implements Location { id: ID! name: String! }"))
    .with_identifier(
        IdentifierDefinition::new()
            .with_rule("name", IdentifierRule::field("name"))
            .with_rule(
                "x_opencti_location_type",
                IdentifierRule::Generator(IdGenerator::new(|| NAME.to_string())),
            )
            .with_resolver("name", FieldResolver::new(normalize_name)),
    )
    .with_attributes([
        AttributeDefinition::string("name").with_mandatory(Mandatory::External),
        AttributeDefinition::string("description"),
        AttributeDefinition::new("latitude", AttributeType::Numeric, Mandatory::No),
        AttributeDefinition::new("longitude", AttributeType::Numeric, Mandatory::No),
    ])
}

fn normalize_name(value: &Value) -> Value {
    match value.as_str() {
        Some(name) => Value::String(name.trim().to_lowercase()),
        None => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converter_tags_location_type() {
        let Value::Object(entity) = json!({ "standard_id": "location--1", "name": "Paris" }) else {
            unreachable!()
        };
        let object = definition().converter.convert(&entity);
        assert_eq!(object["type"], "location");
        assert_eq!(object["x_opencti_location_type"], "City");
    }

    #[test]
    fn name_normalization() {
        assert_eq!(normalize_name(&json!("  Paris ")), json!("paris"));
    }
}
