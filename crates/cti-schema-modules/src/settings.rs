//! `Settings` - platform-wide settings, a singleton internal object.

use cti_schema_core::{
    AttributeDefinition, AttributeType, Category, Converter, EntityTypeDefinition,
    GraphqlDefinition, IdGenerator, IdentifierDefinition, IdentifierRule, Mandatory,
    Representative, TypeInfo, ValidatorFn, Validators,
};
use serde_json::Value;

pub const NAME: &str = "Settings";

pub fn definition() -> EntityTypeDefinition {
    EntityTypeDefinition::new(
        TypeInfo::new("settings", NAME, Category::InternalObject),
        // Internal objects are never exported.
        Converter::new(|_| Default::default()),
        Representative::new(|_| NAME.to_string()),
    )
    .with_graphql(
        GraphqlDefinition::new("type Settings { id: ID! platform_title: String }")
            .with_resolver("Query", ["settings"]),
    )
    .with_identifier(IdentifierDefinition::new().with_rule(
        "internal_id",
        IdentifierRule::Generator(IdGenerator::new(|| "settings".to_string())),
    ))
    .with_attributes([
        AttributeDefinition::string("platform_title"),
        AttributeDefinition::string("platform_email").with_mandatory(Mandatory::Customizable),
        AttributeDefinition::new("platform_organization", AttributeType::String, Mandatory::No),
    ])
    .with_validators(Validators {
        creation: None,
        update: Some(ValidatorFn::new(reject_empty_title)),
    })
}

fn reject_empty_title(input: &Value) -> Result<(), String> {
    match input.get("platform_title") {
        Some(Value::String(title)) if title.trim().is_empty() => {
            Err("platform title cannot be blank".to_string())
        }
        _ => Ok(()),
    }
}
