//! `Report` - a dated collection of threat intelligence.

use cti_schema_core::{
    AttributeDefinition, AttributeFlags, AttributeType, Category, Converter, DepsKey,
    EntityTypeDefinition, FieldResolver, GraphqlDefinition, IdentifierDefinition, IdentifierRule,
    Mandatory, RelationDeclaration, RelationRefDefinition, RelationTarget, Representative,
    TypeInfo, ValidatorFn, Validators,
};
use serde_json::Value;

use crate::stix;

pub const NAME: &str = "Report";

const SCHEMA: &str = r#"type Report implements Container & StixDomainObject {
  id: ID!
  standard_id: String!
  name: String!
  description: String
  report_types: [String]
  published: DateTime!
}"#;

pub fn definition() -> EntityTypeDefinition {
    EntityTypeDefinition::new(
        TypeInfo::new("reports", NAME, Category::Container),
        Converter::new(|entity| {
            let mut object = stix::base(entity, "report");
            stix::copy(
                entity,
                &mut object,
                &[
                    ("name", "name"),
                    ("description", "description"),
                    ("report_types", "report_types"),
                    ("published", "published"),
                    ("object_refs", "object_refs"),
                ],
            );
            object
        }),
        Representative::field("name"),
    )
    .with_graphql(
        GraphqlDefinition::new(SCHEMA)
            .with_resolver("Query", ["report", "reports"])
            .with_resolver("Mutation", ["reportAdd", "reportEdit"]),
    )
    .with_identifier(
        IdentifierDefinition::new()
            .with_rule("name", IdentifierRule::field("name"))
            .with_rule("published", IdentifierRule::field("published"))
            .with_resolver("published", FieldResolver::new(date_only)),
    )
    .with_attributes([
        AttributeDefinition::string("name")
            .with_label("Name")
            .with_mandatory(Mandatory::External),
        AttributeDefinition::string("description").with_label("Description"),
        AttributeDefinition::new("report_types", AttributeType::String, Mandatory::Customizable)
            .with_label("Report types")
            .with_flags(AttributeFlags::MULTIPLE | AttributeFlags::EDIT_DEFAULT),
        AttributeDefinition::new("published", AttributeType::Date, Mandatory::External)
            .with_label("Publication date"),
    ])
    .with_relation(RelationDeclaration::new(
        "related-to",
        vec![
            RelationTarget::new("related-to", "Indicator"),
            RelationTarget::new("related-to", "Malware"),
        ],
    ))
    .with_relations_ref(
        RelationRefDefinition::new("createdBy", "created-by")
            .to_types(["Organization", "Individual"]),
    )
    .with_relations_ref(
        RelationRefDefinition::new("objectLabel", "object-label")
            .multiple()
            .to_types(["Label"]),
    )
    .with_relations_ref(
        RelationRefDefinition::new("objects", "object")
            .multiple()
            .to_types(["Indicator", "Malware", "City"]),
    )
    .with_validators(Validators {
        creation: Some(ValidatorFn::new(require_published)),
        update: None,
    })
    .with_deps_key(DepsKey::new("createdBy"))
    .with_deps_key(DepsKey::new("objectLabel").with_types(["Label"]))
}

/// Keep the `YYYY-MM-DD` prefix so republishing on the same day keeps the id.
fn date_only(value: &Value) -> Value {
    match value.as_str() {
        Some(date) => Value::String(date.chars().take(10).collect()),
        None => value.clone(),
    }
}

fn require_published(input: &Value) -> Result<(), String> {
    match input.get("published") {
        Some(Value::String(date)) if !date.is_empty() => Ok(()),
        _ => Err("published date is required".to_string()),
    }
}
