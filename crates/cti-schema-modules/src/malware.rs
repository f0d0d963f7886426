//! `Malware` - malicious software family or instance.

use cti_schema_core::{
    AttributeDefinition, AttributeFlags, AttributeType, Category, Converter,
    EntityTypeDefinition, GraphqlDefinition, IdentifierDefinition, IdentifierRule, Mandatory,
    RelationDeclaration, RelationTarget, Representative, TypeInfo,
};

use crate::stix;

pub const NAME: &str = "Malware";

pub fn definition() -> EntityTypeDefinition {
    EntityTypeDefinition::new(
        TypeInfo::new("malwares", NAME, Category::StixDomainObject).aliased(),
        Converter::new(|entity| {
            let mut object = stix::base(entity, "malware");
            stix::copy(
                entity,
                &mut object,
                &[
                    ("name", "name"),
                    ("description", "description"),
                    ("aliases", "aliases"),
                    ("is_family", "is_family"),
                    ("malware_types", "malware_types"),
                ],
            );
            object
        }),
        Representative::field("name"),
    )
    .with_graphql(GraphqlDefinition::new(
        "type Malware implements StixDomainObject { id: ID! name: String! is_family: Boolean }",
    ))
    .with_identifier(IdentifierDefinition::new().with_rule("name", IdentifierRule::field("name")))
    .with_attributes([
        AttributeDefinition::string("name").with_mandatory(Mandatory::External),
        AttributeDefinition::string("description"),
        AttributeDefinition::new("is_family", AttributeType::Boolean, Mandatory::Customizable),
        AttributeDefinition::new("malware_types", AttributeType::String, Mandatory::No)
            .with_flags(AttributeFlags::MULTIPLE),
    ])
    .with_relation(RelationDeclaration::new(
        "related-to",
        vec![RelationTarget::new("related-to", "Indicator")],
    ))
}
