//! `Indicator` - a detection pattern.

use cti_schema_core::{
    AttributeDefinition, AttributeType, Category, Converter, EntityTypeDefinition,
    GraphqlDefinition, IdentifierDefinition, IdentifierRule, Mandatory, RelationDeclaration,
    RelationRefDefinition, RelationTarget, Representative, TypeInfo,
};

use crate::stix;

pub const NAME: &str = "Indicator";

pub fn definition() -> EntityTypeDefinition {
    EntityTypeDefinition::new(
        TypeInfo::new("indicators", NAME, Category::StixDomainObject),
        Converter::new(|entity| {
            let mut object = stix::base(entity, "indicator");
            stix::copy(
                entity,
                &mut object,
                &[
                    ("name", "name"),
                    ("description", "description"),
                    ("pattern", "pattern"),
                    ("pattern_type", "pattern_type"),
                    ("valid_from", "valid_from"),
                    ("valid_until", "valid_until"),
                    ("x_opencti_score", "x_opencti_score"),
                ],
            );
            object
        }),
        Representative::field("name"),
    )
    .with_graphql(
        GraphqlDefinition::new(
            "type Indicator implements StixDomainObject { id: ID! pattern: String! }",
        )
        .with_resolver("Query", ["indicator", "indicators"]),
    )
    .with_identifier(
        IdentifierDefinition::new().with_rule("pattern", IdentifierRule::field("pattern")),
    )
    .with_attributes([
        AttributeDefinition::string("name").with_mandatory(Mandatory::External),
        AttributeDefinition::string("description"),
        AttributeDefinition::string("pattern").with_mandatory(Mandatory::External),
        AttributeDefinition::string("pattern_type").with_mandatory(Mandatory::External),
        AttributeDefinition::new("valid_from", AttributeType::Date, Mandatory::No),
        AttributeDefinition::new("valid_until", AttributeType::Date, Mandatory::No),
        AttributeDefinition::new(
            "x_opencti_score",
            AttributeType::Numeric,
            Mandatory::Customizable,
        ),
    ])
    .with_relation(RelationDeclaration::new(
        "indicates",
        vec![RelationTarget::new("indicates", "Malware")],
    ))
    .with_relation(RelationDeclaration::new(
        "related-to",
        vec![RelationTarget::new("related-to", "Malware")],
    ))
    .with_relations_ref(RelationRefDefinition::new("createdBy", "created-by"))
}
