//! `Label` meta object.

use cti_schema_core::{
    AttributeDefinition, Category, Converter, EntityTypeDefinition, GraphqlDefinition,
    IdentifierDefinition, IdentifierRule, Mandatory, Representative, TypeInfo,
};

use crate::stix;

pub const NAME: &str = "Label";

pub fn definition() -> EntityTypeDefinition {
    EntityTypeDefinition::new(
        TypeInfo::new("labels", NAME, Category::StixMetaObject),
        Converter::new(|entity| {
            let mut object = stix::base(entity, "label");
            stix::copy(entity, &mut object, &[("value", "value"), ("color", "color")]);
            object
        }),
        Representative::field("value"),
    )
    .with_graphql(GraphqlDefinition::new("type Label { id: ID! value: String! color: String }"))
    .with_identifier(IdentifierDefinition::new().with_rule("value", IdentifierRule::field("value")))
    .with_attributes([
        AttributeDefinition::string("value").with_mandatory(Mandatory::External),
        AttributeDefinition::string("color").with_mandatory(Mandatory::External),
    ])
}
