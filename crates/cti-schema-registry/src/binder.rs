//! Type registry binder.
//!
//! [`SchemaRegistry::bind`] consumes one [`EntityTypeDefinition`] and fans it
//! out into every sub-registry. Steps run in a fixed order because later ones
//! rely on the type name already being filed under its category:
//!
//! 1. category buckets and converter
//! 2. aliased flag
//! 3. representative
//! 4. validators
//! 5. GraphQL schema
//! 6. identifier rules
//! 7. attribute list
//! 8. dependency keys
//! 9. relations
//! 10. relations refs
//!
//! Nothing is rolled back. Binding happens during startup, where any failure is
//! fatal anyway.
//!
//! Binding a type name again replaces what the earlier definition registered
//! for that type: buckets, converter, flags, representative, validators,
//! identifier rules, attributes, and refs. GraphQL fragments, dependency keys,
//! and relations keep accumulating.

use tracing::debug;

use cti_schema_core::attributes::{self, aliases_field};
use cti_schema_core::{AttributeDefinition, Bucket, EntityTypeDefinition, TypeInfo};

use crate::relations::{RelationEntry, RelationKey};
use crate::{SchemaRegistry, resolve_aliases_field};

impl SchemaRegistry {
    /// Bind one entity type definition into the registry.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn bind(&mut self, definition: EntityTypeDefinition) {
        let EntityTypeDefinition {
            type_info,
            graphql,
            identifier,
            representative,
            converter,
            attributes,
            relations,
            relations_refs,
            validators,
            deps_keys,
        } = definition;
        let name = type_info.name.as_str();
        debug!(entity_type = name, category = %type_info.category, "Binding entity type");

        let rebinding = self.contains_type(name);
        if rebinding {
            debug!(entity_type = name, "Replacing earlier definition");
            self.categories.forget_type(name);
        }

        // Category buckets
        for bucket in type_info.category.buckets() {
            self.categories.add(*bucket, name);
        }
        match type_info.category.converter_kind() {
            Some(kind) => self.converters.register(kind, name, converter),
            None => {
                self.converters.remove(name);
                self.categories.register_internal_object(name);
            }
        }
        if type_info.aliased {
            self.categories.register_aliased(name);
        }

        self.representatives.register(name, representative);

        match validators {
            Some(validators) => self.validators.register(name, validators),
            None => {
                self.validators.remove(name);
            }
        }

        self.graphql.register(graphql);
        self.identifiers.register(name, identifier);

        let attribute_list = assemble_attributes(&type_info, attributes);
        debug!(entity_type = name, attributes = attribute_list.len(), "Registered attributes");
        self.attributes.register(name, attribute_list);

        if let Some(deps_keys) = deps_keys {
            self.deps_keys.add(deps_keys);
        }

        for relation in relations {
            self.relations.add_core_relationship(relation.name.as_str());
            for target in relation.targets {
                let key = RelationKey::new(name, target.target_type.as_str());
                self.relations
                    .add(key, RelationEntry::new(relation.name.as_str(), target.target_type));
            }
        }

        match relations_refs {
            Some(refs) => {
                for relation_ref in &refs {
                    self.categories
                        .add(Bucket::StixMetaRelationship, relation_ref.database_name.as_str());
                }
                self.relations_refs.register(name, refs);
            }
            None => {
                self.relations_refs.remove(name);
            }
        }

        if !rebinding {
            self.types.push(type_info.name);
        }
    }

    /// Bind definitions in order.
    pub fn bind_all(&mut self, definitions: impl IntoIterator<Item = EntityTypeDefinition>) {
        for definition in definitions {
            self.bind(definition);
        }
    }
}

/// Build the final attribute list of a type.
///
/// `standard_id` is always first, declared attributes follow in order, then the
/// alias attributes (aliased types) and the STIX domain attributes (domain
/// object categories).
fn assemble_attributes(
    type_info: &TypeInfo,
    declared: Vec<AttributeDefinition>,
) -> Vec<AttributeDefinition> {
    let mut list = Vec::with_capacity(declared.len() + 7);
    list.push(attributes::standard_id());
    list.extend(declared);
    if type_info.aliased {
        list.push(aliases_field(resolve_aliases_field(
            &type_info.name,
            type_info.category,
        )));
        list.push(attributes::i_aliases_ids());
    }
    if type_info.category.is_stix_domain_object() {
        list.push(attributes::x_opencti_stix_ids());
        list.push(attributes::revoked());
        list.push(attributes::confidence());
        list.push(attributes::lang());
    }
    list
}
