//! GraphQL schema fragments contributed by feature modules.

use cti_schema_core::GraphqlDefinition;

/// Ordered list of schema fragments. Registration is a plain append.
#[derive(Debug, Default)]
pub struct GraphqlRegistry {
    definitions: Vec<GraphqlDefinition>,
}

impl GraphqlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: GraphqlDefinition) {
        self.definitions.push(definition);
    }

    pub fn definitions(&self) -> &[GraphqlDefinition] {
        &self.definitions
    }

    /// All non-empty SDL fragments joined in registration order.
    pub fn merged_type_defs(&self) -> String {
        self.definitions
            .iter()
            .map(|d| d.schema.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
