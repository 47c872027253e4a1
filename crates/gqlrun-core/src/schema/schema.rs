use crate::schema::EnumDefinition;
use crate::schema::OperationDefinition;
use crate::schema::SchemaBuilder;
use crate::schema::TypeDefinition;
use indexmap::IndexMap;

/// A closed, immutable registry of object types, enums, queries, and
/// mutations.
///
/// Every type referenced by a field, argument, or operation is either
/// registered here or a built-in scalar; [`SchemaBuilder::build`] refuses to
/// produce a `Schema` otherwise. A `Schema` is `Send + Sync` and can serve any
/// number of concurrent requests.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) enums: IndexMap<String, EnumDefinition>,
    pub(crate) mutations: IndexMap<String, OperationDefinition>,
    pub(crate) queries: IndexMap<String, OperationDefinition>,
    pub(crate) types: IndexMap<String, TypeDefinition>,
}

impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn enum_definition(&self, name: &str) -> Option<&EnumDefinition> {
        self.enums.get(name)
    }

    /// Registered enums in registration order.
    pub fn enums(&self) -> &IndexMap<String, EnumDefinition> {
        &self.enums
    }

    pub fn mutations(&self) -> &IndexMap<String, OperationDefinition> {
        &self.mutations
    }

    pub fn queries(&self) -> &IndexMap<String, OperationDefinition> {
        &self.queries
    }

    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Registered object types in registration order.
    pub fn types(&self) -> &IndexMap<String, TypeDefinition> {
        &self.types
    }
}
