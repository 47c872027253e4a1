use crate::schema::PropertyDefinition;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::any::TypeId;

/// A registered object type, bound to the Rust type its instances have.
#[derive(Clone, Debug)]
pub struct TypeDefinition {
    pub(super) name: String,
    pub(super) properties: IndexMap<String, PropertyDefinition>,
    pub(super) rust_type_id: TypeId,
    pub(super) rust_type_name: &'static str,
    pub(super) type_annotation: TypeAnnotation,
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &IndexMap<String, PropertyDefinition> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.get(name)
    }

    pub fn rust_type_id(&self) -> TypeId {
        self.rust_type_id
    }

    /// The Rust type name instances were registered with, for diagnostics.
    pub fn rust_type_name(&self) -> &'static str {
        self.rust_type_name
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
