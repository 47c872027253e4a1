use crate::types::TypeAnnotation;
use indexmap::IndexSet;

/// A registered enum: its name and its entry names in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumDefinition {
    pub(super) entries: IndexSet<String>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}

impl EnumDefinition {
    /// Whether `entry` is a member. Case-sensitive.
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    pub fn entries(&self) -> &IndexSet<String> {
        &self.entries
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
