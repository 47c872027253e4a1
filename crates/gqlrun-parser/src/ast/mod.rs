//! AST types for parsed GraphQL executable documents.
//!
//! All node types borrow strings from the source text via
//! [`Cow<'src, str>`](std::borrow::Cow) and carry a
//! [`GraphQLSourceSpan`](crate::GraphQLSourceSpan). Spans are used for
//! diagnostics only and never influence execution.

mod argument;
mod ast_node;
mod definition;
mod directive_annotation;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod name;
mod operation_definition;
mod operation_kind;
mod selection;
mod selection_set;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use definition::Definition;
pub use directive_annotation::DirectiveAnnotation;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use name::Name;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use value::ObjectField;
pub use value::Value;
pub use variable_definition::VariableDefinition;
