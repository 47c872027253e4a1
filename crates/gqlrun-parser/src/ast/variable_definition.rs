use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;

/// `$name: Type = default @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    /// The variable name, without the `$`.
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
    pub var_type: TypeAnnotation<'src>,
}
