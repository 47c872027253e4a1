use crate::ast::Name;
use crate::GraphQLSourceSpan;
use std::borrow::Cow;

/// A literal or variable reference in argument position.
///
/// Integers are kept at 64 bits here; narrowing to a declared scalar width
/// happens when arguments are coerced during execution.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Boolean {
        span: GraphQLSourceSpan,
        value: bool,
    },
    Enum(Name<'src>),
    Float {
        span: GraphQLSourceSpan,
        value: f64,
    },
    Int {
        span: GraphQLSourceSpan,
        value: i64,
    },
    List {
        span: GraphQLSourceSpan,
        values: Vec<Value<'src>>,
    },
    Null {
        span: GraphQLSourceSpan,
    },
    Object {
        fields: Vec<ObjectField<'src>>,
        span: GraphQLSourceSpan,
    },
    String {
        span: GraphQLSourceSpan,
        value: Cow<'src, str>,
    },
    /// `$name`. The `Name` holds the variable name without the `$` and its
    /// span covers the `$`.
    Variable(Name<'src>),
}

impl Value<'_> {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Value::Boolean { span, .. }
            | Value::Float { span, .. }
            | Value::Int { span, .. }
            | Value::List { span, .. }
            | Value::Null { span }
            | Value::Object { span, .. }
            | Value::String { span, .. } => span,
            Value::Enum(name) | Value::Variable(name) => &name.span,
        }
    }

    /// Whether this value (or anything nested in it) references a variable.
    pub fn contains_variable(&self) -> bool {
        match self {
            Value::Variable(_) => true,
            Value::List { values, .. } => values.iter().any(Value::contains_variable),
            Value::Object { fields, .. } => {
                fields.iter().any(|field| field.value.contains_variable())
            },
            _ => false,
        }
    }
}

/// `name: value` inside an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
    pub value: Value<'src>,
}
