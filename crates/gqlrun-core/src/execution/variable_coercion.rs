use crate::execution::ErrorKind;
use crate::execution::GraphQLError;
use crate::execution::Variables;
use crate::schema::Schema;
use crate::types::NamedTypeAnnotation;
use crate::types::ScalarKind;
use crate::types::TypeAnnotation;
use crate::value::InputValue;
use crate::value::ScalarValue;
use gqlrun_parser::ast;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, String>;

/// The operation's declared variables and the values they were coerced to.
/// A declared variable with no value (nullable, not supplied, no default) is
/// declared but absent.
#[derive(Debug, Default)]
pub(crate) struct CoercedVariables<'a> {
    declared: HashSet<&'a str>,
    values: IndexMap<String, InputValue>,
}

pub(crate) enum VariableLookup<'v> {
    Absent,
    Undeclared,
    Value(&'v InputValue),
}

impl<'a> CoercedVariables<'a> {
    pub(crate) fn get(&self, name: &str) -> VariableLookup<'_> {
        match self.values.get(name) {
            Some(value) => VariableLookup::Value(value),
            None if self.declared.contains(name) => VariableLookup::Absent,
            None => VariableLookup::Undeclared,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}

/// Coerces `raw` against the operation's variable definitions. Every
/// problem is reported, not just the first.
pub(crate) fn coerce_variable_values<'a>(
    schema: &Schema,
    operation: &'a ast::OperationDefinition<'a>,
    raw: &Variables,
) -> std::result::Result<CoercedVariables<'a>, Vec<GraphQLError>> {
    let mut coerced = CoercedVariables::default();
    let mut errors = vec![];
    let no_variables = CoercedVariables::default();

    for var_def in &operation.variable_definitions {
        let name = var_def.name.as_str();
        coerced.declared.insert(name);
        let var_type = TypeAnnotation::from_ast(&var_def.var_type, schema);
        let error = |message: String| {
            GraphQLError::new(ErrorKind::Validation, message).at(&var_def.span)
        };

        let innermost = var_type.innermost_named_type_annotation();
        if !innermost.is_scalar() && !innermost.is_enum() {
            errors.push(error(format!(
                "Variable `${name}` has type `{var_type}`, but variables must be \
                scalars, enums, or lists of those",
            )));
            continue;
        }

        let value = match (raw.get(name), &var_def.default_value) {
            (Some(raw_value), _) => coerce_json(schema, raw_value, &var_type),
            (None, Some(default)) => {
                coerce_literal(schema, default, &var_type, &no_variables)
            },
            (None, None) if !var_type.nullable() => {
                errors.push(error(format!(
                    "Variable `${name}` of required type `{var_type}` was not provided",
                )));
                continue;
            },
            (None, None) => continue,
        };
        match value {
            Ok(value) => {
                coerced.values.insert(name.to_string(), value);
            },
            Err(message) => errors.push(error(format!(
                "Variable `${name}` got an invalid value: {message}",
            ))),
        }
    }

    if errors.is_empty() {
        Ok(coerced)
    } else {
        Err(errors)
    }
}

/// A leaf value from any of the three sources values are coerced from.
enum Leaf<'v> {
    Boolean(bool),
    Enum(&'v str),
    Float(f64),
    Int(i64),
    String(&'v str),
    Unsupported(&'static str),
}

impl Leaf<'_> {
    fn describe(&self) -> String {
        match self {
            Leaf::Boolean(b) => format!("the boolean {b}"),
            Leaf::Enum(entry) => format!("the enum value {entry}"),
            Leaf::Float(f) => format!("the float {f}"),
            Leaf::Int(i) => format!("the integer {i}"),
            Leaf::String(s) => format!("the string {s:?}"),
            Leaf::Unsupported(what) => what.to_string(),
        }
    }
}

fn coerce_leaf(
    schema: &Schema,
    named: &NamedTypeAnnotation,
    leaf: Leaf<'_>,
) -> Result<InputValue> {
    if let Some(kind) = named.scalar_kind() {
        let scalar = match (kind, leaf) {
            (ScalarKind::Boolean, Leaf::Boolean(b)) => ScalarValue::Boolean(b),
            (ScalarKind::Int, Leaf::Int(i)) => ScalarValue::Int(
                i32::try_from(i).map_err(|_| format!("{i} does not fit in an Int"))?,
            ),
            (ScalarKind::Long, Leaf::Int(i)) => ScalarValue::Long(i),
            (ScalarKind::Float, Leaf::Int(i)) => ScalarValue::Float(int_to_f32(i)?),
            (ScalarKind::Float, Leaf::Float(f)) => ScalarValue::Float(float_to_f32(f)?),
            (ScalarKind::Double, Leaf::Int(i)) => ScalarValue::Double(i as f64),
            (ScalarKind::Double, Leaf::Float(f)) => ScalarValue::Double(f),
            (ScalarKind::String, Leaf::String(s)) => ScalarValue::String(s.to_string()),
            (kind, leaf) => {
                return Err(format!("expected {kind}, found {}", leaf.describe()));
            },
        };
        return Ok(InputValue::Scalar(scalar));
    }

    if let Some(enum_def) = schema.enum_definition(named.name()) {
        return match leaf {
            Leaf::Enum(entry) | Leaf::String(entry) if enum_def.contains(entry) => {
                Ok(InputValue::Enum(entry.to_string()))
            },
            Leaf::Enum(entry) | Leaf::String(entry) => Err(format!(
                "`{entry}` is not a member of enum `{}`",
                enum_def.name(),
            )),
            other => Err(format!(
                "expected a member of enum `{}`, found {}",
                enum_def.name(),
                other.describe(),
            )),
        };
    }

    Err(format!("`{}` is not an input type", named.name()))
}

/// Integers convert to `Float` only when `f32` represents them exactly.
fn int_to_f32(i: i64) -> Result<f32> {
    let f = i as f32;
    if f as i128 == i128::from(i) {
        Ok(f)
    } else {
        Err(format!("{i} does not fit in a Float"))
    }
}

/// Rejects values whose magnitude overflows `f32`. Rounding the fraction is
/// accepted, as it is for any float literal.
fn float_to_f32(f: f64) -> Result<f32> {
    let narrowed = f as f32;
    if narrowed.is_finite() {
        Ok(narrowed)
    } else {
        Err(format!("{f} does not fit in a Float"))
    }
}

fn null_for(type_annotation: &TypeAnnotation) -> Result<InputValue> {
    if type_annotation.nullable() {
        Ok(InputValue::Null)
    } else {
        Err(format!("expected a non-null value of type `{type_annotation}`, found null"))
    }
}

/// Coerces a raw JSON variable value.
pub(crate) fn coerce_json(
    schema: &Schema,
    value: &serde_json::Value,
    type_annotation: &TypeAnnotation,
) -> Result<InputValue> {
    use serde_json::Value;

    if value.is_null() {
        return null_for(type_annotation);
    }
    match type_annotation {
        TypeAnnotation::List(list) => {
            let inner = list.inner_type_annotation();
            match value {
                Value::Array(items) => items
                    .iter()
                    .map(|item| coerce_json(schema, item, inner))
                    .collect::<Result<Vec<_>>>()
                    .map(InputValue::List),
                single => Ok(InputValue::List(vec![coerce_json(schema, single, inner)?])),
            }
        },
        TypeAnnotation::Named(named) => {
            let leaf = match value {
                Value::Bool(b) => Leaf::Boolean(*b),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => Leaf::Int(i),
                    None => n.as_f64().map_or(Leaf::Unsupported("a number"), Leaf::Float),
                },
                Value::String(s) => Leaf::String(s),
                Value::Array(_) => Leaf::Unsupported("a list"),
                Value::Object(_) => Leaf::Unsupported("an object"),
                Value::Null => return null_for(type_annotation),
            };
            coerce_leaf(schema, named, leaf)
        },
    }
}

/// Coerces an already-coerced value (a variable substituted into an
/// argument) to the argument's declared type.
pub(crate) fn coerce_input(
    schema: &Schema,
    value: &InputValue,
    type_annotation: &TypeAnnotation,
) -> Result<InputValue> {
    if value.is_null() {
        return null_for(type_annotation);
    }
    match type_annotation {
        TypeAnnotation::List(list) => {
            let inner = list.inner_type_annotation();
            match value {
                InputValue::List(items) => items
                    .iter()
                    .map(|item| coerce_input(schema, item, inner))
                    .collect::<Result<Vec<_>>>()
                    .map(InputValue::List),
                single => Ok(InputValue::List(vec![coerce_input(schema, single, inner)?])),
            }
        },
        TypeAnnotation::Named(named) => {
            let leaf = match value {
                InputValue::Enum(entry) => Leaf::Enum(entry),
                InputValue::List(_) => Leaf::Unsupported("a list"),
                InputValue::Null => return null_for(type_annotation),
                InputValue::Scalar(ScalarValue::Boolean(b)) => Leaf::Boolean(*b),
                InputValue::Scalar(ScalarValue::Double(d)) => Leaf::Float(*d),
                InputValue::Scalar(ScalarValue::Float(f)) => Leaf::Float((*f).into()),
                InputValue::Scalar(ScalarValue::Int(i)) => Leaf::Int((*i).into()),
                InputValue::Scalar(ScalarValue::Long(l)) => Leaf::Int(*l),
                InputValue::Scalar(ScalarValue::String(s)) => Leaf::String(s),
            };
            coerce_leaf(schema, named, leaf)
        },
    }
}

/// Coerces a literal from the request document, substituting variables
/// from `variables`.
pub(crate) fn coerce_literal(
    schema: &Schema,
    value: &ast::Value<'_>,
    type_annotation: &TypeAnnotation,
    variables: &CoercedVariables<'_>,
) -> Result<InputValue> {
    use ast::Value;

    match value {
        Value::Variable(name) => match variables.get(name.as_str()) {
            VariableLookup::Value(value) => coerce_input(schema, value, type_annotation),
            VariableLookup::Absent => null_for(type_annotation),
            VariableLookup::Undeclared => Err(format!(
                "variable `${name}` is not defined by the operation",
            )),
        },
        Value::Null { .. } => null_for(type_annotation),
        Value::List { values, .. } => match type_annotation {
            TypeAnnotation::List(list) => values
                .iter()
                .map(|item| coerce_literal(schema, item, list.inner_type_annotation(), variables))
                .collect::<Result<Vec<_>>>()
                .map(InputValue::List),
            TypeAnnotation::Named(named) => {
                coerce_leaf(schema, named, Leaf::Unsupported("a list"))
            },
        },
        single => match type_annotation {
            TypeAnnotation::List(list) => Ok(InputValue::List(vec![coerce_literal(
                schema,
                single,
                list.inner_type_annotation(),
                variables,
            )?])),
            TypeAnnotation::Named(named) => {
                let leaf = match single {
                    Value::Boolean { value, .. } => Leaf::Boolean(*value),
                    Value::Enum(name) => Leaf::Enum(name.as_str()),
                    Value::Float { value, .. } => Leaf::Float(*value),
                    Value::Int { value, .. } => Leaf::Int(*value),
                    Value::String { value, .. } => Leaf::String(value),
                    Value::Object { .. } => Leaf::Unsupported("an input object"),
                    Value::List { .. } | Value::Null { .. } | Value::Variable(_) => {
                        Leaf::Unsupported("a nested value")
                    },
                };
                coerce_leaf(schema, named, leaf)
            },
        },
    }
}
