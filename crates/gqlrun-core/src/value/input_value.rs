use crate::value::ScalarValue;

/// A coerced argument or variable value.
///
/// By the time a resolver sees an `InputValue` it already conforms to the
/// declared argument type: scalars have the declared kind and enum entries
/// are known members of the declared enum.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum InputValue {
    Enum(String),
    List(Vec<InputValue>),
    Null,
    Scalar(ScalarValue),
}

impl InputValue {
    pub fn as_enum_entry(&self) -> Option<&str> {
        match self {
            InputValue::Enum(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            InputValue::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, InputValue::Null)
    }
}

/// Conversion from a coerced [`InputValue`] into a Rust value, used by
/// [`ResolverContext::argument`](crate::ResolverContext::argument).
///
/// Returns `None` when the value has a different shape than `Self`.
pub trait FromInputValue: Sized {
    fn from_input_value(value: &InputValue) -> Option<Self>;
}

impl FromInputValue for InputValue {
    fn from_input_value(value: &InputValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromInputValue for bool {
    fn from_input_value(value: &InputValue) -> Option<Self> {
        match value.as_scalar()? {
            ScalarValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromInputValue for i32 {
    fn from_input_value(value: &InputValue) -> Option<Self> {
        match value.as_scalar()? {
            ScalarValue::Int(i) => Some(*i),
            ScalarValue::Long(l) => i32::try_from(*l).ok(),
            _ => None,
        }
    }
}

impl FromInputValue for i64 {
    fn from_input_value(value: &InputValue) -> Option<Self> {
        match value.as_scalar()? {
            ScalarValue::Int(i) => Some((*i).into()),
            ScalarValue::Long(l) => Some(*l),
            _ => None,
        }
    }
}

impl FromInputValue for f32 {
    fn from_input_value(value: &InputValue) -> Option<Self> {
        match value.as_scalar()? {
            ScalarValue::Float(f) => Some(*f),
            ScalarValue::Int(i) => Some(*i as f32),
            _ => None,
        }
    }
}

impl FromInputValue for f64 {
    fn from_input_value(value: &InputValue) -> Option<Self> {
        match value.as_scalar()? {
            ScalarValue::Double(d) => Some(*d),
            ScalarValue::Float(f) => Some((*f).into()),
            ScalarValue::Int(i) => Some((*i).into()),
            _ => None,
        }
    }
}

/// Accepts both strings and enum entry names.
impl FromInputValue for String {
    fn from_input_value(value: &InputValue) -> Option<Self> {
        match value {
            InputValue::Scalar(ScalarValue::String(s)) => Some(s.clone()),
            InputValue::Enum(entry) => Some(entry.clone()),
            _ => None,
        }
    }
}

impl<T: FromInputValue> FromInputValue for Option<T> {
    fn from_input_value(value: &InputValue) -> Option<Self> {
        match value {
            InputValue::Null => Some(None),
            other => T::from_input_value(other).map(Some),
        }
    }
}

impl<T: FromInputValue> FromInputValue for Vec<T> {
    fn from_input_value(value: &InputValue) -> Option<Self> {
        match value {
            InputValue::List(items) => items.iter().map(T::from_input_value).collect(),
            _ => None,
        }
    }
}
