use crate::types::ScalarKind;

/// A value of one of the built-in scalar types.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Boolean(bool),
    Double(f64),
    Float(f32),
    Int(i32),
    Long(i64),
    String(String),
}

impl ScalarValue {
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Boolean(_) => ScalarKind::Boolean,
            ScalarValue::Double(_) => ScalarKind::Double,
            ScalarValue::Float(_) => ScalarKind::Float,
            ScalarValue::Int(_) => ScalarKind::Int,
            ScalarValue::Long(_) => ScalarKind::Long,
            ScalarValue::String(_) => ScalarKind::String,
        }
    }
}

impl std::fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarValue::Boolean(b) => write!(f, "{b}"),
            ScalarValue::Double(d) => write!(f, "{d}"),
            ScalarValue::Float(fl) => write!(f, "{fl}"),
            ScalarValue::Int(i) => write!(f, "{i}"),
            ScalarValue::Long(l) => write!(f, "{l}"),
            ScalarValue::String(s) => write!(f, "{s:?}"),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ScalarValue {
                fn from(value: $ty) -> Self {
                    ScalarValue::$variant(value.into())
                }
            }
        )*
    };
}

impl_from_primitive! {
    bool => Boolean,
    f32 => Float,
    f64 => Double,
    i32 => Int,
    i64 => Long,
    String => String,
    &str => String,
}
