use crate::value::GraphQLEnum;
use crate::value::ScalarValue;
use std::any::Any;
use std::sync::Arc;

/// A shared handle to an instance of some registered object type.
pub type ObjectRef = Arc<dyn Any + Send + Sync>;

/// What a resolver produces. The executor shapes it into a
/// [`ResponseValue`](crate::value::ResponseValue) according to the field's
/// declared type.
#[derive(Clone, Debug)]
pub enum ResolvedValue {
    /// The name of an enum entry.
    Enum(String),
    List(Vec<ResolvedValue>),
    Null,
    /// An instance of a registered object type. The concrete Rust type must
    /// be the one the declared GraphQL type was registered with.
    Object(ObjectRef),
    Scalar(ScalarValue),
}

impl ResolvedValue {
    pub fn enum_entry(value: impl GraphQLEnum) -> Self {
        ResolvedValue::Enum(value.entry_name().to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ResolvedValue::Null)
    }

    /// Wraps `value` as an object instance.
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        ResolvedValue::Object(Arc::new(value))
    }

    /// Wraps an already-shared object instance without copying it.
    pub fn shared_object<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        ResolvedValue::Object(value)
    }
}

impl From<ScalarValue> for ResolvedValue {
    fn from(value: ScalarValue) -> Self {
        ResolvedValue::Scalar(value)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ResolvedValue {
                fn from(value: $ty) -> Self {
                    ResolvedValue::Scalar(value.into())
                }
            }
        )*
    };
}

impl_from_scalar!(bool, f32, f64, i32, i64, String, &str);

impl<T: Into<ResolvedValue>> From<Option<T>> for ResolvedValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ResolvedValue::Null, Into::into)
    }
}

impl<T: Into<ResolvedValue>> From<Vec<T>> for ResolvedValue {
    fn from(values: Vec<T>) -> Self {
        ResolvedValue::List(values.into_iter().map(Into::into).collect())
    }
}
