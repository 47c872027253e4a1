use crate::execution::FieldError;
use crate::execution::SchemaRequestContext;
use crate::value::FromInputValue;
use crate::value::InputValue;
use indexmap::IndexMap;
use std::any::Any;
use std::sync::Arc;

/// What a resolver receives besides its owning instance: the field's bound
/// arguments and the request context.
#[derive(Clone, Debug)]
pub struct ResolverContext {
    arguments: IndexMap<String, InputValue>,
    request: Arc<SchemaRequestContext>,
}

impl ResolverContext {
    pub(crate) fn new(
        arguments: IndexMap<String, InputValue>,
        request: Arc<SchemaRequestContext>,
    ) -> Self {
        Self { arguments, request }
    }

    /// Reads argument `name` as a `T`.
    ///
    /// Absent arguments read as `null`, so nullable arguments should be read
    /// as `Option<_>`.
    pub fn argument<T: FromInputValue>(&self, name: &str) -> Result<T, FieldError> {
        let converted = match self.arguments.get(name) {
            Some(value) => T::from_input_value(value),
            None => T::from_input_value(&InputValue::Null),
        };
        converted.ok_or_else(|| FieldError::new(format!(
            "argument `{name}` cannot be read as `{}`",
            std::any::type_name::<T>(),
        )))
    }

    /// Every argument that was supplied (or defaulted), in declaration order.
    pub fn arguments(&self) -> &IndexMap<String, InputValue> {
        &self.arguments
    }

    /// Shorthand for `self.request().data::<D>()`.
    pub fn data<D: Any + Send + Sync>(&self) -> Option<&D> {
        self.request.data::<D>()
    }

    pub fn request(&self) -> &SchemaRequestContext {
        &self.request
    }
}
