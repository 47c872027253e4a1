/// A failure reported by a resolver.
///
/// Any [`std::error::Error`] converts into a `FieldError` so resolvers can use
/// `?` on their own fallible calls.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl<E: std::error::Error> From<E> for FieldError {
    fn from(err: E) -> Self {
        Self::new(err.to_string())
    }
}
