use std::any::Any;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Per-request state handed to access rules and resolvers: host-provided
/// data (an auth principal, a database handle, ...) keyed by its Rust type,
/// and an optional deadline.
///
/// ```
/// use gqlrun_core::SchemaRequestContext;
///
/// struct Principal { user_id: u64 }
///
/// let context = SchemaRequestContext::new()
///     .with_data(Principal { user_id: 7 });
/// assert_eq!(context.data::<Principal>().map(|p| p.user_id), Some(7));
/// ```
#[derive(Clone, Default)]
pub struct SchemaRequestContext {
    data: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    deadline: Option<Instant>,
}

impl SchemaRequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host data of type `D`, if any was attached.
    pub fn data<D: Any + Send + Sync>(&self) -> Option<&D> {
        self.data.get(&TypeId::of::<D>())?.downcast_ref::<D>()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Attaches `data`, replacing any earlier value of the same type.
    pub fn with_data<D: Any + Send + Sync>(mut self, data: D) -> Self {
        self.data.insert(TypeId::of::<D>(), Arc::new(data));
        self
    }

    /// Resolvers still pending at `deadline` are cancelled and reported as
    /// cancellation errors.
    ///
    /// Enforcing a deadline needs the Tokio timer, so a request carrying one
    /// must be executed inside a Tokio runtime. Outside of one the request is
    /// rejected with a single cancellation error and no resolver runs.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the deadline to `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }
}

impl std::fmt::Debug for SchemaRequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRequestContext")
            .field("data_entries", &self.data.len())
            .field("deadline", &self.deadline)
            .finish()
    }
}
