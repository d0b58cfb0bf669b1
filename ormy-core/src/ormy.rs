use crate::{Executor, Fetch, NamedQuery, ParameterBinder, Registry, Value};
use std::sync::Arc;

/// Entry point binding statements and materializing their rows.
///
/// One instance is usually created per connection and shared by reference
/// between concurrent callers. Instances created with the same
/// [`Registry`] share renderers and field maps.
///
/// ```rust,ignore
/// let ormy = Ormy::new(connection);
/// let mut thing = Thing::default();
/// ormy.select("SELECT col, $1 two FROM tmp", params!["Two"])
///     .one(&mut thing)
///     .await?;
/// ```
pub struct Ormy<E: Executor> {
    executor: E,
    registry: Arc<Registry>,
}

impl<E: Executor> Ormy<E> {
    pub fn new(executor: E) -> Self {
        Self::with_registry(executor, Registry::new().shared())
    }

    pub fn with_registry(executor: E, registry: Arc<Registry>) -> Self {
        Self { executor, registry }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Binds `$1`, `$2`, ... to `params` in order.
    pub fn select<P>(&self, statement: impl AsRef<str>, params: P) -> Fetch<'_, E>
    where
        P: IntoIterator<Item = Value>,
    {
        let params = params.into_iter().collect::<Vec<_>>();
        let bound =
            ParameterBinder::new(self.registry.binder()).bind_ordinal(statement.as_ref(), &params);
        Fetch::new(&self.executor, &self.registry, bound)
    }

    /// Starts a statement with named placeholders, see [`NamedQuery::param`].
    pub fn query(&self, statement: impl Into<String>) -> NamedQuery<'_, E> {
        NamedQuery::new(&self.executor, &self.registry, statement.into())
    }
}
