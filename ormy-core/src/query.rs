use crate::{
    Cursor, Destination, Error, Executor, ParameterBinder, Registry, Result, ResultMapper, Shape,
    Value, destination::check_shape, truncate_long,
};

/// A bound statement waiting to be executed, or the error binding produced.
///
/// Binding errors are kept here and only surface once [`Fetch::one`],
/// [`Fetch::all`] or [`Fetch::execute`] is awaited. In that case nothing is
/// sent to the executor and the error is returned as it was recorded.
#[must_use = "a fetch does nothing until one, all or execute is awaited"]
pub struct Fetch<'o, E: Executor> {
    executor: &'o E,
    registry: &'o Registry,
    statement: Result<String>,
}

impl<'o, E: Executor> Fetch<'o, E> {
    pub(crate) fn new(executor: &'o E, registry: &'o Registry, statement: Result<String>) -> Self {
        if let Err(e) = &statement {
            log::debug!("Binding failed: {e}");
        }
        Self {
            executor,
            registry,
            statement,
        }
    }

    /// The bound statement text, or the binding error.
    pub fn statement(&self) -> std::result::Result<&str, &Error> {
        self.statement.as_deref()
    }

    pub fn error(&self) -> Option<&Error> {
        self.statement.as_ref().err()
    }

    pub fn into_statement(self) -> Result<String> {
        self.statement
    }

    /// Executes the statement and populates a single record, the last row
    /// wins. Returns the number of rows read.
    pub async fn one<D: Destination>(self, destination: &mut D) -> Result<usize> {
        self.materialize(destination, Shape::Single).await
    }

    /// Executes the statement and appends one record per row.
    pub async fn all<D: Destination>(self, destination: &mut D) -> Result<usize> {
        self.materialize(destination, Shape::Collection).await
    }

    /// Executes the statement discarding the rows, returns how many there were.
    pub async fn execute(self) -> Result<usize> {
        let mut cursor = self.run().await?;
        let mut rows = 0;
        while cursor.advance().await? {
            rows += 1;
        }
        Ok(rows)
    }

    async fn run(self) -> Result<E::Cursor> {
        let statement = self.statement?;
        log::debug!("Executing: {}", truncate_long!(statement));
        self.executor.execute(statement).await
    }

    async fn materialize<D: Destination>(self, destination: &mut D, expected: Shape) -> Result<usize> {
        if self.statement.is_ok() {
            check_shape::<D>(expected)?;
        }
        let registry = self.registry;
        let mut cursor = self.run().await?;
        ResultMapper::new(registry.field_maps())
            .materialize(&mut cursor, destination, expected)
            .await
    }
}

/// A statement with `:name` placeholders collecting its parameters by name.
#[must_use = "a query does nothing until it is bound and fetched"]
pub struct NamedQuery<'o, E: Executor> {
    executor: &'o E,
    registry: &'o Registry,
    statement: String,
    params: Vec<(String, Value)>,
}

impl<'o, E: Executor> NamedQuery<'o, E> {
    pub(crate) fn new(executor: &'o E, registry: &'o Registry, statement: String) -> Self {
        Self {
            executor,
            registry,
            statement,
            params: Vec::new(),
        }
    }

    /// Adds the parameter for `:name`, the name may include the colon.
    /// Adding the same name again replaces the value. Colons inside `'...'`
    /// literals of the statement are not placeholders.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut name = name.into();
        if name.starts_with(':') {
            name.remove(0);
        }
        let value = value.into();
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some(param) => param.1 = value,
            None => self.params.push((name, value)),
        }
        self
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn params(&self) -> &[(String, Value)] {
        &self.params
    }

    pub fn bind(self) -> Fetch<'o, E> {
        let bound = ParameterBinder::new(self.registry.binder())
            .bind_named(&self.statement, &self.params);
        Fetch::new(self.executor, self.registry, bound)
    }

    pub async fn one<D: Destination>(self, destination: &mut D) -> Result<usize> {
        self.bind().one(destination).await
    }

    pub async fn all<D: Destination>(self, destination: &mut D) -> Result<usize> {
        self.bind().all(destination).await
    }

    pub async fn execute(self) -> Result<usize> {
        self.bind().execute().await
    }
}
