use crate::{Result, Target};
use std::{future::Future, sync::Arc};

/// The driver side of the boundary: runs a fully bound statement.
///
/// Executors are shared between concurrent queries, hence `&self`.
pub trait Executor: Send + Sync {
    type Cursor: Cursor;

    /// Execute the statement and return a cursor over its result rows.
    fn execute(&self, statement: String) -> impl Future<Output = Result<Self::Cursor>> + Send;
}

/// Forward-only cursor over the rows produced by [`Executor::execute`].
pub trait Cursor: Send {
    /// Column names, in the order values are handed to [`Cursor::populate`].
    fn columns(&self) -> &[String];

    /// Move to the next row, returns false once the rows are exhausted.
    fn advance(&mut self) -> impl Future<Output = Result<bool>> + Send;

    /// Assign the current row's values to `targets`, one target per column.
    fn populate(&mut self, targets: &mut [&mut dyn Target]) -> Result<()>;
}

impl<E: Executor> Executor for Arc<E> {
    type Cursor = E::Cursor;

    fn execute(&self, statement: String) -> impl Future<Output = Result<Self::Cursor>> + Send {
        E::execute(self, statement)
    }
}

impl<E: Executor> Executor for &E {
    type Cursor = E::Cursor;

    fn execute(&self, statement: String) -> impl Future<Output = Result<Self::Cursor>> + Send {
        E::execute(self, statement)
    }
}
