use crate::{Cursor, Error, Result, Target, Value};
use futures::{Stream, TryStreamExt};
use std::{iter::zip, sync::Arc, vec};

/// Shared reference-counted column name list.
pub type RowNames = Arc<[String]>;
/// Owned row value slice matching `RowNames` length.
pub type Row = Box<[Value]>;

fn assign_row(labels: &[String], row: &[Value], targets: &mut [&mut dyn Target]) -> Result<()> {
    if targets.len() != row.len() {
        return Err(Error::msg(format!(
            "Expected {} targets for the row, got {}",
            row.len(),
            targets.len()
        )));
    }
    for ((target, value), label) in zip(zip(targets.iter_mut(), row.iter()), labels) {
        if let Err(e) = target.assign(value.clone()) {
            log::error!("While populating column `{}`: {:#}", label, e);
            return Err(e);
        }
    }
    Ok(())
}

/// Cursor over rows already fetched in memory.
#[derive(Debug)]
pub struct RowsCursor {
    labels: RowNames,
    rows: vec::IntoIter<Row>,
    current: Option<Row>,
}

impl RowsCursor {
    pub fn new(labels: RowNames, rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            labels,
            rows: rows.into_iter().collect::<Vec<_>>().into_iter(),
            current: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(Arc::new([]), Vec::new())
    }

    /// Rows not yet reached by `advance`.
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl Cursor for RowsCursor {
    fn columns(&self) -> &[String] {
        &self.labels
    }

    async fn advance(&mut self) -> Result<bool> {
        self.current = self.rows.next();
        Ok(self.current.is_some())
    }

    fn populate(&mut self, targets: &mut [&mut dyn Target]) -> Result<()> {
        let Some(row) = &self.current else {
            return Err(Error::msg("Cannot populate targets without a current row"));
        };
        assign_row(&self.labels, row, targets)
    }
}

/// Cursor over a stream of rows, for drivers producing them asynchronously.
pub struct StreamCursor<S> {
    labels: RowNames,
    stream: S,
    current: Option<Row>,
}

impl<S> StreamCursor<S>
where
    S: Stream<Item = Result<Row>> + Send + Unpin,
{
    pub fn new(labels: RowNames, stream: S) -> Self {
        Self {
            labels,
            stream,
            current: None,
        }
    }
}

impl<S> Cursor for StreamCursor<S>
where
    S: Stream<Item = Result<Row>> + Send + Unpin,
{
    fn columns(&self) -> &[String] {
        &self.labels
    }

    async fn advance(&mut self) -> Result<bool> {
        self.current = self.stream.try_next().await?;
        Ok(self.current.is_some())
    }

    fn populate(&mut self, targets: &mut [&mut dyn Target]) -> Result<()> {
        let Some(row) = &self.current else {
            return Err(Error::msg("Cannot populate targets without a current row"));
        };
        assign_row(&self.labels, row, targets)
    }
}
