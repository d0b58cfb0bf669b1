use crate::{Error, Record, Result};
use std::{
    collections::VecDeque,
    fmt::{self, Display},
};

/// Whether a destination holds one record or a growable collection of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Single,
    Collection,
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Single => "single record",
            Shape::Collection => "collection",
        })
    }
}

/// Something rows can be materialized into.
pub trait Destination: Send {
    type Record: Record;
    const SHAPE: Shape;

    /// Hands out the record the next row is populated into. A single record
    /// is reused for every row, a collection appends a fresh record once
    /// `fill` succeeds.
    fn accept_row<F>(&mut self, fill: F) -> Result<()>
    where
        F: FnOnce(&mut Self::Record) -> Result<()>;
}

pub(crate) fn check_shape<D: Destination>(expected: Shape) -> Result<()> {
    if D::SHAPE != expected {
        return Err(Error::ShapeMismatch {
            expected,
            actual: D::SHAPE,
        });
    }
    Ok(())
}

impl<R: Record> Destination for R {
    type Record = R;
    const SHAPE: Shape = Shape::Single;

    fn accept_row<F>(&mut self, fill: F) -> Result<()>
    where
        F: FnOnce(&mut R) -> Result<()>,
    {
        fill(self)
    }
}

impl<R: Record> Destination for Vec<R> {
    type Record = R;
    const SHAPE: Shape = Shape::Collection;

    fn accept_row<F>(&mut self, fill: F) -> Result<()>
    where
        F: FnOnce(&mut R) -> Result<()>,
    {
        let mut record = R::default();
        fill(&mut record)?;
        self.push(record);
        Ok(())
    }
}

impl<R: Record> Destination for VecDeque<R> {
    type Record = R;
    const SHAPE: Shape = Shape::Collection;

    fn accept_row<F>(&mut self, fill: F) -> Result<()>
    where
        F: FnOnce(&mut R) -> Result<()>,
    {
        let mut record = R::default();
        fill(&mut record)?;
        self.push_back(record);
        Ok(())
    }
}
