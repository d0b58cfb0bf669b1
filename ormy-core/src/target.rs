use crate::{AsValue, Result, Value};

/// A writable slot receiving one column value while a row is populated.
pub trait Target {
    fn assign(&mut self, value: Value) -> Result<()>;
}

impl<T: AsValue> Target for T {
    fn assign(&mut self, value: Value) -> Result<()> {
        *self = T::try_from_value(value)?;
        Ok(())
    }
}

/// Accepts any value and drops it. Stands in for columns without a field.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ignored;

impl Target for Ignored {
    fn assign(&mut self, _value: Value) -> Result<()> {
        Ok(())
    }
}
