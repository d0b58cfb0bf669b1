use ormy_core::{Error, Result, Value};
use rusqlite::types::ValueRef;

pub(crate) fn extract_value(value: ValueRef<'_>) -> Result<Value> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Int64(Some(v)),
        ValueRef::Real(v) => Value::Float64(Some(v)),
        ValueRef::Text(v) => Value::Varchar(Some(
            std::str::from_utf8(v).map_err(Error::driver)?.to_owned(),
        )),
        ValueRef::Blob(v) => Value::Blob(Some(v.into())),
    })
}
