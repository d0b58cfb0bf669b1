use crate::{Error, Result, Value};
use std::{any, borrow::Cow};

/// Conversion between native Rust types and the dynamically typed [`Value`].
///
/// It is used in both directions: parameters are turned into values before
/// being rendered into a statement, and row values are turned back into the
/// field types of a record while it is being populated.
///
/// # Conversion contract
/// - `as_value` never fails and never loses information.
/// - `try_from_value` accepts the canonical variant of the type and, for
///   numeric types, every other numeric width provided the value fits. Out of
///   range values are an error, never silently truncated. An integer read
///   into a float fits only when the float holds it exactly.
/// - NULL values are only accepted by `Option<T>`.
///
/// # Examples
/// ```rust
/// use ormy_core::{AsValue, Value};
/// let v = 42i32.as_value();
/// assert_eq!(v, Value::Int32(Some(42)));
/// let n: i64 = AsValue::try_from_value(v).unwrap();
/// assert_eq!(n, 42);
/// ```
pub trait AsValue {
    /// The NULL of this type.
    fn as_empty_value() -> Value;
    fn as_value(self) -> Value;
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

fn conversion_error<T>(value: &Value) -> Error {
    Error::Conversion(format!(
        "Cannot convert {value:?} to {}",
        any::type_name::<T>(),
    ))
}

fn range_error<T>(value: &Value) -> Error {
    Error::Conversion(format!(
        "Value {value:?} is out of range for {}",
        any::type_name::<T>(),
    ))
}

macro_rules! impl_as_value_integer {
    ($source:ty, $destination:path) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                let converted = match &value {
                    Value::Int8(Some(v)) => <$source>::try_from(*v).ok(),
                    Value::Int16(Some(v)) => <$source>::try_from(*v).ok(),
                    Value::Int32(Some(v)) => <$source>::try_from(*v).ok(),
                    Value::Int64(Some(v)) => <$source>::try_from(*v).ok(),
                    Value::Int128(Some(v)) => <$source>::try_from(*v).ok(),
                    Value::UInt8(Some(v)) => <$source>::try_from(*v).ok(),
                    Value::UInt16(Some(v)) => <$source>::try_from(*v).ok(),
                    Value::UInt32(Some(v)) => <$source>::try_from(*v).ok(),
                    Value::UInt64(Some(v)) => <$source>::try_from(*v).ok(),
                    Value::UInt128(Some(v)) => <$source>::try_from(*v).ok(),
                    Value::Boolean(Some(v)) => Some(*v as $source),
                    _ => return Err(conversion_error::<Self>(&value)),
                };
                converted.ok_or_else(|| range_error::<Self>(&value))
            }
        }
    };
}

impl_as_value_integer!(i8, Value::Int8);
impl_as_value_integer!(i16, Value::Int16);
impl_as_value_integer!(i32, Value::Int32);
impl_as_value_integer!(i64, Value::Int64);
impl_as_value_integer!(i128, Value::Int128);
impl_as_value_integer!(u8, Value::UInt8);
impl_as_value_integer!(u16, Value::UInt16);
impl_as_value_integer!(u32, Value::UInt32);
impl_as_value_integer!(u64, Value::UInt64);
impl_as_value_integer!(u128, Value::UInt128);

/// 2^127, the first float past `i128::MAX`.
const I128_END: f64 = 170141183460469231731687303715884105728.0;

/// `Some(f)` when the integer `v` is exactly `f`.
fn exact_signed<F: Into<f64> + Copy>(v: i128, f: F) -> Option<F> {
    let wide: f64 = f.into();
    (wide < I128_END && wide as i128 == v).then_some(f)
}

fn exact_unsigned<F: Into<f64> + Copy>(v: u128, f: F) -> Option<F> {
    let wide: f64 = f.into();
    (wide < I128_END * 2.0 && wide as u128 == v).then_some(f)
}

macro_rules! impl_as_value_float {
    ($source:ty, $destination:path) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                let converted = match &value {
                    Value::Float32(Some(v)) => Some(*v as $source),
                    Value::Float64(Some(v)) => {
                        let f = *v as $source;
                        (!v.is_finite() || f.is_finite()).then_some(f)
                    }
                    Value::Int8(Some(v)) => exact_signed(*v as i128, *v as $source),
                    Value::Int16(Some(v)) => exact_signed(*v as i128, *v as $source),
                    Value::Int32(Some(v)) => exact_signed(*v as i128, *v as $source),
                    Value::Int64(Some(v)) => exact_signed(*v as i128, *v as $source),
                    Value::Int128(Some(v)) => exact_signed(*v, *v as $source),
                    Value::UInt8(Some(v)) => exact_unsigned(*v as u128, *v as $source),
                    Value::UInt16(Some(v)) => exact_unsigned(*v as u128, *v as $source),
                    Value::UInt32(Some(v)) => exact_unsigned(*v as u128, *v as $source),
                    Value::UInt64(Some(v)) => exact_unsigned(*v as u128, *v as $source),
                    Value::UInt128(Some(v)) => exact_unsigned(*v, *v as $source),
                    _ => return Err(conversion_error::<Self>(&value)),
                };
                converted.ok_or_else(|| range_error::<Self>(&value))
            }
        }
    };
}

impl_as_value_float!(f32, Value::Float32);
impl_as_value_float!(f64, Value::Float64);

impl AsValue for bool {
    fn as_empty_value() -> Value {
        Value::Boolean(None)
    }
    fn as_value(self) -> Value {
        Value::Boolean(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(Some(v)) => Ok(v),
            Value::Int8(Some(v)) => Ok(v != 0),
            Value::Int16(Some(v)) => Ok(v != 0),
            Value::Int32(Some(v)) => Ok(v != 0),
            Value::Int64(Some(v)) => Ok(v != 0),
            Value::Int128(Some(v)) => Ok(v != 0),
            Value::UInt8(Some(v)) => Ok(v != 0),
            Value::UInt16(Some(v)) => Ok(v != 0),
            Value::UInt32(Some(v)) => Ok(v != 0),
            Value::UInt64(Some(v)) => Ok(v != 0),
            Value::UInt128(Some(v)) => Ok(v != 0),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for String {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Varchar(Some(v)) => Ok(v),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for Cow<'static, str> {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.into_owned()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        String::try_from_value(value).map(Cow::Owned)
    }
}

impl AsValue for Box<[u8]> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Blob(Some(v)) => Ok(v),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for Vec<u8> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self.into_boxed_slice()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Box::<[u8]>::try_from_value(value).map(Into::into)
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(None);
        }
        T::try_from_value(value).map(Some)
    }
}

impl<T: AsValue> AsValue for Box<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        (*self).as_value()
    }
    fn try_from_value(value: Value) -> Result<Self> {
        T::try_from_value(value).map(Box::new)
    }
}
