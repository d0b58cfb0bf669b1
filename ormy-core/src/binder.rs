use crate::{Error, Result, Value, ValueKind};
use std::{
    collections::HashMap,
    fmt::{self, Debug, Write},
    sync::{Arc, PoisonError, RwLock},
};

/// Writes the SQL literal of a value into the output buffer.
pub type Renderer = Arc<dyn Fn(&mut String, &Value) -> Result<()> + Send + Sync>;

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

macro_rules! write_float {
    ($out:ident, $value:expr) => {{
        let value = $value;
        if value.is_finite() {
            let _ = write!($out, "{:.6}", value);
        } else {
            let literal = if value.is_nan() {
                "NaN"
            } else if value.is_sign_negative() {
                "-inf"
            } else {
                "inf"
            };
            let _ = write!($out, "CAST('{literal}' AS REAL)");
        }
    }};
}

fn write_null(out: &mut String) {
    out.push_str("NULL");
}

/// Decimal rendering shared by every integer width.
pub fn write_integer(out: &mut String, value: &Value) -> Result<()> {
    match value {
        Value::Int8(Some(v)) => write_integer!(out, *v),
        Value::Int16(Some(v)) => write_integer!(out, *v),
        Value::Int32(Some(v)) => write_integer!(out, *v),
        Value::Int64(Some(v)) => write_integer!(out, *v),
        Value::Int128(Some(v)) => write_integer!(out, *v),
        Value::UInt8(Some(v)) => write_integer!(out, *v),
        Value::UInt16(Some(v)) => write_integer!(out, *v),
        Value::UInt32(Some(v)) => write_integer!(out, *v),
        Value::UInt64(Some(v)) => write_integer!(out, *v),
        Value::UInt128(Some(v)) => write_integer!(out, *v),
        Value::Int8(None)
        | Value::Int16(None)
        | Value::Int32(None)
        | Value::Int64(None)
        | Value::Int128(None)
        | Value::UInt8(None)
        | Value::UInt16(None)
        | Value::UInt32(None)
        | Value::UInt64(None)
        | Value::UInt128(None) => write_null(out),
        _ => return Err(Error::UnsupportedType(value.kind())),
    }
    Ok(())
}

/// Fixed point rendering with six decimals (`2.02` becomes `2.020000`).
pub fn write_float(out: &mut String, value: &Value) -> Result<()> {
    match value {
        Value::Float32(Some(v)) => write_float!(out, *v),
        Value::Float64(Some(v)) => write_float!(out, *v),
        Value::Float32(None) | Value::Float64(None) => write_null(out),
        _ => return Err(Error::UnsupportedType(value.kind())),
    }
    Ok(())
}

/// Wraps the string in single quotes. Embedded quotes are NOT escaped.
pub fn write_string(out: &mut String, value: &Value) -> Result<()> {
    match value {
        Value::Varchar(Some(v)) => {
            out.push('\'');
            out.push_str(v);
            out.push('\'');
        }
        Value::Varchar(None) => write_null(out),
        _ => return Err(Error::UnsupportedType(value.kind())),
    }
    Ok(())
}

/// Wraps the string in single quotes doubling every embedded quote.
pub fn write_string_escaped(out: &mut String, value: &Value) -> Result<()> {
    match value {
        Value::Varchar(Some(v)) => {
            out.push('\'');
            let mut position = 0;
            for (i, c) in v.char_indices() {
                if c == '\'' {
                    out.push_str(&v[position..i]);
                    out.push_str("''");
                    position = i + 1;
                }
            }
            out.push_str(&v[position..]);
            out.push('\'');
        }
        Value::Varchar(None) => write_null(out),
        _ => return Err(Error::UnsupportedType(value.kind())),
    }
    Ok(())
}

pub fn write_bool(out: &mut String, value: &Value) -> Result<()> {
    match value {
        Value::Boolean(Some(v)) => out.push_str(["false", "true"][*v as usize]),
        Value::Boolean(None) => write_null(out),
        _ => return Err(Error::UnsupportedType(value.kind())),
    }
    Ok(())
}

/// Registry of literal renderers keyed by [`ValueKind`].
///
/// Lookups take the shared lock just long enough to clone the renderer
/// handle; registration takes the exclusive lock.
pub struct TypeBinder {
    renderers: RwLock<HashMap<ValueKind, Renderer>>,
}

impl TypeBinder {
    /// Binder with the built-in renderers for booleans, integers, floats and strings.
    pub fn new() -> Self {
        let binder = Self::empty();
        {
            let mut renderers = binder
                .renderers
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let integer: Renderer = Arc::new(write_integer);
            for kind in ValueKind::INTEGERS {
                renderers.insert(kind, integer.clone());
            }
            let float: Renderer = Arc::new(write_float);
            for kind in ValueKind::FLOATS {
                renderers.insert(kind, float.clone());
            }
            renderers.insert(ValueKind::Varchar, Arc::new(write_string));
            renderers.insert(ValueKind::Boolean, Arc::new(write_bool));
        }
        binder
    }

    /// Binder without any renderer, every value is unsupported until registered.
    pub fn empty() -> Self {
        Self {
            renderers: RwLock::new(HashMap::new()),
        }
    }

    /// Like [`TypeBinder::new`] but strings have their single quotes doubled.
    pub fn with_escaped_strings() -> Self {
        let binder = Self::new();
        binder.register(ValueKind::Varchar, write_string_escaped);
        binder
    }

    /// Sets the renderer for `kind`, replacing the previous one.
    pub fn register<F>(&self, kind: ValueKind, renderer: F)
    where
        F: Fn(&mut String, &Value) -> Result<()> + Send + Sync + 'static,
    {
        self.renderers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(kind, Arc::new(renderer));
    }

    pub fn unregister(&self, kind: ValueKind) -> bool {
        self.renderers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&kind)
            .is_some()
    }

    pub fn is_registered(&self, kind: ValueKind) -> bool {
        self.renderers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&kind)
    }

    fn renderer(&self, kind: ValueKind) -> Option<Renderer> {
        self.renderers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .cloned()
    }

    /// Appends the literal of `value` to `out`. On error `out` is left unchanged.
    pub fn write(&self, out: &mut String, value: &Value) -> Result<()> {
        let kind = value.kind();
        let Some(renderer) = self.renderer(kind) else {
            return Err(Error::UnsupportedType(kind));
        };
        let len = out.len();
        renderer(out, value).inspect_err(|_| out.truncate(len))
    }

    pub fn render(&self, value: &Value) -> Result<String> {
        let mut out = String::new();
        self.write(&mut out, value)?;
        Ok(out)
    }
}

impl Default for TypeBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for TypeBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let renderers = self
            .renderers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut kinds = renderers.keys().collect::<Vec<_>>();
        kinds.sort();
        f.debug_struct("TypeBinder").field("kinds", &kinds).finish()
    }
}
