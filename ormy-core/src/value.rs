use std::fmt::{self, Display};

/// Dynamically typed value moved between parameters, statements and rows.
///
/// Every typed variant wraps an `Option` so that a NULL still carries the kind
/// it was produced from (`Value::Int32(None)` is a NULL integer). `Value::Null`
/// is the untyped NULL a driver returns when it cannot tell the column type.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int8(Option<i8>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    Int128(Option<i128>),
    UInt8(Option<u8>),
    UInt16(Option<u16>),
    UInt32(Option<u32>),
    UInt64(Option<u64>),
    UInt128(Option<u128>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
}

/// Discriminant of a [`Value`], the key renderers are registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    Null,
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt128,
    Float32,
    Float64,
    Varchar,
    Blob,
}

impl ValueKind {
    pub const INTEGERS: [ValueKind; 10] = [
        ValueKind::Int8,
        ValueKind::Int16,
        ValueKind::Int32,
        ValueKind::Int64,
        ValueKind::Int128,
        ValueKind::UInt8,
        ValueKind::UInt16,
        ValueKind::UInt32,
        ValueKind::UInt64,
        ValueKind::UInt128,
    ];
    pub const FLOATS: [ValueKind; 2] = [ValueKind::Float32, ValueKind::Float64];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "bool",
            ValueKind::Int8 => "i8",
            ValueKind::Int16 => "i16",
            ValueKind::Int32 => "i32",
            ValueKind::Int64 => "i64",
            ValueKind::Int128 => "i128",
            ValueKind::UInt8 => "u8",
            ValueKind::UInt16 => "u16",
            ValueKind::UInt32 => "u32",
            ValueKind::UInt64 => "u64",
            ValueKind::UInt128 => "u128",
            ValueKind::Float32 => "f32",
            ValueKind::Float64 => "f64",
            ValueKind::Varchar => "string",
            ValueKind::Blob => "blob",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(..) => ValueKind::Boolean,
            Value::Int8(..) => ValueKind::Int8,
            Value::Int16(..) => ValueKind::Int16,
            Value::Int32(..) => ValueKind::Int32,
            Value::Int64(..) => ValueKind::Int64,
            Value::Int128(..) => ValueKind::Int128,
            Value::UInt8(..) => ValueKind::UInt8,
            Value::UInt16(..) => ValueKind::UInt16,
            Value::UInt32(..) => ValueKind::UInt32,
            Value::UInt64(..) => ValueKind::UInt64,
            Value::UInt128(..) => ValueKind::UInt128,
            Value::Float32(..) => ValueKind::Float32,
            Value::Float64(..) => ValueKind::Float64,
            Value::Varchar(..) => ValueKind::Varchar,
            Value::Blob(..) => ValueKind::Blob,
        }
    }

    pub fn same_kind(&self, other: &Self) -> bool {
        self.kind() == other.kind()
    }

    /// True for the untyped NULL and for every typed variant holding `None`.
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            Value::Null
                | Value::Boolean(None)
                | Value::Int8(None)
                | Value::Int16(None)
                | Value::Int32(None)
                | Value::Int64(None)
                | Value::Int128(None)
                | Value::UInt8(None)
                | Value::UInt16(None)
                | Value::UInt32(None)
                | Value::UInt64(None)
                | Value::UInt128(None)
                | Value::Float32(None)
                | Value::Float64(None)
                | Value::Varchar(None)
                | Value::Blob(None)
        )
    }
}
