//! Lookup Argument Module
//!
//! Closed set of value kinds the key hasher knows how to encode.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use serde_json::Value;

// == Lookup Argument ==
/// One value in an ordered lookup argument list.
///
/// Integers keep their signedness; the hasher normalizes them to the native
/// pointer width. Floats keep their own width because the hasher encodes
/// them as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupArg {
    /// Signed integer of any width
    Int(i64),
    /// Unsigned integer of any width
    Uint(u64),
    /// 32-bit float
    Float32(f32),
    /// 64-bit float
    Float64(f64),
    /// Boolean flag
    Bool(bool),
    /// UTF-8 text, hashed as its raw bytes
    Str(String),
    /// Raw byte sequence
    Bytes(Vec<u8>),
    /// Timestamp with its UTC offset
    Time(DateTime<FixedOffset>),
    /// Any value without an encoding; always hashes to the sentinel
    Unsupported,
}

impl LookupArg {
    // == JSON Conversion ==
    /// Maps a JSON value onto a lookup argument.
    ///
    /// Numbers prefer `Int`, then `Uint`, then `Float64`. Null, arrays and
    /// objects have no encoding and become `Unsupported`.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    LookupArg::Int(i)
                } else if let Some(u) = n.as_u64() {
                    LookupArg::Uint(u)
                } else {
                    n.as_f64().map_or(LookupArg::Unsupported, LookupArg::Float64)
                }
            }
            Value::Bool(b) => LookupArg::Bool(*b),
            Value::String(s) => LookupArg::Str(s.clone()),
            Value::Null | Value::Array(_) | Value::Object(_) => LookupArg::Unsupported,
        }
    }

    /// Returns true if this argument hashes to the sentinel.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, LookupArg::Unsupported)
    }
}

// == Conversions ==
macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for LookupArg {
            fn from(v: $t) -> Self {
                LookupArg::Int(v as i64)
            }
        }

        impl From<&$t> for LookupArg {
            fn from(v: &$t) -> Self {
                LookupArg::Int(*v as i64)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for LookupArg {
            fn from(v: $t) -> Self {
                LookupArg::Uint(v as u64)
            }
        }

        impl From<&$t> for LookupArg {
            fn from(v: &$t) -> Self {
                LookupArg::Uint(*v as u64)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for LookupArg {
    fn from(v: f32) -> Self {
        LookupArg::Float32(v)
    }
}

impl From<&f32> for LookupArg {
    fn from(v: &f32) -> Self {
        LookupArg::Float32(*v)
    }
}

impl From<f64> for LookupArg {
    fn from(v: f64) -> Self {
        LookupArg::Float64(v)
    }
}

impl From<&f64> for LookupArg {
    fn from(v: &f64) -> Self {
        LookupArg::Float64(*v)
    }
}

impl From<bool> for LookupArg {
    fn from(v: bool) -> Self {
        LookupArg::Bool(v)
    }
}

impl From<&bool> for LookupArg {
    fn from(v: &bool) -> Self {
        LookupArg::Bool(*v)
    }
}

impl From<&str> for LookupArg {
    fn from(v: &str) -> Self {
        LookupArg::Str(v.to_string())
    }
}

impl From<String> for LookupArg {
    fn from(v: String) -> Self {
        LookupArg::Str(v)
    }
}

impl From<&String> for LookupArg {
    fn from(v: &String) -> Self {
        LookupArg::Str(v.clone())
    }
}

impl From<&[u8]> for LookupArg {
    fn from(v: &[u8]) -> Self {
        LookupArg::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for LookupArg {
    fn from(v: Vec<u8>) -> Self {
        LookupArg::Bytes(v)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for LookupArg {
    fn from(v: DateTime<Tz>) -> Self {
        let offset = v.offset().fix();
        LookupArg::Time(v.with_timezone(&offset))
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for LookupArg {
    fn from(v: &DateTime<Tz>) -> Self {
        let offset = v.offset().fix();
        LookupArg::Time(v.with_timezone(&offset))
    }
}

impl From<NaiveDateTime> for LookupArg {
    fn from(v: NaiveDateTime) -> Self {
        Utc.from_utc_datetime(&v).into()
    }
}

impl<T: Into<LookupArg>> From<Option<T>> for LookupArg {
    fn from(v: Option<T>) -> Self {
        v.map_or(LookupArg::Unsupported, Into::into)
    }
}
