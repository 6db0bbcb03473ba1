//! Cache Value Module
//!
//! Defines the closed set of typed values the cache can store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeMismatch;

// == Cache Value ==
/// A value stored in the cache.
///
/// Values are one of a closed set of variants rather than an opaque payload,
/// so retrieval can be checked against the type the caller expects. The
/// `Json` variant keeps arbitrary structured payloads storable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CacheValue {
    /// A boolean flag
    Bool(bool),
    /// A signed integer
    Int(i64),
    /// A UTF-8 string
    Str(String),
    /// Arbitrary structured data
    Json(serde_json::Value),
}

impl CacheValue {
    // == Kind ==
    /// Returns the discriminant of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            CacheValue::Bool(_) => ValueKind::Bool,
            CacheValue::Int(_) => ValueKind::Int,
            CacheValue::Str(_) => ValueKind::Str,
            CacheValue::Json(_) => ValueKind::Json,
        }
    }
}

// == Value Kind ==
/// Discriminant for a cache value, carried by type mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Str,
    Json,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Str => "string",
            ValueKind::Json => "json",
        };
        write!(f, "{}", name)
    }
}

// == Conversions In ==
impl From<bool> for CacheValue {
    fn from(value: bool) -> Self {
        CacheValue::Bool(value)
    }
}

impl From<i64> for CacheValue {
    fn from(value: i64) -> Self {
        CacheValue::Int(value)
    }
}

impl From<i32> for CacheValue {
    fn from(value: i32) -> Self {
        CacheValue::Int(value as i64)
    }
}

impl From<String> for CacheValue {
    fn from(value: String) -> Self {
        CacheValue::Str(value)
    }
}

impl From<&str> for CacheValue {
    fn from(value: &str) -> Self {
        CacheValue::Str(value.to_string())
    }
}

impl From<serde_json::Value> for CacheValue {
    fn from(value: serde_json::Value) -> Self {
        CacheValue::Json(value)
    }
}

// == Conversions Out ==
impl TryFrom<CacheValue> for bool {
    type Error = TypeMismatch;

    fn try_from(value: CacheValue) -> Result<Self, Self::Error> {
        match value {
            CacheValue::Bool(b) => Ok(b),
            other => Err(TypeMismatch {
                expected: ValueKind::Bool,
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<CacheValue> for i64 {
    type Error = TypeMismatch;

    fn try_from(value: CacheValue) -> Result<Self, Self::Error> {
        match value {
            CacheValue::Int(n) => Ok(n),
            other => Err(TypeMismatch {
                expected: ValueKind::Int,
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<CacheValue> for String {
    type Error = TypeMismatch;

    fn try_from(value: CacheValue) -> Result<Self, Self::Error> {
        match value {
            CacheValue::Str(s) => Ok(s),
            other => Err(TypeMismatch {
                expected: ValueKind::Str,
                found: other.kind(),
            }),
        }
    }
}
