//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::cache::ValueKind;

// == Type Mismatch Error ==
/// Returned when converting a cache value into a concrete type that does
/// not match the stored variant.
///
/// The typed getters on the cache swallow this into a plain miss; the error
/// only surfaces to callers using the `TryFrom` conversions directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("type mismatch: expected {expected}, found {found}")]
pub struct TypeMismatch {
    /// The variant the caller asked for
    pub expected: ValueKind,
    /// The variant actually stored
    pub found: ValueKind,
}
