//! # Domain Errors
//!
//! Encoding preconditions. These signal a programming error upstream (a
//! malformed signature), not a transient condition, so encoding fails fast.

use thiserror::Error;

/// Codec input violates a field constraint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// A fixed-width field exceeds its maximum length.
    #[error("Field `{field}` is {len} bytes, maximum is {max}")]
    OversizedField {
        /// Field name
        field: &'static str,
        /// Actual length
        len: usize,
        /// Maximum length
        max: usize,
    },

    /// A signature component is empty.
    #[error("Signature component `{0}` is empty")]
    EmptySignatureComponent(&'static str),
}
