//! Error taxonomy of the copy engine.
//!
//! Two layers: [`AssignError`] is what the attribute-storage layer reports
//! when a single write is rejected, [`CopyError`] is what a whole copy
//! operation returns. A failed copy never yields a half-populated instance;
//! the engine stops at the first rejected assignment.

use thiserror::Error as ThisError;

///
/// AssignError
///

/// Rejection reasons for a single attribute write.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum AssignError {
    /// The name matches no attribute on the type, its extensions, or its
    /// ancestor chain.
    #[error("no attribute named `{name}`")]
    UnknownAttribute { name: String },

    /// The value's kind does not match the attribute's storage.
    ///
    /// Also produced when an override hook returns a value the attribute
    /// cannot hold; the violation surfaces at the assignment attempt.
    #[error("expected a {expected} value, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// An integer value that does not fit the attribute's integer width.
    #[error("value {value} does not fit in {target}")]
    OutOfRange { value: i64, target: &'static str },
}

///
/// CopyError
///

/// Failure of a whole copy operation.
#[derive(Debug, ThisError)]
pub enum CopyError {
    /// The source's type has no default-construction capability, so no
    /// destination instance can be allocated.
    #[error("type `{type_name}` cannot be default-constructed")]
    UnsupportedType { type_name: &'static str },

    /// A specific attribute rejected the value being assigned. Fatal to the
    /// call: the engine does not skip-and-continue, since a partially copied
    /// object could violate the source type's own invariants.
    #[error("attribute `{attribute}` rejected its value")]
    AttributeAssignment {
        attribute: &'static str,
        #[source]
        source: AssignError,
    },

    /// A typed entry point asked for a different type than the copy produced.
    #[error("copy produced `{actual}` where `{expected}` was requested")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}
