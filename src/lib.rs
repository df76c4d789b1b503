//! # autocopy
//!
//! Structural copy for reflective objects.
//!
//! **Copy any object of an unknown concrete type without hand-writing a copy
//! routine.**
//!
//! ## Architecture
//!
//! The engine walks an object's externally visible attributes and assembles
//! a fresh instance from their copied values:
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Reflection surface                                      |
//! |  - Reflective (get/set/enumerate), Value, AttributeDescriptor     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability probes                                       |
//! |  - Default construction, NativeCopy, AttributeExtension           |
//! |  - Inherent-method-priority detection at derive expansion sites   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Copy engine                                             |
//! |  - introspect (enumerate + merge), resolve (override precedence), |
//! |    engine (fast path, construction, assignment loop)              |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Per attribute, the decision chain is fixed: ignore-list > callback >
//! delegate > default copy. A type that carries its own copy capability
//! ([`NativeCopy`]) bypasses the walk entirely: the engine returns the
//! type's own copy and consults nothing else.
//!
//! ## Quick start
//!
//! ```ignore
//! use autocopy::prelude::*;
//!
//! #[derive(Debug, Default, Reflective)]
//! struct Contact {
//!     name: String,
//!     note: String,
//! }
//!
//! let source = Contact { name: "Ann".into(), note: "x".into() };
//!
//! // Plain structural copy.
//! let copy = source.auto_copy()?;
//!
//! // Leave `note` at its default.
//! let trimmed = source.auto_copy_ignoring(&["note"])?;
//!
//! // Rewrite one attribute, default-copy the rest.
//! let cb = |name: &str, value: Value| -> Option<Value> {
//!     (name == "note").then(|| Value::Str("redacted".into()))
//! };
//! let redacted = source.auto_copy_with_callback(&cb)?;
//! ```
//!
//! ## Extending the attribute surface
//!
//! Attributes declared outside the primary definition (the partial-type
//! case) are picked up through [`AttributeExtension`], implemented in any
//! module of the defining crate:
//!
//! ```ignore
//! #[derive(Debug, Default, Reflective)]
//! struct Article {
//!     title: String,
//!     #[reflective(skip)]
//!     note: String,
//! }
//!
//! // Elsewhere in the crate:
//! impl AttributeExtension for Article {
//!     fn extension_attributes() -> &'static [AttributeDescriptor] {
//!         const EXT: &[AttributeDescriptor] =
//!             &[AttributeDescriptor::new("note", "Article")];
//!         EXT
//!     }
//!     fn extension_get(&self, name: &str) -> Option<Value> {
//!         (name == "note").then(|| self.note.as_value())
//!     }
//!     fn extension_set(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
//!         if name == "note" {
//!             self.note = FromValue::from_value(value)?;
//!         }
//!         Ok(())
//!     }
//! }
//! ```

// =============================================================================
// Layer 0: Reflection surface
// =============================================================================

pub mod descriptor;
pub mod reflect;
pub mod value;

// =============================================================================
// Layer 1: Capability probes
// =============================================================================

pub mod probe;

// =============================================================================
// Layer 2: Copy engine
// =============================================================================

pub mod engine;
pub mod error;
pub mod introspect;
pub mod resolve;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use descriptor::AttributeDescriptor;
pub use engine::{
    AutoCopy, auto_copy, auto_copy_as, auto_copy_configured, auto_copy_ignoring,
    auto_copy_with_callback, auto_copy_with_delegate,
};
pub use error::{AssignError, CopyError};
pub use reflect::{AttributeExtension, NativeCopy, Reflective};
pub use resolve::{CopyCallback, CopyConfig, CopyDelegate};
pub use value::{AsValue, FromValue, Value};

// Re-export the derive under the trait's name, serde-style.
pub use macros::Reflective;

/// Common items for copying reflective objects.
pub mod prelude {
    pub use crate::descriptor::AttributeDescriptor;
    pub use crate::engine::{AutoCopy, auto_copy, auto_copy_as};
    pub use crate::error::{AssignError, CopyError};
    pub use crate::reflect::{AttributeExtension, NativeCopy, Reflective};
    pub use crate::resolve::{CopyConfig, CopyDelegate};
    pub use crate::value::{AsValue, FromValue, Value};

    pub use macros::Reflective;
}
