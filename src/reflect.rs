//! The reflection surface the copy engine drives.
//!
//! [`Reflective`] is the object-safe contract a type offers to the engine:
//! attribute descriptors, get/set by name, default construction, and the
//! native-copy query. Nobody writes it by hand; `#[derive(Reflective)]`
//! generates the whole implementation from the field list.
//!
//! [`NativeCopy`] and [`AttributeExtension`] are the two opt-in capability
//! traits the derive discovers through the probes in [`crate::probe`].

use std::any::Any;
use std::sync::Arc;

use crate::descriptor::AttributeDescriptor;
use crate::error::AssignError;
use crate::value::Value;

// =============================================================================
// Reflective
// =============================================================================

/// Object-safe reflection over a type's externally visible attributes.
///
/// Implemented by `#[derive(Reflective)]` on structs with named fields.
/// Field attributes:
///
/// - `#[reflective(skip)]`: the field has no attribute of its own (an
///   extension may still surface it under its own accessors).
/// - `#[reflective(readonly)]`: the attribute is enumerated and readable
///   but never assigned.
/// - `#[reflective(base)]`: the field is the ancestor object; its attribute
///   surface is merged into this type's, and `get`/`set` fall through to it
///   for names not declared here.
pub trait Reflective: Any + Send + Sync {
    /// Type name as declared, without module path.
    fn type_name(&self) -> &'static str;

    /// Attributes declared at this level, in declaration order: the primary
    /// definition first, then any extension-declared attributes. Ancestor
    /// levels are reached through [`Reflective::base`].
    fn local_attributes(&self) -> Vec<AttributeDescriptor>;

    /// The ancestor object, when the type declares one.
    fn base(&self) -> Option<&dyn Reflective> {
        None
    }

    fn base_mut(&mut self) -> Option<&mut dyn Reflective> {
        None
    }

    /// Read an attribute by name. Consults the primary fields, then the
    /// extension, then the ancestor chain. `None` for unknown names.
    fn get(&self, name: &str) -> Option<Value>;

    /// Write an attribute by name, with the same lookup order as
    /// [`Reflective::get`]. Writing a read-only attribute is a silent no-op.
    fn set(&mut self, name: &str, value: Value) -> Result<(), AssignError>;

    /// A fresh instance of this object's type with every attribute at its
    /// default, when the type has a default-construction capability.
    ///
    /// Never routed through the native-copy path.
    fn construct_default(&self) -> Option<Box<dyn Reflective>>;

    /// Whether the type carries its own copy capability.
    fn has_native_copy(&self) -> bool;

    /// The type's own independent copy of this object, when the type carries
    /// that capability.
    fn try_native_copy(&self) -> Option<Box<dyn Reflective>>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

// =============================================================================
// Opt-in capabilities
// =============================================================================

/// Type-provided capability to produce a structurally independent duplicate.
///
/// Opt-in: implementing `Clone` does not grant it. A type that implements
/// `NativeCopy` defines its own complete copy semantics, and the engine
/// returns `native_copy` directly instead of walking attributes; the
/// generic mechanism never bypasses a type's own copy behavior.
pub trait NativeCopy {
    fn native_copy(&self) -> Self;
}

/// Attributes declared outside a type's primary definition.
///
/// The analog of a partial type definition: implement this in any module of
/// the crate that defines the type, and the derive discovers the impl and
/// merges the declared attributes into the type's surface. Accessors are
/// author-written, typically over fields the derive was told to
/// `#[reflective(skip)]`, and may surface getter-only attributes by
/// declaring them [`AttributeDescriptor::readonly`].
pub trait AttributeExtension {
    /// Descriptors for the extension-declared attributes.
    fn extension_attributes() -> &'static [AttributeDescriptor];

    /// Read an extension attribute. `None` for names the extension does not
    /// declare.
    fn extension_get(&self, name: &str) -> Option<Value>;

    /// Write an extension attribute. The default is a no-op for extensions
    /// that only declare read-only attributes; override it when any declared
    /// attribute is writable.
    fn extension_set(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        let _ = (name, value);
        Ok(())
    }
}
