//! Capability probes used by the derive at expansion sites.
//!
//! Inherent-method-priority detection: for each capability there is a
//! fallback trait whose method answers negatively for every probe, and a
//! bounded inherent impl that answers positively when the bound holds. At a
//! call site with a concrete `T` the inherent method wins exactly when the
//! capability is present, otherwise resolution falls back to the trait.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site. It does
//! NOT work in generic contexts like `fn foo<T>()`, which is fine here,
//! because the only call sites are the impls `#[derive(Reflective)]`
//! generates, and those are always concrete.

use core::marker::PhantomData;

use crate::descriptor::AttributeDescriptor;
use crate::error::AssignError;
use crate::reflect::{AttributeExtension, NativeCopy, Reflective};
use crate::value::Value;

/// Probe anchor for a concrete type `T`.
#[doc(hidden)]
pub struct CapabilityProbe<T>(PhantomData<T>);

impl<T> CapabilityProbe<T> {
    pub const fn new() -> Self {
        CapabilityProbe(PhantomData)
    }
}

impl<T> Default for CapabilityProbe<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Default construction
// =============================================================================

#[doc(hidden)]
pub trait ConstructFallback {
    fn probe_default(&self) -> Option<Box<dyn Reflective>> {
        None
    }
}

impl<T> ConstructFallback for CapabilityProbe<T> {}

impl<T: Default + Reflective> CapabilityProbe<T> {
    pub fn probe_default(&self) -> Option<Box<dyn Reflective>> {
        Some(Box::new(T::default()))
    }
}

// =============================================================================
// Native copy
// =============================================================================

#[doc(hidden)]
pub trait NativeCopyFallback<T> {
    fn probe_has_native_copy(&self) -> bool {
        false
    }

    fn probe_native_copy(&self, _source: &T) -> Option<Box<dyn Reflective>> {
        None
    }
}

impl<T> NativeCopyFallback<T> for CapabilityProbe<T> {}

impl<T: NativeCopy + Reflective> CapabilityProbe<T> {
    pub fn probe_has_native_copy(&self) -> bool {
        true
    }

    pub fn probe_native_copy(&self, source: &T) -> Option<Box<dyn Reflective>> {
        Some(Box::new(source.native_copy()))
    }
}

// =============================================================================
// Extension attributes
// =============================================================================

#[doc(hidden)]
pub trait ExtensionFallback<T> {
    fn probe_extension_attributes(&self) -> &'static [AttributeDescriptor] {
        &[]
    }

    fn probe_extension_get(&self, _source: &T, _name: &str) -> Option<Value> {
        None
    }

    fn probe_extension_set(
        &self,
        _target: &mut T,
        name: &str,
        _value: Value,
    ) -> Result<(), AssignError> {
        Err(AssignError::UnknownAttribute {
            name: name.to_string(),
        })
    }
}

impl<T> ExtensionFallback<T> for CapabilityProbe<T> {}

impl<T: AttributeExtension> CapabilityProbe<T> {
    pub fn probe_extension_attributes(&self) -> &'static [AttributeDescriptor] {
        T::extension_attributes()
    }

    pub fn probe_extension_get(&self, source: &T, name: &str) -> Option<Value> {
        source.extension_get(name)
    }

    pub fn probe_extension_set(
        &self,
        target: &mut T,
        name: &str,
        value: Value,
    ) -> Result<(), AssignError> {
        target.extension_set(name, value)
    }
}
