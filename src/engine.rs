//! The copy engine.
//!
//! Drives one synchronous pass over a source object: native-copy fast path,
//! default construction, then per attribute read -> default copy -> override
//! resolution -> assignment. The source is never mutated; the new instance
//! is exclusively the caller's on return.

use tracing::{debug, trace};

use crate::error::CopyError;
use crate::introspect;
use crate::reflect::Reflective;
use crate::resolve::{self, CopyCallback, CopyConfig, CopyDelegate};

// =============================================================================
// Entry points
// =============================================================================

/// Copy `source` with no customization.
pub fn auto_copy(source: &dyn Reflective) -> Result<Box<dyn Reflective>, CopyError> {
    auto_copy_configured(source, &CopyConfig::new())
}

/// Copy `source`, leaving the named attributes at their post-construction
/// defaults.
pub fn auto_copy_ignoring(
    source: &dyn Reflective,
    ignored: &[&str],
) -> Result<Box<dyn Reflective>, CopyError> {
    auto_copy_configured(source, &CopyConfig::new().ignoring(ignored.iter().copied()))
}

/// Copy `source`, consulting `callback` for every attribute.
pub fn auto_copy_with_callback(
    source: &dyn Reflective,
    callback: &CopyCallback<'_>,
) -> Result<Box<dyn Reflective>, CopyError> {
    auto_copy_configured(source, &CopyConfig::new().with_callback(callback))
}

/// Copy `source`, consulting `delegate` for every attribute.
pub fn auto_copy_with_delegate(
    source: &dyn Reflective,
    delegate: &dyn CopyDelegate,
) -> Result<Box<dyn Reflective>, CopyError> {
    auto_copy_configured(source, &CopyConfig::new().with_delegate(delegate))
}

/// The configured copy operation every other entry point reduces to.
///
/// When the source's type carries its own copy capability the native copy is
/// returned directly: no attribute is enumerated and no hook runs. Otherwise
/// a default-constructed destination is populated attribute by attribute in
/// the stable enumeration order. The first rejected assignment aborts the
/// whole operation; no partially copied instance ever reaches the caller.
pub fn auto_copy_configured(
    source: &dyn Reflective,
    config: &CopyConfig<'_>,
) -> Result<Box<dyn Reflective>, CopyError> {
    if let Some(copy) = source.try_native_copy() {
        debug!(type_name = source.type_name(), "native copy fast path");
        return Ok(copy);
    }

    let mut target = source.construct_default().ok_or(CopyError::UnsupportedType {
        type_name: source.type_name(),
    })?;

    for descriptor in introspect::enumerate(source) {
        let Some(current) = source.get(descriptor.name) else {
            continue;
        };
        let copied = current.copied();
        match resolve::resolve_attribute(config, source, descriptor.name, copied) {
            Some(value) if descriptor.mutable => {
                trace!(attribute = descriptor.name, "assign");
                target
                    .set(descriptor.name, value)
                    .map_err(|source| CopyError::AttributeAssignment {
                        attribute: descriptor.name,
                        source,
                    })?;
            }
            Some(_) => trace!(attribute = descriptor.name, "read-only, left at default"),
            None => trace!(attribute = descriptor.name, "ignored"),
        }
    }

    debug!(type_name = source.type_name(), "copied");
    Ok(target)
}

/// Copy `source` and hand it back as its concrete type.
pub fn auto_copy_as<T: Reflective>(source: &T) -> Result<T, CopyError> {
    downcast(auto_copy(source)?)
}

fn downcast<T: Reflective>(copy: Box<dyn Reflective>) -> Result<T, CopyError> {
    let actual = copy.type_name();
    copy.into_any()
        .downcast::<T>()
        .map(|concrete| *concrete)
        .map_err(|_| CopyError::TypeMismatch {
            expected: std::any::type_name::<T>(),
            actual,
        })
}

// =============================================================================
// Method form
// =============================================================================

/// The copy operations as methods on any [`Reflective`] type, with the copy
/// coming back as the concrete type.
///
/// Blanket-implemented; bring the trait into scope and call.
pub trait AutoCopy: Reflective + Sized {
    fn auto_copy(&self) -> Result<Self, CopyError> {
        downcast(auto_copy(self)?)
    }

    fn auto_copy_ignoring(&self, ignored: &[&str]) -> Result<Self, CopyError> {
        downcast(auto_copy_ignoring(self, ignored)?)
    }

    fn auto_copy_with_callback(&self, callback: &CopyCallback<'_>) -> Result<Self, CopyError> {
        downcast(auto_copy_with_callback(self, callback)?)
    }

    fn auto_copy_with_delegate(&self, delegate: &dyn CopyDelegate) -> Result<Self, CopyError> {
        downcast(auto_copy_with_delegate(self, delegate)?)
    }

    fn auto_copy_configured(&self, config: &CopyConfig<'_>) -> Result<Self, CopyError> {
        downcast(auto_copy_configured(self, config)?)
    }
}

impl<T: Reflective> AutoCopy for T {}
