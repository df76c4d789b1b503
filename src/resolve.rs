//! Per-attribute override resolution.
//!
//! Three customization channels exist (an ignore-list, a callback, and a
//! delegate) and their precedence is fixed: ignore-list > callback >
//! delegate > default. [`resolve_attribute`] is the single place that rule
//! lives; the engine never consults a hook directly.

use std::collections::HashSet;

use crate::reflect::Reflective;
use crate::value::Value;

// =============================================================================
// Hooks
// =============================================================================

/// Per-attribute callback hook.
///
/// Receives the attribute name and the default-copied value; returns a
/// replacement, or `None` for "no override", in which case the default
/// copied value is still assigned.
pub type CopyCallback<'a> = dyn Fn(&str, Value) -> Option<Value> + 'a;

/// Per-attribute delegate hook.
///
/// The object-shaped counterpart of [`CopyCallback`]: one capability,
/// consulted with the source object, the attribute name, and the
/// default-copied value. The same "no override" semantics apply to a `None`
/// return.
pub trait CopyDelegate {
    fn resolve_attribute(
        &self,
        source: &dyn Reflective,
        name: &str,
        copied: Value,
    ) -> Option<Value>;
}

// =============================================================================
// CopyConfig
// =============================================================================

/// Configuration of one copy operation.
///
/// All knobs are optional and independently combinable, and the whole
/// configuration is immutable for the duration of the operation. Supplying
/// both a callback and a delegate is allowed; the callback is consulted
/// first and the delegate only sees attributes the callback declined.
#[derive(Default)]
pub struct CopyConfig<'a> {
    ignored: HashSet<&'a str>,
    callback: Option<&'a CopyCallback<'a>>,
    delegate: Option<&'a dyn CopyDelegate>,
}

impl<'a> CopyConfig<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude attributes by exact name. Ignored attributes are skipped
    /// entirely and keep their post-construction defaults in the copy.
    pub fn ignoring<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.ignored.extend(names);
        self
    }

    pub fn with_callback(mut self, callback: &'a CopyCallback<'a>) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn with_delegate(mut self, delegate: &'a dyn CopyDelegate) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored.contains(name)
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Compute the final value for one attribute, or `None` to skip it.
///
/// A `None` from a hook falls through to the next rule and ultimately to the
/// default copied value; it never skips the attribute. A `None` *result*
/// (skip: leave the destination at its post-construction default) is
/// produced by the ignore-list alone.
pub fn resolve_attribute(
    config: &CopyConfig<'_>,
    source: &dyn Reflective,
    name: &str,
    copied: Value,
) -> Option<Value> {
    if config.is_ignored(name) {
        return None;
    }
    if let Some(callback) = config.callback {
        if let Some(replacement) = callback(name, copied.clone()) {
            return Some(replacement);
        }
    }
    if let Some(delegate) = config.delegate {
        if let Some(replacement) = delegate.resolve_attribute(source, name, copied.clone()) {
            return Some(replacement);
        }
    }
    Some(copied)
}
