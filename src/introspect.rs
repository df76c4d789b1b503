//! Attribute enumeration.

use crate::descriptor::AttributeDescriptor;
use crate::reflect::Reflective;

/// The ordered attribute surface of `source`'s type.
///
/// Per level, attributes come back in declaration order (primary definition
/// first, extension-declared after). Levels are visited most-derived first,
/// walking the base chain up to the root. Merging is by name and the first
/// occurrence wins, so a most-derived declaration shadows an ancestor's and
/// an extension duplicate collapses into the primary one.
///
/// The result is recomputed on every call: deterministic for a given type,
/// never cached.
pub fn enumerate(source: &dyn Reflective) -> Vec<AttributeDescriptor> {
    let mut merged: Vec<AttributeDescriptor> = Vec::new();
    let mut level = Some(source);
    while let Some(object) = level {
        for descriptor in object.local_attributes() {
            if !merged.iter().any(|seen| seen.name == descriptor.name) {
                merged.push(descriptor);
            }
        }
        level = object.base();
    }
    merged
}
