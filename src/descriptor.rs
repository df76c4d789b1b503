//! Attribute descriptors produced by introspection.

/// One externally visible attribute of a reflective type.
///
/// Descriptors are computed on demand for every copy operation and carry no
/// persistent identity. Within the merged surface of a type the `name` is
/// unique; a duplicate declared by an extension or an ancestor refers to the
/// same attribute and only the most-derived declaration survives the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Attribute name, matched exactly against ignore-lists and hooks.
    pub name: &'static str,
    /// Name of the type whose definition (or extension) declares the attribute.
    pub declared_on: &'static str,
    /// Whether the attribute can be written on a freshly constructed instance.
    /// Assignment to a non-mutable attribute is a silent no-op, not a failure.
    pub mutable: bool,
}

impl AttributeDescriptor {
    /// A writable attribute.
    pub const fn new(name: &'static str, declared_on: &'static str) -> Self {
        AttributeDescriptor {
            name,
            declared_on,
            mutable: true,
        }
    }

    /// An attribute that can be read but never assigned.
    pub const fn readonly(name: &'static str, declared_on: &'static str) -> Self {
        AttributeDescriptor {
            name,
            declared_on,
            mutable: false,
        }
    }
}
