//! Dynamic attribute values and the bridge between them and field storage.
//!
//! Every attribute crosses the engine as a [`Value`]. Plain data (booleans,
//! numbers, strings, lists, maps) travels by value; reference-typed data
//! travels as a [`Value::Object`] handle. Cloning an object handle shares
//! the referent, which is exactly the pass-through policy the engine wants
//! for values without a copy capability of their own.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::AssignError;
use crate::reflect::Reflective;

// =============================================================================
// Value
// =============================================================================

/// A dynamically typed attribute value.
#[derive(Clone)]
pub enum Value {
    /// No value. `Option::None` fields read as `Unit`.
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// A reference-typed value. Cloning the variant shares the handle.
    Object(Arc<dyn Reflective>),
}

/// Generate `as_*` borrow accessors for the data-carrying variants.
macro_rules! value_accessors {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = concat!("Borrow the inner value when this is a `", stringify!($variant), "`.")]
                pub fn [<as_ $variant:lower>](&self) -> Option<&$ty> {
                    match self {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            )*
        }
    };
}

impl Value {
    value_accessors! {
        Bool => bool,
        Int => i64,
        Float => f64,
        Str => String,
        List => Vec<Value>,
        Map => BTreeMap<String, Value>,
        Object => Arc<dyn Reflective>,
    }

    /// Kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    /// Whether this value carries its own copy capability.
    ///
    /// Only object values can: plain data has no identity to preserve, so
    /// copying and passing through are the same operation.
    pub fn has_native_copy(&self) -> bool {
        match self {
            Value::Object(object) => object.has_native_copy(),
            _ => false,
        }
    }

    /// The default per-attribute copy.
    ///
    /// Invokes the value's own copy capability when it has one; otherwise the
    /// value passes through unchanged: plain data by value, objects by
    /// shared handle. There is no recursive descent into object graphs
    /// beyond this single level.
    pub fn copied(&self) -> Value {
        match self {
            Value::Object(object) => match object.try_native_copy() {
                Some(copy) => Value::Object(Arc::from(copy)),
                None => Value::Object(Arc::clone(object)),
            },
            other => other.clone(),
        }
    }
}

/// Handle identity of an object value.
///
/// Fat pointers are reduced to their data address; two handles refer to the
/// same object iff the addresses match.
pub fn object_identity(object: &Arc<dyn Reflective>) -> *const () {
    Arc::as_ptr(object).cast::<()>()
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("Unit"),
            Value::Bool(inner) => f.debug_tuple("Bool").field(inner).finish(),
            Value::Int(inner) => f.debug_tuple("Int").field(inner).finish(),
            Value::Float(inner) => f.debug_tuple("Float").field(inner).finish(),
            Value::Str(inner) => f.debug_tuple("Str").field(inner).finish(),
            Value::List(inner) => f.debug_tuple("List").field(inner).finish(),
            Value::Map(inner) => f.debug_tuple("Map").field(inner).finish(),
            Value::Object(object) => write!(f, "Object({})", object.type_name()),
        }
    }
}

/// Structural equality for plain data, handle identity for objects.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => object_identity(a) == object_identity(b),
            _ => false,
        }
    }
}

// =============================================================================
// Field <-> Value bridging
// =============================================================================

/// Read a field as an attribute [`Value`].
pub trait AsValue {
    fn as_value(&self) -> Value;
}

/// Rebuild a field from an attribute [`Value`].
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, AssignError>;
}

impl AsValue for Value {
    fn as_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, AssignError> {
        Ok(value)
    }
}

impl AsValue for bool {
    fn as_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, AssignError> {
        match value {
            Value::Bool(inner) => Ok(inner),
            other => Err(AssignError::TypeMismatch {
                expected: "bool",
                actual: other.kind(),
            }),
        }
    }
}

macro_rules! impl_int_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsValue for $ty {
                fn as_value(&self) -> Value {
                    Value::Int(*self as i64)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, AssignError> {
                    match value {
                        Value::Int(raw) => <$ty>::try_from(raw).map_err(|_| {
                            AssignError::OutOfRange {
                                value: raw,
                                target: stringify!($ty),
                            }
                        }),
                        other => Err(AssignError::TypeMismatch {
                            expected: "int",
                            actual: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_int_value!(i8, i16, i32, i64, u8, u16, u32);

impl AsValue for f64 {
    fn as_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, AssignError> {
        match value {
            Value::Float(raw) => Ok(raw),
            other => Err(AssignError::TypeMismatch {
                expected: "float",
                actual: other.kind(),
            }),
        }
    }
}

impl AsValue for f32 {
    fn as_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, AssignError> {
        match value {
            Value::Float(raw) => Ok(raw as f32),
            other => Err(AssignError::TypeMismatch {
                expected: "float",
                actual: other.kind(),
            }),
        }
    }
}

impl AsValue for String {
    fn as_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, AssignError> {
        match value {
            Value::Str(inner) => Ok(inner),
            other => Err(AssignError::TypeMismatch {
                expected: "str",
                actual: other.kind(),
            }),
        }
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(&self) -> Value {
        match self {
            Some(inner) => inner.as_value(),
            None => Value::Unit,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, AssignError> {
        match value {
            Value::Unit => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: AsValue> AsValue for Vec<T> {
    fn as_value(&self) -> Value {
        Value::List(self.iter().map(AsValue::as_value).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, AssignError> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(AssignError::TypeMismatch {
                expected: "list",
                actual: other.kind(),
            }),
        }
    }
}

impl<T: AsValue> AsValue for BTreeMap<String, T> {
    fn as_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, inner)| (key.clone(), inner.as_value()))
                .collect(),
        )
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: Value) -> Result<Self, AssignError> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(key, inner)| T::from_value(inner).map(|inner| (key, inner)))
                .collect(),
            other => Err(AssignError::TypeMismatch {
                expected: "map",
                actual: other.kind(),
            }),
        }
    }
}

impl<T: Reflective> AsValue for Arc<T> {
    fn as_value(&self) -> Value {
        Value::Object(Arc::clone(self) as Arc<dyn Reflective>)
    }
}

impl<T: Reflective> FromValue for Arc<T> {
    fn from_value(value: Value) -> Result<Self, AssignError> {
        match value {
            Value::Object(object) => {
                let actual = object.type_name();
                object
                    .into_any_arc()
                    .downcast::<T>()
                    .map_err(|_| AssignError::TypeMismatch {
                        expected: std::any::type_name::<T>(),
                        actual,
                    })
            }
            other => Err(AssignError::TypeMismatch {
                expected: "object",
                actual: other.kind(),
            }),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
