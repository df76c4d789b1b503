//! The value-level copy policy: plain data by value, objects by shared
//! handle unless the object's type carries its own copy capability.

use std::sync::Arc;

use autocopy::{NativeCopy, Reflective, Value};

#[derive(Debug, Default, PartialEq, Reflective)]
struct Plain {
    text: String,
}

#[derive(Debug, Default, PartialEq, Reflective)]
struct Copyable {
    text: String,
}

impl NativeCopy for Copyable {
    fn native_copy(&self) -> Self {
        Copyable {
            text: self.text.clone(),
        }
    }
}

#[test]
fn plain_object_values_pass_through_by_identity() {
    let object: Arc<Plain> = Arc::new(Plain { text: "a".into() });
    let value = Value::Object(object.clone());

    assert!(!value.has_native_copy());
    let copied = value.copied();
    // Same handle: identity-preserving pass-through.
    assert_eq!(copied, value);
}

#[test]
fn capable_object_values_are_duplicated() {
    let object: Arc<Copyable> = Arc::new(Copyable { text: "a".into() });
    let value = Value::Object(object.clone());

    assert!(value.has_native_copy());
    let copied = value.copied();
    // A fresh handle: object equality here is identity, so the copy differs.
    assert_ne!(copied, value);

    let inner = copied.as_object().unwrap();
    assert_eq!(inner.get("text"), Some(Value::Str("a".into())));
}

#[test]
fn scalar_values_copy_by_value() {
    let value = Value::Str("hello".into());
    assert!(!value.has_native_copy());
    assert_eq!(value.copied(), value);

    let value = Value::List(vec![Value::Int(1), Value::Bool(true)]);
    assert_eq!(value.copied(), value);
}

#[test]
fn accessors_expose_the_inner_data() {
    let value = Value::Int(41);
    assert_eq!(value.as_int(), Some(&41));
    assert_eq!(value.as_str(), None);
    assert_eq!(value.kind(), "int");

    let value = Value::Str("x".into());
    assert_eq!(value.as_str().map(String::as_str), Some("x"));
    assert_eq!(value.kind(), "str");
}
