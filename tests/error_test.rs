//! Failure modes: unconstructible types, rejected assignments, and hook
//! contract violations.

use autocopy::{AssignError, AutoCopy, CopyError, Reflective, Value, auto_copy};

#[derive(Debug, Default, PartialEq, Reflective)]
struct Contact {
    name: String,
    note: String,
}

// No `Default` impl, so the engine has nothing to construct into.
#[derive(Debug, Reflective)]
struct Sealed {
    token: String,
}

#[test]
fn unconstructible_type_is_an_unsupported_type_error() {
    let source = Sealed { token: "t".into() };
    let result = auto_copy(&source);
    assert!(matches!(
        result,
        Err(CopyError::UnsupportedType { type_name: "Sealed" })
    ));
}

#[test]
fn wrong_typed_override_fails_at_the_assignment() {
    let source = Contact {
        name: "Ann".into(),
        note: "x".into(),
    };
    // The hook violates the attribute's contract; the violation surfaces as
    // an assignment failure attributed to the attribute, and the call
    // produces no partial result.
    let callback =
        |name: &str, _: Value| -> Option<Value> { (name == "name").then(|| Value::Int(3)) };
    let result = source.auto_copy_with_callback(&callback);
    match result {
        Err(CopyError::AttributeAssignment { attribute, source }) => {
            assert_eq!(attribute, "name");
            assert_eq!(
                source,
                AssignError::TypeMismatch {
                    expected: "str",
                    actual: "int"
                }
            );
        }
        other => panic!("expected an assignment error, got {other:?}"),
    }
}

#[test]
fn unknown_attribute_write_is_rejected() {
    let mut contact = Contact::default();
    let result = contact.set("ghost", Value::Unit);
    assert_eq!(
        result,
        Err(AssignError::UnknownAttribute {
            name: "ghost".into()
        })
    );
}

#[test]
fn unknown_attribute_read_is_none() {
    let contact = Contact::default();
    assert_eq!(contact.get("ghost"), None);
}

#[derive(Debug, Default, PartialEq, Reflective)]
struct Narrow {
    level: u8,
}

#[test]
fn out_of_range_override_is_rejected_with_the_value() {
    let source = Narrow { level: 1 };
    let callback = |_: &str, _: Value| -> Option<Value> { Some(Value::Int(4096)) };
    let result = source.auto_copy_with_callback(&callback);
    match result {
        Err(CopyError::AttributeAssignment { attribute, source }) => {
            assert_eq!(attribute, "level");
            assert_eq!(
                source,
                AssignError::OutOfRange {
                    value: 4096,
                    target: "u8"
                }
            );
        }
        other => panic!("expected an assignment error, got {other:?}"),
    }
}

#[test]
fn error_messages_name_the_offender() {
    let error = CopyError::AttributeAssignment {
        attribute: "name",
        source: AssignError::TypeMismatch {
            expected: "str",
            actual: "int",
        },
    };
    assert_eq!(error.to_string(), "attribute `name` rejected its value");

    let error = CopyError::UnsupportedType { type_name: "Sealed" };
    assert_eq!(
        error.to_string(),
        "type `Sealed` cannot be default-constructed"
    );
}
