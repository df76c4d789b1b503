//! Override precedence: ignore-list > callback > delegate > default.

use std::sync::Mutex;

use autocopy::{AutoCopy, CopyConfig, CopyDelegate, Reflective, Value};

#[derive(Debug, Default, PartialEq, Reflective)]
struct Record {
    name: String,
    note: String,
    rating: i64,
}

fn sample() -> Record {
    Record {
        name: "Ann".into(),
        note: "x".into(),
        rating: 4,
    }
}

#[test]
fn ignored_attributes_stay_at_defaults() {
    let source = sample();
    let copy = source.auto_copy_ignoring(&["note"]).unwrap();
    assert_eq!(copy.name, "Ann");
    assert_eq!(copy.note, "");
    assert_eq!(copy.rating, 4);
}

#[test]
fn ignore_list_beats_every_hook() {
    let source = sample();
    let callback = |name: &str, _: Value| -> Option<Value> {
        (name == "note").then(|| Value::Str("from callback".into()))
    };
    let config = CopyConfig::new()
        .ignoring(["note"])
        .with_callback(&callback);
    let copy = source.auto_copy_configured(&config).unwrap();
    // The callback offered a value for `note`, but ignored means skipped.
    assert_eq!(copy.note, "");
    assert_eq!(copy.name, "Ann");
}

#[test]
fn callback_overrides_one_attribute_and_defaults_the_rest() {
    let source = sample();
    let callback = |name: &str, _: Value| -> Option<Value> {
        (name == "name").then(|| Value::Str("sentinel".into()))
    };
    let copy = source.auto_copy_with_callback(&callback).unwrap();
    assert_eq!(copy.name, "sentinel");
    assert_eq!(copy.note, "x");
    assert_eq!(copy.rating, 4);
}

#[test]
fn callback_absence_falls_back_to_default_copy_not_skip() {
    let source = sample();
    let callback = |_: &str, _: Value| -> Option<Value> { None };
    let copy = source.auto_copy_with_callback(&callback).unwrap();
    // A declined override still assigns the default copy of every attribute.
    assert_eq!(copy, source);
}

/// Delegate that records every consultation and overrides one attribute.
struct Recorder {
    consulted: Mutex<Vec<String>>,
    override_name: &'static str,
}

impl Recorder {
    fn new(override_name: &'static str) -> Self {
        Recorder {
            consulted: Mutex::new(Vec::new()),
            override_name,
        }
    }
}

impl CopyDelegate for Recorder {
    fn resolve_attribute(
        &self,
        source: &dyn Reflective,
        name: &str,
        _copied: Value,
    ) -> Option<Value> {
        assert_eq!(source.type_name(), "Record");
        self.consulted.lock().unwrap().push(name.to_string());
        (name == self.override_name).then(|| Value::Str("from delegate".into()))
    }
}

#[test]
fn delegate_overrides_and_sees_the_source() {
    let source = sample();
    let delegate = Recorder::new("note");
    let copy = source.auto_copy_with_delegate(&delegate).unwrap();
    assert_eq!(copy.note, "from delegate");
    assert_eq!(copy.name, "Ann");
    assert_eq!(
        *delegate.consulted.lock().unwrap(),
        vec!["name", "note", "rating"]
    );
}

#[test]
fn declined_callback_falls_through_to_delegate() {
    let source = sample();
    let callback = |name: &str, _: Value| -> Option<Value> {
        (name == "name").then(|| Value::Str("from callback".into()))
    };
    let delegate = Recorder::new("note");
    let config = CopyConfig::new()
        .with_callback(&callback)
        .with_delegate(&delegate);
    let copy = source.auto_copy_configured(&config).unwrap();

    // Callback won `name`; the delegate was never consulted for it.
    assert_eq!(copy.name, "from callback");
    assert!(!delegate.consulted.lock().unwrap().contains(&"name".into()));

    // Callback declined `note`; the delegate's answer was used.
    assert_eq!(copy.note, "from delegate");

    // Both hooks declined `rating`; the default copy was assigned.
    assert_eq!(copy.rating, 4);
}
