//! End-to-end copies: flat records, collection attributes, the native-copy
//! fast path, and object-valued attributes.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use autocopy::{AutoCopy, NativeCopy, Reflective, Value, auto_copy_as, introspect};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, PartialEq, Reflective)]
struct Contact {
    name: String,
    note: String,
}

#[test]
fn copies_flat_record() {
    let source = Contact {
        name: "Ann".into(),
        note: "x".into(),
    };
    let copy = source.auto_copy().unwrap();
    assert_eq!(copy, source);
}

#[test]
fn copy_is_independent_of_source() {
    let source = Contact {
        name: "Ann".into(),
        note: "x".into(),
    };
    let mut copy = source.auto_copy().unwrap();
    copy.name.push_str("-edited");
    assert_eq!(source.name, "Ann");
    assert_eq!(copy.name, "Ann-edited");
}

#[test]
fn copy_matches_attribute_by_attribute() {
    let source = Contact {
        name: "Ann".into(),
        note: "x".into(),
    };
    let copy = auto_copy_as(&source).unwrap();
    for descriptor in introspect::enumerate(&source) {
        assert_eq!(copy.get(descriptor.name), source.get(descriptor.name));
    }
}

#[derive(Debug, Default, PartialEq, Reflective)]
struct Inventory {
    count: u32,
    prices: Vec<f64>,
    labels: BTreeMap<String, String>,
    comment: Option<String>,
}

#[test]
fn copies_collections_and_options() {
    let mut labels = BTreeMap::new();
    labels.insert("sku".to_string(), "A-1".to_string());
    let source = Inventory {
        count: 12,
        prices: vec![1.25, 9.99],
        labels,
        comment: Some("fragile".into()),
    };
    let copy = source.auto_copy().unwrap();
    assert_eq!(copy, source);

    let empty = Inventory::default();
    let copy = empty.auto_copy().unwrap();
    assert_eq!(copy.comment, None);
}

// A type with its own complete copy semantics. The engine must return the
// type's copy verbatim and never fall back to the attribute walk.
#[derive(Debug, Default, PartialEq, Reflective)]
struct Stamped {
    label: String,
}

impl NativeCopy for Stamped {
    fn native_copy(&self) -> Self {
        Stamped {
            label: format!("{}*", self.label),
        }
    }
}

#[test]
fn native_copy_takes_precedence() {
    let source = Stamped { label: "a".into() };
    let copy = source.auto_copy().unwrap();
    assert_eq!(copy.label, "a*");
}

#[test]
fn native_copy_never_consults_hooks() {
    let source = Stamped { label: "a".into() };
    let calls = AtomicUsize::new(0);
    let callback = |_: &str, _: Value| -> Option<Value> {
        calls.fetch_add(1, Ordering::SeqCst);
        None
    };
    let copy = source.auto_copy_with_callback(&callback).unwrap();
    assert_eq!(copy.label, "a*");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[derive(Debug, Default, PartialEq, Reflective)]
struct Badge {
    id: i64,
}

#[derive(Debug, Default, PartialEq, Reflective)]
struct Tag {
    text: String,
}

impl NativeCopy for Tag {
    fn native_copy(&self) -> Self {
        Tag {
            text: self.text.clone(),
        }
    }
}

#[derive(Debug, Default, Reflective)]
struct Person {
    badge: Arc<Badge>,
    tag: Arc<Tag>,
}

#[test]
fn object_attributes_share_or_duplicate_by_capability() {
    let source = Person {
        badge: Arc::new(Badge { id: 7 }),
        tag: Arc::new(Tag { text: "hi".into() }),
    };
    let copy = source.auto_copy().unwrap();

    // No copy capability: the handle is shared, identity preserved.
    assert!(Arc::ptr_eq(&source.badge, &copy.badge));
    // Copy capability: an independent duplicate with equal contents.
    assert!(!Arc::ptr_eq(&source.tag, &copy.tag));
    assert_eq!(*copy.tag, *source.tag);
}

#[test]
fn enumeration_is_stable_across_calls() {
    let source = Inventory::default();
    let first: Vec<&str> = introspect::enumerate(&source)
        .iter()
        .map(|descriptor| descriptor.name)
        .collect();
    let second: Vec<&str> = introspect::enumerate(&source)
        .iter()
        .map(|descriptor| descriptor.name)
        .collect();
    assert_eq!(first, vec!["count", "prices", "labels", "comment"]);
    assert_eq!(first, second);
}
