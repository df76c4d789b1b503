//! Customize a copy per attribute: ignore-list, callback, delegate.
//!
//! Run with: `cargo run --example override_hooks`

use autocopy::prelude::*;

#[derive(Debug, Default, Reflective)]
struct Ticket {
    subject: String,
    body: String,
    assignee: String,
}

struct Anonymizer;

impl CopyDelegate for Anonymizer {
    fn resolve_attribute(
        &self,
        _source: &dyn Reflective,
        name: &str,
        _copied: Value,
    ) -> Option<Value> {
        (name == "assignee").then(|| Value::Str("<unassigned>".into()))
    }
}

fn main() -> Result<(), CopyError> {
    let source = Ticket {
        subject: "Login broken".into(),
        body: "Repro steps attached.".into(),
        assignee: "ann".into(),
    };

    // Skip an attribute entirely: it keeps its post-construction default.
    let without_body = source.auto_copy_ignoring(&["body"])?;
    println!("ignored body: {without_body:?}");

    // Rewrite one attribute through a callback; `None` means "keep the
    // default copy" for everything else.
    let callback = |name: &str, _: Value| -> Option<Value> {
        (name == "subject").then(|| Value::Str("[triaged] Login broken".into()))
    };
    let retitled = source.auto_copy_with_callback(&callback)?;
    println!("retitled: {retitled:?}");

    // Same contract, delegate-shaped.
    let anonymized = source.auto_copy_with_delegate(&Anonymizer)?;
    println!("anonymized: {anonymized:?}");

    Ok(())
}
