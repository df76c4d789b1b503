//! Copy a record without hand-writing a copy routine.
//!
//! Run with: `cargo run --example basic_copy`

use autocopy::prelude::*;

#[derive(Debug, Default, Reflective)]
struct Profile {
    name: String,
    city: String,
    logins: u32,
}

fn main() -> Result<(), CopyError> {
    let source = Profile {
        name: "Ann".into(),
        city: "Oslo".into(),
        logins: 41,
    };

    let copy = source.auto_copy()?;
    println!("source: {source:?}");
    println!("copy:   {copy:?}");

    // The copy is a fully independent instance.
    let mut renamed = source.auto_copy()?;
    renamed.name = "Bea".into();
    println!("renamed copy: {renamed:?} (source untouched: {source:?})");

    Ok(())
}
