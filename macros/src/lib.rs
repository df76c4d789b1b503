//! Procedural macros for the autocopy reflection system
//!
//! One derive, one job: generate the full `Reflective` implementation from a
//! struct's field list, wiring in the capability probes so that `Default`,
//! `NativeCopy`, and `AttributeExtension` are discovered at the expansion
//! site without any opt-in beyond implementing the trait.
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Debug, Default, Reflective)]
//! struct Document {
//!     #[reflective(base)]
//!     asset: Asset,
//!     title: String,
//!     #[reflective(readonly)]
//!     revision: u32,
//!     #[reflective(skip)]
//!     scratch: String,
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod reflective;

/// Derive macro implementing the `Reflective` trait for a struct with named
/// fields.
///
/// # Field attributes
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | `#[reflective(skip)]` | No attribute is declared for the field |
/// | `#[reflective(readonly)]` | Attribute is enumerated and readable, never assigned |
/// | `#[reflective(base)]` | Field is the ancestor object; at most one per struct |
///
/// Every other named field becomes a writable attribute whose type must
/// implement `AsValue` and `FromValue`.
#[proc_macro_derive(Reflective, attributes(reflective))]
pub fn derive_reflective(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    reflective::expand_derive_reflective(input).into()
}
