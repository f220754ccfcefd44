//! Procedural macros for the polydraw crate
//!
//! ## Example
//!
//! ```ignore
//! use polydraw::Drawable;
//!
//! #[derive(Drawable)]
//! #[drawable(label = "my_class_t")]
//! struct MyClass;
//!
//! #[derive(Drawable)]
//! #[drawable(display)]
//! struct Celsius(f32);
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod common;
mod user;

/// Derive `polydraw::Drawable` as one line of text.
///
/// # Options
///
/// - no attribute: draws the type's name
/// - `#[drawable(label = "text")]`: draws `text`
/// - `#[drawable(display)]`: draws the `Display` form
/// - `#[drawable(debug)]`: draws the `Debug` form
///
/// Generic types get the bounds their formatting needs from their own where
/// clause; the derive adds none.
#[proc_macro_derive(Drawable, attributes(drawable))]
pub fn derive_drawable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_drawable(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
