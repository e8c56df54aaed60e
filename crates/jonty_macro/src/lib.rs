//! # jonty_macro
//!
//! This crate provides the `#[derive(Fieldable)]` and `#[derive(Class)]`
//! procedural macros. Use them through the `jonty` crate, which re-exports
//! both together with the runtime types the expansion refers to.
//!
//! ## Module Structure
//!
//! - `expand` - Expansion orchestration and shape validation
//! - `expand::class` - The `jonty::Class` impl
//! - `expand::fielder` - The companion fielder, rendered by `jonty_codegen`

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod expand;

use expand::{Derive, Expander};

/// Derive a fielder listing the struct's declared field names.
///
/// Generates a companion unit struct `<Name>_Fielder` next to the type and
/// implements `jonty::Class`, linking the class to its fielder.
///
/// # Attributes
///
/// - `#[jonty(extends = Parent)]` - Immediate superclass, which must
///   implement `jonty::Class`
/// - `#[jonty(debuggable = false)]` - Hide the fielder from rustdoc
///
/// # Example
///
/// ```ignore
/// use jonty::{Class, Fieldable};
///
/// #[derive(Class)]
/// struct Base;
///
/// #[derive(Fieldable)]
/// #[jonty(extends = Base)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// assert_eq!(Point_Fielder::FIELDS, &["x", "y"]);
/// assert_eq!(jonty::fields_of::<Point>().unwrap(), &["x", "y"]);
/// ```
///
/// # Generated Code
///
/// 1. `struct Point_Fielder` with `FIELDS`, `COMPANION` and `fields()`
/// 2. `impl jonty::Class for Point`
#[proc_macro_derive(Fieldable, attributes(jonty))]
pub fn derive_fieldable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    Expander::expand(&input, Derive::Fieldable)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Declare a class without a fielder of its own.
///
/// Field lookups on such a class resolve through its superclass chain. Types
/// listed in a `#[jonty(fieldable)]` source file use this derive and get their
/// fielder from the build script instead.
///
/// # Attributes
///
/// - `#[jonty(extends = Parent)]` - Immediate superclass
/// - `#[jonty(fieldable)]` - Marker for `jonty_codegen::Generator`, ignored here
#[proc_macro_derive(Class, attributes(jonty))]
pub fn derive_class(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    Expander::expand(&input, Derive::Class)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
