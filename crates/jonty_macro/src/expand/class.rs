//! `jonty::Class` impl generation.
//!
//! # Generated Code Pattern
//!
//! ```rust,ignore
//! #[automatically_derived]
//! impl ::jonty::Class for SubClass {
//!     const CLASS: &'static ::jonty::ClassInfo = &::jonty::ClassInfo::new(
//!         ::core::concat!(::core::module_path!(), "::", "SubClass"),
//!     )
//!     .extends(<Parent as ::jonty::Class>::CLASS)
//!     .with_companion(&SubClass_Fielder::COMPANION);
//! }
//! ```

use jonty_codegen::JontyAttr;
use proc_macro2::TokenStream as QuoteStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Ident, Path, parse_quote};

pub fn class_impl(
    input: &DeriveInput,
    attr: &JontyAttr,
    fielder: Option<&Ident>,
    runtime: &Path,
) -> QuoteStream {
    let ident = &input.ident;
    let name = ident.unraw().to_string();

    // `Class: 'static`, so generic parameters must be too
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(Self: 'static));
    }
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let superclass = attr.extends.as_ref().map(|parent| {
        quote! { .extends(<#parent as #runtime::Class>::CLASS) }
    });
    let companion = fielder.map(|fielder| {
        quote! { .with_companion(&#fielder::COMPANION) }
    });

    quote! {
        #[automatically_derived]
        impl #impl_generics #runtime::Class for #ident #type_generics #where_clause {
            const CLASS: &'static #runtime::ClassInfo = &#runtime::ClassInfo::new(
                ::core::concat!(::core::module_path!(), "::", #name)
            )
            #superclass
            #companion;
        }
    }
}
