//! Macro expansion orchestration.
//!
//! Each derive invocation is a round of exactly one unit: the attribute is
//! parsed, the input shape validated, and the class impl (plus the fielder
//! for `Fieldable`) generated.

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;
use syn::{Data, DeriveInput, Path, parse_quote};

use jonty_codegen::JontyAttr;

mod class;
mod fielder;

/// Which derive is being expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derive {
    /// `#[derive(Fieldable)]`
    Fieldable,
    /// `#[derive(Class)]`
    Class,
}

/// Expands one derive input.
pub struct Expander;

impl Expander {
    pub fn expand(input: &DeriveInput, derive: Derive) -> syn::Result<QuoteStream> {
        let attr = JontyAttr::from_attrs(&input.attrs)?;
        let runtime = runtime_path();

        match derive {
            Derive::Class => Ok(class::class_impl(input, &attr, None, &runtime)),
            Derive::Fieldable => {
                validate_fieldable(input, &attr)?;

                let fielder = fielder::Fielder::new(input, &attr, &runtime);
                let fielder_tokens = fielder.tokens();
                let class_tokens =
                    class::class_impl(input, &attr, Some(fielder.ident()), &runtime);

                Ok(quote! {
                    #fielder_tokens
                    #class_tokens
                })
            }
        }
    }
}

/// Path of the runtime crate in generated code.
fn runtime_path() -> Path {
    parse_quote!(::jonty)
}

fn validate_fieldable(input: &DeriveInput, attr: &JontyAttr) -> syn::Result<()> {
    match &input.data {
        Data::Struct(_) => {}
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "enums are not fieldable; only structs can derive Fieldable",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "unions are not fieldable; only structs can derive Fieldable",
            ));
        }
    }

    if attr.fieldable {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`fieldable` marks a type for the build script generator; \
             use #[derive(Class)] with it, or drop it when deriving Fieldable",
        ));
    }

    Ok(())
}
