//! Parsing of the type-level `#[jonty(...)]` attribute.
//!
//! Shared by the derive macros and the source front-end so both accept
//! exactly the same options:
//!
//! | Option | Description |
//! |--------|-------------|
//! | `extends = Path` | Immediate superclass of the class |
//! | `debuggable` / `debuggable = bool` | Documented (default) or hidden fielder |
//! | `fieldable` | Marks the type for build-time generation by [`crate::Generator`] |

use proc_macro2::TokenTree;
use syn::{Attribute, LitBool, Meta, Path, Token};

/// Name of the helper attribute.
pub const ATTRIBUTE: &str = "jonty";

/// Parsed `#[jonty(...)]` options. Multiple attributes are merged.
#[derive(Debug, Clone, Default)]
pub struct JontyAttr {
    /// Immediate superclass.
    pub extends: Option<Path>,
    /// Explicit debuggable setting, `None` when not given.
    pub debuggable: Option<bool>,
    /// Whether the type is marked for build-time generation.
    pub fieldable: bool,
}

impl JontyAttr {
    /// Parse every `#[jonty(...)]` attribute in `attrs`.
    ///
    /// Unknown options and options given twice are errors.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTRIBUTE)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("extends") {
                    if parsed.extends.is_some() {
                        return Err(meta.error("duplicate `extends` option"));
                    }
                    parsed.extends = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("debuggable") {
                    if parsed.debuggable.is_some() {
                        return Err(meta.error("duplicate `debuggable` option"));
                    }
                    let value = if meta.input.peek(Token![=]) {
                        meta.value()?.parse::<LitBool>()?.value
                    } else {
                        true
                    };
                    parsed.debuggable = Some(value);
                } else if meta.path.is_ident("fieldable") {
                    if parsed.fieldable {
                        return Err(meta.error("duplicate `fieldable` option"));
                    }
                    parsed.fieldable = true;
                } else {
                    return Err(meta.error(format!(
                        "unknown jonty option `{}`; \
                         expected `extends`, `debuggable` or `fieldable`",
                        path_to_string(&meta.path)
                    )));
                }
                Ok(())
            })?;
        }

        Ok(parsed)
    }

    /// Superclass as written, e.g. `model::Parent`.
    pub fn superclasses(&self) -> Vec<String> {
        self.extends.iter().map(path_to_string).collect()
    }
}

/// Whether any `#[jonty(...)]` attribute carries the `fieldable` flag as
/// one of its top-level options.
///
/// Used for discovery; it tolerates malformed options so that the full
/// parse can report them against the unit.
pub fn is_marked_fieldable(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(ATTRIBUTE))
        .any(|attr| match &attr.meta {
            Meta::List(list) => {
                let tokens: Vec<TokenTree> = list.tokens.clone().into_iter().collect();
                tokens
                    .split(|tt| matches!(tt, TokenTree::Punct(punct) if punct.as_char() == ','))
                    .any(|option| {
                        matches!(option, [TokenTree::Ident(ident)] if ident == "fieldable")
                    })
            }
            _ => false,
        })
}

/// Render a path without generic arguments.
pub fn path_to_string(path: &Path) -> String {
    let segments: Vec<String> = path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect();
    let joined = segments.join("::");

    if path.leading_colon.is_some() {
        format!("::{joined}")
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn attrs(item: syn::ItemStruct) -> Vec<Attribute> {
        item.attrs
    }

    #[test]
    fn test_empty_without_attribute() {
        let parsed = JontyAttr::from_attrs(&attrs(parse_quote! {
            #[derive(Debug)]
            struct Example;
        }))
        .unwrap();
        assert!(parsed.extends.is_none());
        assert!(parsed.debuggable.is_none());
        assert!(!parsed.fieldable);
    }

    #[test]
    fn test_all_options() {
        let parsed = JontyAttr::from_attrs(&attrs(parse_quote! {
            #[jonty(extends = super::Parent, debuggable = false)]
            #[jonty(fieldable)]
            struct Example;
        }))
        .unwrap();
        assert_eq!(parsed.superclasses(), ["super::Parent"]);
        assert_eq!(parsed.debuggable, Some(false));
        assert!(parsed.fieldable);
    }

    #[test]
    fn test_bare_debuggable_is_true() {
        let parsed = JontyAttr::from_attrs(&attrs(parse_quote! {
            #[jonty(debuggable)]
            struct Example;
        }))
        .unwrap();
        assert_eq!(parsed.debuggable, Some(true));
    }

    #[test]
    fn test_duplicate_option_rejected() {
        let err = JontyAttr::from_attrs(&attrs(parse_quote! {
            #[jonty(extends = A)]
            #[jonty(extends = B)]
            struct Example;
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate `extends` option");
    }

    #[test]
    fn test_unknown_option_rejected() {
        let err = JontyAttr::from_attrs(&attrs(parse_quote! {
            #[jonty(merge)]
            struct Example;
        }))
        .unwrap_err();
        assert!(err.to_string().starts_with("unknown jonty option `merge`"));
    }

    #[test]
    fn test_marked_fieldable_tolerates_bad_options() {
        let item: syn::ItemStruct = parse_quote! {
            #[jonty(fieldable, bogus = 1)]
            struct Example;
        };
        assert!(is_marked_fieldable(&item.attrs));
        assert!(JontyAttr::from_attrs(&item.attrs).is_err());
    }

    #[test]
    fn test_fieldable_inside_a_path_is_not_a_mark() {
        let unmarked: syn::ItemStruct = parse_quote! {
            #[jonty(extends = fieldable::Base)]
            struct Example;
        };
        assert!(!is_marked_fieldable(&unmarked.attrs));

        let marked: syn::ItemStruct = parse_quote! {
            #[jonty(extends = fieldable::Base, fieldable)]
            struct Example;
        };
        assert!(is_marked_fieldable(&marked.attrs));
    }

    #[test]
    fn test_leading_colon_path() {
        let path: Path = parse_quote!(::app::model::Parent);
        assert_eq!(path_to_string(&path), "::app::model::Parent");
    }
}
