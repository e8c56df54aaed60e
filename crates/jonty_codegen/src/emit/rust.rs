//! Rust backend.
//!
//! # Generated Code Pattern
//!
//! ```rust,ignore
//! // Generated code by jonty. Do not modify!
//!
//! #[allow(non_camel_case_types)]
//! pub struct Example_Fielder;
//!
//! impl Example_Fielder {
//!     pub const FIELDS: &'static [&'static str] = &["a", "b", "c"];
//!     pub const COMPANION: ::jonty::Companion =
//!         ::jonty::Companion::new("app::Example_Fielder", "app::Example", Self::FIELDS);
//!     pub fn fields() -> &'static [&'static str] { Self::FIELDS }
//! }
//! ```

use jonty_core::{Identity, NESTING_SEPARATOR};
use proc_macro2::{Ident, TokenStream as QuoteStream};
use quote::{format_ident, quote};

use super::{EmitOptions, Emitter, GeneratedArtifact, IndexEntry, MARKER, Syntax};
use crate::descriptor::GeneratorDescriptor;
use crate::error::{Error, Result};

/// Emits Rust source formatted with `prettyplease`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustEmitter;

impl Emitter for RustEmitter {
    fn syntax(&self) -> Syntax {
        Syntax::Rust
    }

    fn emit(
        &self,
        descriptor: &GeneratorDescriptor,
        options: &EmitOptions,
    ) -> Result<GeneratedArtifact> {
        let unit = descriptor.source().to_string();
        let contents = render_file(companion_tokens(descriptor, options), &unit)?;

        Ok(GeneratedArtifact {
            package: descriptor.companion().package_path(),
            name: descriptor.companion().name().to_owned(),
            file_name: super::file_name(descriptor, Syntax::Rust),
            contents,
        })
    }

    fn index(
        &self,
        entries: &[IndexEntry<'_>],
        options: &EmitOptions,
    ) -> Result<GeneratedArtifact> {
        let runtime = &options.runtime;
        let mut modules = ModuleTree::default();
        let mut companions = Vec::with_capacity(entries.len());

        for entry in entries {
            let companion = entry.descriptor.companion();
            let package = companion.package();
            let relative = package.strip_prefix(options.package.as_slice()).unwrap_or(package);

            modules.insert(relative, &entry.artifact.file_name);

            let path = relative
                .iter()
                .map(|segment| module_ident(segment))
                .collect::<Result<Vec<_>>>()?;
            let ident = format_ident!("{}", companion.name());
            companions.push(quote! { #(#path::)* #ident::COMPANION });
        }

        let includes = modules.tokens()?;
        let tokens = quote! {
            #includes

            /// Every fielder generated in this round, in discovery order.
            pub const COMPANIONS: &[#runtime::Companion] = &[#(#companions),*];
        };

        Ok(GeneratedArtifact {
            package: String::new(),
            name: "COMPANIONS".to_owned(),
            file_name: super::index_file_name(Syntax::Rust),
            contents: render_file(tokens, "index")?,
        })
    }
}

/// Index includes grouped by package, one module per segment below the
/// index root. Children keep discovery order.
#[derive(Debug, Default)]
struct ModuleTree<'a> {
    includes: Vec<&'a str>,
    children: Vec<(&'a str, ModuleTree<'a>)>,
}

impl<'a> ModuleTree<'a> {
    fn insert(&mut self, package: &'a [String], file: &'a str) {
        let Some((head, rest)) = package.split_first() else {
            self.includes.push(file);
            return;
        };

        let idx = match self.children.iter().position(|(name, _)| *name == head.as_str()) {
            Some(idx) => idx,
            None => {
                self.children.push((head.as_str(), ModuleTree::default()));
                self.children.len() - 1
            }
        };
        self.children[idx].1.insert(rest, file);
    }

    fn tokens(&self) -> Result<QuoteStream> {
        let includes = self.includes.iter().map(|file| quote! { include!(#file); });

        let mut children = Vec::with_capacity(self.children.len());
        for (name, tree) in &self.children {
            let ident = module_ident(name)?;
            let body = tree.tokens()?;
            children.push(quote! {
                pub mod #ident {
                    #body
                }
            });
        }

        Ok(quote! {
            #(#includes)*
            #(#children)*
        })
    }
}

/// Module names come from unrawed source idents, so keywords need `r#`.
fn module_ident(name: &str) -> Result<Ident> {
    syn::parse_str::<Ident>(name)
        .or_else(|_| syn::parse_str::<Ident>(&format!("r#{name}")))
        .map_err(|err| Error::Render {
            unit: "index".to_owned(),
            message: format!("`{name}` is not a module name: {err}"),
        })
}

/// Tokens of the fielder struct for `descriptor`.
///
/// The derive macros splice these directly into the expansion.
pub fn companion_tokens(descriptor: &GeneratorDescriptor, options: &EmitOptions) -> QuoteStream {
    let runtime = &options.runtime;
    let vis = &options.visibility;
    let ident = format_ident!("{}", descriptor.companion().name());
    let names: Vec<&str> = descriptor.names().iter().map(String::as_str).collect();
    let companion_name = qualified(descriptor.companion(), options);
    let source_name = qualified(descriptor.source(), options);

    let docs = if options.debuggable {
        let summary = format!(" Field names of `{}`.", descriptor.source());
        let listing = if names.is_empty() {
            " No declared fields.".to_owned()
        } else {
            let quoted: Vec<String> = names.iter().map(|name| format!("`{name}`")).collect();
            format!(" Fields: {}.", quoted.join(", "))
        };
        let marker = format!(" {MARKER}");
        quote! {
            #[doc = #summary]
            #[doc = ""]
            #[doc = #listing]
            #[doc = ""]
            #[doc = #marker]
        }
    } else {
        quote! { #[doc(hidden)] }
    };

    quote! {
        #docs
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #vis struct #ident;

        #[allow(dead_code)]
        impl #ident {
            /// Declared field names, sorted.
            pub const FIELDS: &'static [&'static str] = &[#(#names),*];

            /// Runtime handle of this fielder.
            pub const COMPANION: #runtime::Companion =
                #runtime::Companion::new(#companion_name, #source_name, Self::FIELDS);

            /// Declared field names, sorted.
            pub fn fields() -> &'static [&'static str] {
                Self::FIELDS
            }
        }
    }
}

/// Qualified name of `identity` as a `&'static str` expression.
fn qualified(identity: &Identity, options: &EmitOptions) -> QuoteStream {
    if options.module_relative {
        let separator = NESTING_SEPARATOR.to_string();
        let mut local = identity.nested().join(separator.as_str());
        if !local.is_empty() {
            local.push(NESTING_SEPARATOR);
        }
        local.push_str(identity.name());
        quote! { ::core::concat!(::core::module_path!(), "::", #local) }
    } else {
        let text = identity.to_string();
        quote! { #text }
    }
}

fn render_file(tokens: QuoteStream, unit: &str) -> Result<String> {
    let file: syn::File = syn::parse2(tokens).map_err(|err| Error::Render {
        unit: unit.to_owned(),
        message: err.to_string(),
    })?;

    Ok(format!("// {MARKER}\n\n{}", prettyplease::unparse(&file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::NameSet;

    fn descriptor(names: &[&str]) -> GeneratorDescriptor {
        GeneratorDescriptor::build(
            Identity::new(["com", "test", "app"], "Example"),
            names.iter().copied().collect::<NameSet>(),
        )
    }

    #[test]
    fn test_emit_sorted_literals() {
        let artifact = RustEmitter
            .emit(&descriptor(&["c", "a", "b"]), &EmitOptions::default())
            .unwrap();
        assert!(artifact.contents.starts_with("// Generated code by jonty. Do not modify!"));
        assert!(artifact.contents.contains(r#"&["a", "b", "c"]"#));
        assert!(artifact.contents.contains("pub struct Example_Fielder;"));
        assert!(
            artifact
                .contents
                .contains(r#""com::test::app::Example_Fielder""#)
        );
        assert_eq!(artifact.name, "Example_Fielder");
        assert_eq!(artifact.package, "com::test::app");
        assert_eq!(artifact.file_name, "com.test.app.Example_Fielder.rs");
    }

    #[test]
    fn test_emit_empty_still_has_accessor() {
        let artifact = RustEmitter
            .emit(&descriptor(&[]), &EmitOptions::default())
            .unwrap();
        assert!(artifact.contents.contains("pub const FIELDS: &'static [&'static str] = &[];"));
        assert!(artifact.contents.contains("pub fn fields()"));
        assert!(artifact.contents.contains("No declared fields."));
    }

    #[test]
    fn test_debuggable_off_hides_fielder() {
        let options = EmitOptions {
            debuggable: false,
            ..EmitOptions::default()
        };
        let artifact = RustEmitter.emit(&descriptor(&["a"]), &options).unwrap();
        assert!(artifact.contents.contains("#[doc(hidden)]"));
        assert!(!artifact.contents.contains("Field names of"));
    }

    #[test]
    fn test_module_relative_names() {
        let options = EmitOptions {
            module_relative: true,
            ..EmitOptions::default()
        };
        let nested = GeneratorDescriptor::build(
            Identity::new(Vec::<String>::new(), "Inner").nested_in(["Outer"]),
            NameSet::new(),
        );
        let tokens = companion_tokens(&nested, &options).to_string();
        assert!(tokens.contains("module_path"));
        assert!(tokens.contains(r#""Outer.Inner""#));
        assert!(tokens.contains(r#""Outer_Inner_Fielder""#));
    }

    fn index_of(descriptors: &[GeneratorDescriptor], options: &EmitOptions) -> GeneratedArtifact {
        let artifacts: Vec<GeneratedArtifact> = descriptors
            .iter()
            .map(|descriptor| RustEmitter.emit(descriptor, options).unwrap())
            .collect();
        let entries: Vec<IndexEntry<'_>> = descriptors
            .iter()
            .zip(&artifacts)
            .map(|(descriptor, artifact)| IndexEntry { descriptor, artifact })
            .collect();
        RustEmitter.index(&entries, options).unwrap()
    }

    #[test]
    fn test_index_lists_companions() {
        let second = GeneratorDescriptor::build(
            Identity::new(["com", "test", "app"], "Empty"),
            NameSet::new(),
        );
        let options = EmitOptions {
            package: vec!["com".to_owned(), "test".to_owned(), "app".to_owned()],
            ..EmitOptions::default()
        };

        let index = index_of(&[descriptor(&["a"]), second], &options);

        assert_eq!(index.file_name, "jonty_fielders.rs");
        assert!(index.contents.contains(r#"include!("com.test.app.Example_Fielder.rs");"#));
        assert!(!index.contents.contains("pub mod"));
        let first_pos = index.contents.find("Example_Fielder::COMPANION").unwrap();
        let second_pos = index.contents.find("Empty_Fielder::COMPANION").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn test_index_nests_packages_below_root() {
        let root = GeneratorDescriptor::build(Identity::new(["app"], "Item"), NameSet::new());
        let first = GeneratorDescriptor::build(Identity::new(["app", "a"], "Item"), NameSet::new());
        let second =
            GeneratorDescriptor::build(Identity::new(["app", "a"], "Other"), NameSet::new());
        let keyword =
            GeneratorDescriptor::build(Identity::new(["app", "type"], "Item"), NameSet::new());
        let options = EmitOptions {
            package: vec!["app".to_owned()],
            ..EmitOptions::default()
        };

        let index = index_of(&[root, first, second, keyword], &options);
        let file = syn::parse_file(&index.contents).unwrap();

        // One module per package, shared by its fielders
        let modules: Vec<String> = file
            .items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Mod(module) => Some(module.ident.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(modules, ["a", "r#type"]);

        assert!(index.contents.contains("Item_Fielder::COMPANION,"));
        assert!(index.contents.contains("a::Item_Fielder::COMPANION"));
        assert!(index.contents.contains("a::Other_Fielder::COMPANION"));
        assert!(index.contents.contains("r#type::Item_Fielder::COMPANION"));
        assert!(index.contents.contains(r#"include!("app.a.Item_Fielder.rs");"#));
    }

    #[test]
    fn test_index_outside_root_keeps_full_package() {
        let options = EmitOptions {
            package: vec!["app".to_owned()],
            ..EmitOptions::default()
        };
        let index = index_of(
            &[GeneratorDescriptor::build(Identity::new(["other"], "Item"), NameSet::new())],
            &options,
        );
        assert!(index.contents.contains("other::Item_Fielder::COMPANION"));
    }
}
