//! Source front-end: discovers `#[jonty(fieldable)]` types in Rust files.
//!
//! Inline modules extend the package, so `mod shapes { ... }` inside a file
//! scanned with package `app::model` yields units in `app::model::shapes`,
//! matching what `module_path!()` reports at runtime. Inherent `impl` blocks
//! declared next to a type contribute its non-field members.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use jonty_core::Identity;
use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Fields, FnArg, Ident, ImplItem, Item, ItemImpl, ReturnType, Type};
use tracing::{debug, trace};

use crate::attr::{JontyAttr, is_marked_fieldable};
use crate::error::{Error, Result, SourceContext};
use crate::scan::Candidate;
use crate::unit::{FieldableUnit, Member, MemberKind};

/// A parsed source file.
#[derive(Debug)]
pub struct SourceFile {
    context: Arc<SourceContext>,
    package: Vec<String>,
}

impl SourceFile {
    /// Wrap already loaded contents.
    pub fn new(path: impl AsRef<Path>, contents: impl Into<String>, package: &[String]) -> Self {
        Self {
            context: SourceContext::new(path.as_ref(), contents),
            package: package.to_vec(),
        }
    }

    /// Read a file from disk.
    pub fn read(path: impl AsRef<Path>, package: &[String]) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path, contents, package))
    }

    /// Every item marked `#[jonty(fieldable)]`, in source order.
    pub fn candidates(&self) -> Result<Vec<SourceCandidate>> {
        let file = syn::parse_file(&self.context.contents)
            .map_err(|err| Error::source_parse(&self.context, &err))?;

        let mut found = Vec::new();
        walk(&file.items, &self.package, &self.context, &mut found);
        debug!(
            path = %self.context.path.display(),
            candidates = found.len(),
            "scanned source file"
        );
        Ok(found)
    }
}

fn walk(
    items: &[Item],
    package: &[String],
    context: &Arc<SourceContext>,
    found: &mut Vec<SourceCandidate>,
) {
    for item in items {
        let (ident, attrs) = match item {
            Item::Struct(item) => (&item.ident, &item.attrs),
            Item::Enum(item) => (&item.ident, &item.attrs),
            Item::Union(item) => (&item.ident, &item.attrs),
            Item::Mod(module) => {
                if let Some((_, content)) = &module.content {
                    let mut nested = package.to_vec();
                    nested.push(module.ident.unraw().to_string());
                    walk(content, &nested, context, found);
                }
                continue;
            }
            _ => continue,
        };

        if !is_marked_fieldable(attrs) {
            continue;
        }

        trace!(item = %ident, "found fieldable item");
        found.push(SourceCandidate {
            context: Arc::clone(context),
            package: package.to_vec(),
            item: item.clone(),
            impls: inherent_impls(items, ident),
        });
    }
}

/// Inherent impl blocks for `ident` among sibling items.
fn inherent_impls(items: &[Item], ident: &Ident) -> Vec<ItemImpl> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Impl(block) if block.trait_.is_none() && self_type_is(&block.self_ty, ident) => {
                Some(block.clone())
            }
            _ => None,
        })
        .collect()
}

fn self_type_is(ty: &Type, ident: &Ident) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == *ident),
        _ => false,
    }
}

/// A marked item plus the inherent impls declared beside it.
#[derive(Debug, Clone)]
pub struct SourceCandidate {
    context: Arc<SourceContext>,
    package: Vec<String>,
    item: Item,
    impls: Vec<ItemImpl>,
}

impl SourceCandidate {
    fn ident(&self) -> Option<&Ident> {
        match &self.item {
            Item::Struct(item) => Some(&item.ident),
            Item::Enum(item) => Some(&item.ident),
            Item::Union(item) => Some(&item.ident),
            _ => None,
        }
    }

    fn attrs(&self) -> &[Attribute] {
        match &self.item {
            Item::Struct(item) => &item.attrs,
            Item::Enum(item) => &item.attrs,
            Item::Union(item) => &item.attrs,
            _ => &[],
        }
    }

    fn identity(&self) -> Identity {
        let name = self
            .ident()
            .map_or_else(String::new, |ident| ident.unraw().to_string());
        Identity::new(self.package.iter().cloned(), name)
    }

    fn error_at(&self, span: Span, message: &str, help: &str) -> Error {
        Error::unit_parse_at(self.describe(), message, help, &self.context, span)
    }

    fn impl_members(&self, ident: &Ident) -> Vec<Member> {
        let mut members = Vec::new();

        for block in &self.impls {
            for impl_item in &block.items {
                let member = match impl_item {
                    ImplItem::Const(item) => {
                        Member::new(item.ident.unraw().to_string(), MemberKind::StaticField)
                    }
                    ImplItem::Type(item) => {
                        Member::new(item.ident.unraw().to_string(), MemberKind::NestedType)
                    }
                    ImplItem::Fn(item) => {
                        let has_receiver =
                            matches!(item.sig.inputs.first(), Some(FnArg::Receiver(_)));
                        let kind = if !has_receiver && returns_self(&item.sig.output, ident) {
                            MemberKind::Constructor
                        } else {
                            MemberKind::Method
                        };
                        Member::new(item.sig.ident.unraw().to_string(), kind)
                    }
                    _ => continue,
                };
                members.push(member);
            }
        }

        members
    }
}

/// Field members of a struct body. Tuple fields are named by position.
pub fn field_members(fields: &Fields) -> Vec<Member> {
    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|field| field.ident.as_ref())
            .map(|ident| Member::field(ident.unraw().to_string()))
            .collect(),
        Fields::Unnamed(unnamed) => (0..unnamed.unnamed.len())
            .map(|idx| Member::field(idx.to_string()))
            .collect(),
        Fields::Unit => Vec::new(),
    }
}

fn returns_self(output: &ReturnType, ident: &Ident) -> bool {
    match output {
        ReturnType::Default => false,
        ReturnType::Type(_, ty) => match ty.as_ref() {
            Type::Path(path) => path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == "Self" || segment.ident == *ident),
            _ => false,
        },
    }
}

impl Candidate for SourceCandidate {
    fn describe(&self) -> String {
        self.identity().to_string()
    }

    fn error(&self, message: &str, help: &str) -> Error {
        self.error_at(self.item.span(), message, help)
    }

    fn parse(&self) -> Result<FieldableUnit> {
        let item = match &self.item {
            Item::Struct(item) => item,
            Item::Enum(item) => {
                return Err(self.error_at(
                    item.enum_token.span(),
                    "enums are not fieldable",
                    "only structs can be marked #[jonty(fieldable)]",
                ));
            }
            Item::Union(item) => {
                return Err(self.error_at(
                    item.union_token.span(),
                    "unions are not fieldable",
                    "only structs can be marked #[jonty(fieldable)]",
                ));
            }
            other => {
                return Err(self.error_at(
                    other.span(),
                    "item is not fieldable",
                    "only structs can be marked #[jonty(fieldable)]",
                ));
            }
        };

        let attr = JontyAttr::from_attrs(self.attrs()).map_err(|err| {
            self.error_at(
                err.span(),
                &err.to_string(),
                "supported options are `extends = Path`, `debuggable` and `fieldable`",
            )
        })?;

        let mut members = field_members(&item.fields);
        members.extend(self.impl_members(&item.ident));

        Ok(FieldableUnit::new(self.identity(), members).with_superclasses(attr.superclasses()))
    }
}
