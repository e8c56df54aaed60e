//! Companion fielder generation.
//!
//! The fielder is rendered by `jonty_codegen`'s Rust backend with
//! module-relative names, since a derive cannot see its own module path.

use jonty_codegen::{
    DescriptorBuilder, EmitOptions, FieldableUnit, GeneratorDescriptor, Identity, JontyAttr,
    collect, emit, field_members,
};
use proc_macro2::TokenStream as QuoteStream;
use quote::format_ident;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Ident, Path};

/// The fielder of one `#[derive(Fieldable)]` struct.
pub struct Fielder {
    descriptor: GeneratorDescriptor,
    options: EmitOptions,
    ident: Ident,
}

impl Fielder {
    pub fn new(input: &DeriveInput, attr: &JontyAttr, runtime: &Path) -> Self {
        let members = match &input.data {
            Data::Struct(data) => field_members(&data.fields),
            Data::Enum(_) | Data::Union(_) => Vec::new(),
        };

        let identity = Identity::new(Vec::<String>::new(), input.ident.unraw().to_string());
        let unit = FieldableUnit::new(identity, members)
            .with_superclasses(attr.superclasses());

        let mut builder = DescriptorBuilder::new(unit.identity().clone());
        for name in &collect(&unit) {
            builder.add_name(name.as_str());
        }
        for superclass in unit.superclasses() {
            builder.add_superclass(superclass.as_str());
        }
        let descriptor = builder.build();

        let options = EmitOptions {
            debuggable: attr.debuggable.unwrap_or(true),
            module_relative: true,
            visibility: input.vis.clone(),
            runtime: runtime.clone(),
            ..EmitOptions::default()
        };

        let ident = format_ident!("{}", descriptor.companion().name(), span = input.ident.span());

        Self {
            descriptor,
            options,
            ident,
        }
    }

    /// Ident of the generated fielder struct.
    pub fn ident(&self) -> &Ident {
        &self.ident
    }

    pub fn tokens(&self) -> QuoteStream {
        emit::companion_tokens(&self.descriptor, &self.options)
    }
}
