//! Code Emitters.
//!
//! An [`Emitter`] renders a [`GeneratorDescriptor`] into a
//! [`GeneratedArtifact`]. Emitters never write; artifacts are handed to a
//! [`crate::Writer`] by the scan driver.
//!
//! | Backend | Output |
//! |---------|--------|
//! | [`RustEmitter`] | Rust fielder struct with a sorted `FIELDS` constant |
//! | [`ManifestEmitter`] | JSON document describing the fielder |

mod manifest;
mod rust;

pub use manifest::ManifestEmitter;
pub use rust::{RustEmitter, companion_tokens};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use syn::{Path, Visibility, parse_quote};

use crate::descriptor::GeneratorDescriptor;
use crate::error::{Error, Result};

/// Marker carried by every generated artifact.
pub const MARKER: &str = "Generated code by jonty. Do not modify!";

/// Rendered companion, ready for a writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Package of the companion, `::` separated.
    pub package: String,
    /// Simple name of the companion.
    pub name: String,
    /// File name relative to the output root.
    pub file_name: String,
    /// Rendered contents.
    pub contents: String,
}

/// One emitted fielder, as listed by an index artifact.
#[derive(Debug, Clone, Copy)]
pub struct IndexEntry<'a> {
    /// Descriptor the artifact was rendered from.
    pub descriptor: &'a GeneratorDescriptor,
    /// The rendered artifact.
    pub artifact: &'a GeneratedArtifact,
}

/// Options shared by all emitters.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Document the fielder (source, field list) instead of hiding it.
    pub debuggable: bool,
    /// Qualify names with `module_path!()` at the expansion site instead of
    /// the descriptor's package. Used by the derive macros, which cannot see
    /// the module path.
    pub module_relative: bool,
    /// Visibility of the generated fielder.
    pub visibility: Visibility,
    /// Path of the runtime crate.
    pub runtime: Path,
    /// Package the index is rooted at. Fielders in packages below it are
    /// placed in nested modules of the index.
    pub package: Vec<String>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            debuggable: true,
            module_relative: false,
            visibility: parse_quote!(pub),
            runtime: parse_quote!(::jonty),
            package: Vec::new(),
        }
    }
}

/// Renders descriptors in one output syntax.
pub trait Emitter {
    /// Output syntax of this backend.
    fn syntax(&self) -> Syntax;

    /// Render the fielder for one descriptor.
    fn emit(
        &self,
        descriptor: &GeneratorDescriptor,
        options: &EmitOptions,
    ) -> Result<GeneratedArtifact>;

    /// Render the artifact listing every fielder of a round.
    fn index(&self, entries: &[IndexEntry<'_>], options: &EmitOptions)
    -> Result<GeneratedArtifact>;
}

/// Available output syntaxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Syntax {
    /// Rust source.
    #[default]
    Rust,
    /// JSON manifest.
    Manifest,
}

impl Syntax {
    /// The emitter for this syntax.
    pub fn emitter(self) -> Box<dyn Emitter> {
        match self {
            Syntax::Rust => Box::new(RustEmitter),
            Syntax::Manifest => Box::new(ManifestEmitter),
        }
    }

    /// Extension of generated files.
    pub fn extension(self) -> &'static str {
        match self {
            Syntax::Rust => "rs",
            Syntax::Manifest => "json",
        }
    }
}

impl Display for Syntax {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Syntax::Rust => f.write_str("rust"),
            Syntax::Manifest => f.write_str("manifest"),
        }
    }
}

impl FromStr for Syntax {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(Syntax::Rust),
            "manifest" | "json" => Ok(Syntax::Manifest),
            _ => Err(Error::Config {
                key: crate::config::SYNTAX_ENV,
                value: s.to_owned(),
                help: "expected `rust` or `manifest`".to_owned(),
            }),
        }
    }
}

/// File name of a companion: its qualified name with `::` replaced by `.`.
pub(crate) fn file_name(descriptor: &GeneratorDescriptor, syntax: Syntax) -> String {
    format!(
        "{}.{}",
        descriptor.companion().to_string().replace("::", "."),
        syntax.extension()
    )
}

/// File name of the index artifact.
pub fn index_file_name(syntax: Syntax) -> String {
    format!("jonty_fielders.{}", syntax.extension())
}
