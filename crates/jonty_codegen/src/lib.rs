//! # jonty_codegen
//!
//! Build-time half of jonty. For every type marked `#[jonty(fieldable)]`
//! it collects the type's own field names, builds a descriptor and emits a
//! companion "fielder" listing those names.
//!
//! The same pipeline serves two front-ends:
//!
//! - the `#[derive(Fieldable)]` proc macro, which calls
//!   [`emit::companion_tokens`] directly, and
//! - the [`Generator`], which scans whole source files from a build script
//!   and writes one file per fielder plus an index.
//!
//! ## Pipeline
//!
//! | Stage | Type |
//! |-------|------|
//! | Discover | [`SourceFile`] / [`Candidate`] |
//! | Decompose | [`FieldableUnit`] |
//! | Collect | [`collect()`] → [`NameSet`] |
//! | Describe | [`GeneratorDescriptor`] |
//! | Render | [`Emitter`] ([`RustEmitter`], [`ManifestEmitter`]) |
//! | Store | [`Writer`] ([`FsWriter`], [`MemoryWriter`]) |
//!
//! Failures are per unit: one unit that cannot be parsed, rendered or written
//! is reported in the [`Report`] while its siblings are still generated.
//!
//! ## Example
//!
//! ```rust
//! use jonty_codegen::{Generator, MemoryWriter};
//!
//! let dir = std::env::temp_dir().join("jonty_codegen_doc");
//! std::fs::create_dir_all(&dir).unwrap();
//! let model = dir.join("model.rs");
//! std::fs::write(&model, "#[jonty(fieldable)]\npub struct Point { x: i32, y: i32 }\n").unwrap();
//!
//! let mut writer = MemoryWriter::new();
//! let report = Generator::new()
//!     .package("app::model")
//!     .file(&model)
//!     .generate_with(&mut writer)
//!     .unwrap();
//!
//! assert!(!report.has_errors());
//! assert!(writer.get("app.model.Point_Fielder.rs").is_some());
//! ```

pub mod attr;
pub mod collect;
pub mod config;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod generator;
pub mod scan;
pub mod source;
pub mod unit;
pub mod writer;

pub use attr::JontyAttr;
pub use collect::{NameSet, collect};
pub use config::Config;
pub use descriptor::{DescriptorBuilder, GeneratorDescriptor};
pub use emit::{
    EmitOptions, Emitter, GeneratedArtifact, ManifestEmitter, RustEmitter, Syntax,
};
pub use error::{Error, Location, Result, diagnostic_codes};
pub use generator::{Generator, Report};
pub use scan::{Candidate, Emission, Round, ScanDriver, WrittenArtifact};
pub use source::{SourceCandidate, SourceFile, field_members};
pub use unit::{FieldableUnit, Member, MemberKind};
pub use writer::{FsWriter, MemoryWriter, Writer};

pub use jonty_core::Identity;
