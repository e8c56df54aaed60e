//! JSON manifest backend, for tooling that consumes field lists without
//! compiling Rust.

use serde::Serialize;

use super::{EmitOptions, Emitter, GeneratedArtifact, IndexEntry, MARKER, Syntax};
use crate::descriptor::GeneratorDescriptor;
use crate::error::{Error, Result};

/// Emits one JSON document per fielder. Pretty-printed when debuggable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestEmitter;

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    generated: &'static str,
    companion: String,
    source: String,
    superclasses: &'a [String],
    fields: Vec<&'a str>,
}

impl<'a> Manifest<'a> {
    fn new(descriptor: &'a GeneratorDescriptor) -> Self {
        Self {
            generated: MARKER,
            companion: descriptor.companion().to_string(),
            source: descriptor.source().to_string(),
            superclasses: descriptor.superclasses(),
            fields: descriptor.names().iter().map(String::as_str).collect(),
        }
    }
}

fn to_json<T: Serialize>(value: &T, unit: &str, options: &EmitOptions) -> Result<String> {
    let rendered = if options.debuggable {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    rendered.map_err(|err| Error::Render {
        unit: unit.to_owned(),
        message: err.to_string(),
    })
}

impl Emitter for ManifestEmitter {
    fn syntax(&self) -> Syntax {
        Syntax::Manifest
    }

    fn emit(
        &self,
        descriptor: &GeneratorDescriptor,
        options: &EmitOptions,
    ) -> Result<GeneratedArtifact> {
        let unit = descriptor.source().to_string();

        Ok(GeneratedArtifact {
            package: descriptor.companion().package_path(),
            name: descriptor.companion().name().to_owned(),
            file_name: super::file_name(descriptor, Syntax::Manifest),
            contents: to_json(&Manifest::new(descriptor), &unit, options)?,
        })
    }

    fn index(
        &self,
        entries: &[IndexEntry<'_>],
        options: &EmitOptions,
    ) -> Result<GeneratedArtifact> {
        let manifests: Vec<Manifest<'_>> = entries
            .iter()
            .map(|entry| Manifest::new(entry.descriptor))
            .collect();

        Ok(GeneratedArtifact {
            package: String::new(),
            name: "COMPANIONS".to_owned(),
            file_name: super::index_file_name(Syntax::Manifest),
            contents: to_json(&manifests, "index", options)?,
        })
    }
}
