//! Annotation Scan Driver.
//!
//! Turns the candidates of a round into descriptors, then renders and
//! writes them. Both phases have partial-failure semantics: a unit that fails
//! to parse, render or write is reported and its siblings carry on.
//!
//! # Known Limitation
//!
//! Names are never merged across a superclass/subclass pair that are both
//! fieldable. Each unit's fielder lists only the fields it declares itself;
//! the runtime resolver only delegates to an ancestor's fielder when a class
//! has none of its own.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use jonty_core::Identity;
use tracing::{debug, warn};

use crate::collect::collect;
use crate::descriptor::GeneratorDescriptor;
use crate::emit::{EmitOptions, Emitter, GeneratedArtifact, IndexEntry};
use crate::error::{Error, Result};
use crate::unit::FieldableUnit;
use crate::writer::Writer;

/// A unit marked for processing, not yet decomposed.
pub trait Candidate {
    /// Best available name for diagnostics, even when parsing fails.
    fn describe(&self) -> String;

    /// Decompose into a [`FieldableUnit`].
    fn parse(&self) -> Result<FieldableUnit>;

    /// A unit parse error attributed to this candidate.
    fn error(&self, message: &str, help: &str) -> Error {
        Error::unit_parse(self.describe(), message, help)
    }
}

/// Already decomposed units are trivially candidates.
impl Candidate for FieldableUnit {
    fn describe(&self) -> String {
        self.identity().to_string()
    }

    fn parse(&self) -> Result<FieldableUnit> {
        Ok(self.clone())
    }
}

/// Outcome of scanning one round: descriptors keyed by source identity in
/// discovery order, plus per-unit diagnostics.
#[derive(Debug, Default)]
pub struct Round {
    descriptors: Vec<GeneratorDescriptor>,
    positions: HashMap<Identity, usize>,
    diagnostics: Vec<Error>,
}

impl Round {
    /// Descriptors in discovery order.
    pub fn descriptors(&self) -> &[GeneratorDescriptor] {
        &self.descriptors
    }

    /// Descriptor for a source identity.
    pub fn get(&self, source: &Identity) -> Option<&GeneratorDescriptor> {
        self.positions.get(source).map(|&idx| &self.descriptors[idx])
    }

    /// Whether `source` produced a descriptor.
    pub fn contains(&self, source: &Identity) -> bool {
        self.positions.contains_key(source)
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no descriptor was produced.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Units that failed to parse.
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    /// Move the diagnostics out, leaving the descriptors.
    pub fn take_diagnostics(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.diagnostics)
    }

    fn insert(&mut self, descriptor: GeneratorDescriptor) {
        self.positions
            .insert(descriptor.source().clone(), self.descriptors.len());
        self.descriptors.push(descriptor);
    }
}

/// A stored artifact and where it went.
#[derive(Debug, Clone)]
pub struct WrittenArtifact {
    /// Source unit, `None` for the index.
    pub source: Option<Identity>,
    /// The artifact.
    pub artifact: GeneratedArtifact,
    /// Path reported by the writer.
    pub path: PathBuf,
}

/// Outcome of emitting a round.
#[derive(Debug, Default)]
pub struct Emission {
    /// Successfully written fielders, in discovery order.
    pub written: Vec<WrittenArtifact>,
    /// The index artifact, once [`ScanDriver::emit_index`] succeeds.
    pub index: Option<WrittenArtifact>,
    /// Units that failed to render or write.
    pub diagnostics: Vec<Error>,
}

/// Drives collection, descriptor building and emission for a round.
#[derive(Debug, Clone, Default)]
pub struct ScanDriver {
    options: EmitOptions,
}

impl ScanDriver {
    /// A driver emitting with `options`.
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Options passed to emitters.
    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Parse every candidate and build its descriptor.
    pub fn run<I>(&self, candidates: I) -> Round
    where
        I: IntoIterator,
        I::Item: Candidate,
    {
        let mut round = Round::default();

        for candidate in candidates {
            debug!(unit = %candidate.describe(), "processing fieldable unit");

            let unit = match candidate.parse() {
                Ok(unit) => unit,
                Err(err) => {
                    warn!(
                        unit = %candidate.describe(),
                        error = %err,
                        "unable to parse fieldable unit"
                    );
                    round.diagnostics.push(err);
                    continue;
                }
            };

            if round.contains(unit.identity()) {
                let err = candidate.error(
                    "unit is declared more than once in this round",
                    "give each fieldable type a unique path",
                );
                warn!(unit = %unit.identity(), "duplicate fieldable unit");
                round.diagnostics.push(err);
                continue;
            }

            let names = collect(&unit);
            debug!(unit = %unit.identity(), fields = names.len(), "collected field names");

            let descriptor = GeneratorDescriptor::build(unit.identity().clone(), names)
                .with_superclasses(unit.superclasses().to_vec());
            round.insert(descriptor);
        }

        round
    }

    /// Render and write every descriptor of `round`.
    pub fn emit<E, W>(&self, round: &Round, emitter: &E, writer: &mut W) -> Emission
    where
        E: Emitter + ?Sized,
        W: Writer + ?Sized,
    {
        let mut emission = Emission::default();

        for descriptor in round.descriptors() {
            let unit = descriptor.source().to_string();

            let artifact = match emitter.emit(descriptor, &self.options) {
                Ok(artifact) => artifact,
                Err(err) => {
                    warn!(%unit, error = %err, "unable to render fielder");
                    emission.diagnostics.push(err);
                    continue;
                }
            };

            match store(writer, &artifact, &unit) {
                Ok(path) => {
                    debug!(%unit, path = %path.display(), "wrote fielder");
                    emission.written.push(WrittenArtifact {
                        source: Some(descriptor.source().clone()),
                        artifact,
                        path,
                    });
                }
                Err(err) => {
                    warn!(%unit, error = %err, "unable to write fielder");
                    emission.diagnostics.push(err);
                }
            }
        }

        emission
    }

    /// Render and write the index of every fielder written so far.
    pub fn emit_index<E, W>(
        &self,
        round: &Round,
        emission: &mut Emission,
        emitter: &E,
        writer: &mut W,
    ) where
        E: Emitter + ?Sized,
        W: Writer + ?Sized,
    {
        let mut companions = HashSet::new();
        let mut entries = Vec::with_capacity(emission.written.len());
        for written in &emission.written {
            let Some(descriptor) = written.source.as_ref().and_then(|source| round.get(source))
            else {
                continue;
            };

            // Left out of the index only; the rest of the round is still listed
            if !companions.insert(descriptor.companion()) {
                let err = Error::Render {
                    unit: descriptor.source().to_string(),
                    message: format!(
                        "fielder `{}` is generated for more than one unit",
                        descriptor.companion()
                    ),
                };
                warn!(unit = %descriptor.source(), error = %err, "fielder left out of the index");
                emission.diagnostics.push(err);
                continue;
            }

            entries.push(IndexEntry {
                descriptor,
                artifact: &written.artifact,
            });
        }

        let result = emitter
            .index(&entries, &self.options)
            .and_then(|artifact| {
                let path = store(writer, &artifact, "index")?;
                Ok(WrittenArtifact {
                    source: None,
                    artifact,
                    path,
                })
            });

        match result {
            Ok(index) => emission.index = Some(index),
            Err(err) => {
                warn!(error = %err, "unable to emit fielder index");
                emission.diagnostics.push(err);
            }
        }
    }
}

fn store<W: Writer + ?Sized>(
    writer: &mut W,
    artifact: &GeneratedArtifact,
    unit: &str,
) -> Result<PathBuf> {
    let path = writer.target(artifact);
    writer
        .write(artifact)
        .map(|()| path.clone())
        .map_err(|source| Error::EmitWrite {
            unit: unit.to_owned(),
            path,
            source,
        })
}
