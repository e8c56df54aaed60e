//! Build script entry point.
//!
//! ```rust,ignore
//! // build.rs
//! fn main() {
//!     let report = jonty_codegen::Generator::from_env()
//!         .expect("valid jonty configuration")
//!         .package("app::model")
//!         .file("src/model.rs")
//!         .generate()
//!         .expect("OUT_DIR is set by cargo");
//!     report.emit_cargo_diagnostics();
//! }
//!
//! // src/lib.rs
//! mod model;
//!
//! // Fielders of inline modules such as `model::shapes` land in a nested
//! // `shapes` module, so the index gets a module of its own
//! mod fielders {
//!     include!(concat!(env!("OUT_DIR"), "/jonty_fielders.rs"));
//! }
//!
//! pub fn init() {
//!     jonty::register(fielders::COMPANIONS);
//! }
//! ```

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::{Config, OUT_DIR_ENV};
use crate::descriptor::GeneratorDescriptor;
use crate::emit::Syntax;
use crate::error::{Error, Result};
use crate::scan::{ScanDriver, WrittenArtifact};
use crate::source::SourceFile;
use crate::writer::{FsWriter, Writer};

/// Scans source files and writes one fielder per `#[jonty(fieldable)]` type.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: Config,
    files: Vec<PathBuf>,
}

impl Generator {
    /// A generator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator configured from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_config(Config::from_env()?))
    }

    /// A generator with explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            files: Vec::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Package of the scanned files.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.config.package = package.into();
        self
    }

    /// Add a source file.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Add several source files.
    #[must_use]
    pub fn files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Document or hide generated fielders.
    #[must_use]
    pub fn debuggable(mut self, debuggable: bool) -> Self {
        self.config.debuggable = debuggable;
        self
    }

    /// Output syntax.
    #[must_use]
    pub fn syntax(mut self, syntax: Syntax) -> Self {
        self.config.syntax = syntax;
        self
    }

    /// Output directory.
    #[must_use]
    pub fn out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.config.out_dir = Some(out_dir.into());
        self
    }

    /// Path of the runtime crate in generated code.
    #[must_use]
    pub fn runtime(mut self, runtime: impl Into<String>) -> Self {
        self.config.runtime = runtime.into();
        self
    }

    /// Generate into the configured output directory.
    pub fn generate(&self) -> Result<Report> {
        let out_dir = self.config.out_dir.clone().ok_or_else(|| Error::Config {
            key: OUT_DIR_ENV,
            value: String::new(),
            help: "set an output directory with `out_dir` or run from a build script".to_owned(),
        })?;

        self.generate_with(&mut FsWriter::new(out_dir))
    }

    /// Generate through an arbitrary writer.
    ///
    /// Only configuration errors fail the whole run; everything else is
    /// reported per unit in the [`Report`].
    pub fn generate_with<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<Report> {
        let package = self.config.package_segments()?;
        let driver = ScanDriver::new(self.config.emit_options()?);
        let mut diagnostics = Vec::new();

        let mut candidates = Vec::new();
        for path in &self.files {
            match SourceFile::read(path, &package).and_then(|file| file.candidates()) {
                Ok(found) => candidates.extend(found),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping source file");
                    diagnostics.push(err);
                }
            }
        }

        let mut round = driver.run(candidates);
        diagnostics.extend(round.take_diagnostics());

        let emitter = self.config.syntax.emitter();
        let mut emission = driver.emit(&round, emitter.as_ref(), writer);
        driver.emit_index(&round, &mut emission, emitter.as_ref(), writer);
        diagnostics.extend(emission.diagnostics);

        debug!(
            units = round.len(),
            written = emission.written.len(),
            errors = diagnostics.len(),
            "generation finished"
        );

        Ok(Report {
            inputs: self.files.clone(),
            descriptors: round.descriptors().to_vec(),
            written: emission.written,
            index: emission.index,
            diagnostics,
        })
    }
}

/// Result of a generation run.
#[derive(Debug)]
pub struct Report {
    inputs: Vec<PathBuf>,
    descriptors: Vec<GeneratorDescriptor>,
    written: Vec<WrittenArtifact>,
    index: Option<WrittenArtifact>,
    diagnostics: Vec<Error>,
}

impl Report {
    /// Scanned source files.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// Descriptors built in this run, in discovery order.
    pub fn descriptors(&self) -> &[GeneratorDescriptor] {
        &self.descriptors
    }

    /// Written fielders.
    pub fn written(&self) -> &[WrittenArtifact] {
        &self.written
    }

    /// The index artifact, if it was written.
    pub fn index(&self) -> Option<&WrittenArtifact> {
        self.index.as_ref()
    }

    /// Per-unit and per-file errors.
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    /// Whether anything failed.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Cargo build script directives: one `rerun-if-changed` per input and
    /// one `warning` per diagnostic.
    pub fn cargo_directives(&self) -> Vec<String> {
        let reruns = self
            .inputs
            .iter()
            .map(|path| format!("cargo:rerun-if-changed={}", path.display()));

        let warnings = self.diagnostics.iter().map(|err| {
            let message = err.to_string().replace('\n', " ");
            match err.location() {
                Some(location) => format!("cargo:warning={location}: {message}"),
                None => format!("cargo:warning={message}"),
            }
        });

        reruns.chain(warnings).collect()
    }

    /// Print [`Report::cargo_directives`] to stdout.
    pub fn emit_cargo_diagnostics(&self) {
        for directive in self.cargo_directives() {
            println!("{directive}");
        }
    }
}
