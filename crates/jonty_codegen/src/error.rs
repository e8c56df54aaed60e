//! Build-time errors.
//!
//! Per-unit failures ([`Error::UnitParse`], [`Error::EmitWrite`],
//! [`Error::Render`]) are collected as diagnostics and never abort a round.
//! [`Error::Read`] and [`Error::SourceParse`] only lose the candidates of the
//! affected file.
//!
//! | Code | Description |
//! |------|-------------|
//! | `jonty::unit_parse` | Candidate could not be decomposed into a unit |
//! | `jonty::emit_write` | Writer failed to store a generated artifact |
//! | `jonty::render` | Generated code could not be rendered |
//! | `jonty::read` | Source file could not be read |
//! | `jonty::source_parse` | Source file is not valid Rust |
//! | `jonty::config` | Invalid configuration value |

use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};

/// Diagnostic codes used by [`Error`].
pub mod diagnostic_codes {
    /// Candidate unit could not be parsed.
    pub const UNIT_PARSE: &str = "jonty::unit_parse";

    /// Generated artifact could not be written.
    pub const EMIT_WRITE: &str = "jonty::emit_write";

    /// Generated code could not be rendered.
    pub const RENDER: &str = "jonty::render";

    /// Source file could not be read.
    pub const READ: &str = "jonty::read";

    /// Source file failed to parse.
    pub const SOURCE_PARSE: &str = "jonty::source_parse";

    /// Invalid configuration.
    pub const CONFIG: &str = "jonty::config";
}

/// Position of a unit inside a source file. Lines are 1-based, columns 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// File the unit was declared in.
    pub file: PathBuf,
    /// 1-based line.
    pub line: usize,
    /// 0-based column, in characters.
    pub column: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column + 1)
    }
}

/// Contents of a source file, shared by all candidates discovered in it.
#[derive(Debug)]
pub struct SourceContext {
    /// Path of the file.
    pub path: PathBuf,
    /// Full file contents.
    pub contents: String,
}

impl SourceContext {
    /// Create a context for a file.
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            path: path.into(),
            contents: contents.into(),
        })
    }

    /// Convert a line/column pair into a byte offset span one token wide.
    pub fn span_at(&self, line: usize, column: usize) -> SourceSpan {
        let offset = self
            .contents
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>();

        let rest = &self.contents[offset.min(self.contents.len())..];
        let column_bytes = rest
            .char_indices()
            .nth(column)
            .map_or(rest.len(), |(idx, _)| idx);
        let start = offset + column_bytes;

        // Highlight up to the end of the identifier or keyword
        let len = self.contents[start..]
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(self.contents.len() - start)
            .max(1)
            .min(self.contents.len().saturating_sub(start));

        SourceSpan::new(start.into(), len)
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.path.display().to_string(), self.contents.clone())
    }
}

/// Errors produced while scanning, emitting or writing fielders.
#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum Error {
    /// A candidate could not be decomposed into a fieldable unit.
    #[error("unable to parse fieldable unit `{unit}`: {message}")]
    #[diagnostic(code(jonty::unit_parse))]
    UnitParse {
        /// Identity (or best description) of the unit.
        unit: String,
        /// What went wrong.
        message: String,
        /// How to fix it.
        #[help]
        help: String,
        /// Source file contents, empty when the location is unknown.
        #[source_code]
        src: NamedSource<String>,
        /// Position of the offending item.
        #[label("{message}")]
        span: Option<SourceSpan>,
        /// Human readable location.
        location: Option<Location>,
    },

    /// The writer collaborator failed to store an artifact.
    #[error("unable to write fielder for `{unit}` to {}", .path.display())]
    #[diagnostic(
        code(jonty::emit_write),
        help("check that the output directory exists and is writable")
    )]
    EmitWrite {
        /// Source unit whose fielder failed.
        unit: String,
        /// Target path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Generated code could not be rendered.
    #[error("unable to render fielder for `{unit}`: {message}")]
    #[diagnostic(code(jonty::render))]
    Render {
        /// Source unit.
        unit: String,
        /// Renderer message.
        message: String,
    },

    /// A source file could not be read.
    #[error("unable to read source file {}", .path.display())]
    #[diagnostic(code(jonty::read), help("check the path passed to the generator"))]
    Read {
        /// The file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A source file is not valid Rust.
    #[error("unable to parse source file {}: {message}", .path.display())]
    #[diagnostic(code(jonty::source_parse))]
    SourceParse {
        /// The file.
        path: PathBuf,
        /// Parser message.
        message: String,
        /// The file contents.
        #[source_code]
        src: NamedSource<String>,
        /// Position of the syntax error.
        #[label("{message}")]
        span: SourceSpan,
    },

    /// Invalid configuration.
    #[error("invalid value {value:?} for {key}")]
    #[diagnostic(code(jonty::config))]
    Config {
        /// Setting name.
        key: &'static str,
        /// The rejected value.
        value: String,
        /// Accepted values.
        #[help]
        help: String,
    },
}

impl Error {
    /// A unit parse failure with no known source location.
    pub fn unit_parse(
        unit: impl Into<String>,
        message: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        Error::UnitParse {
            unit: unit.into(),
            message: message.into(),
            help: help.into(),
            src: NamedSource::new("<unknown>", String::new()),
            span: None,
            location: None,
        }
    }

    /// A unit parse failure pointing into a source file.
    pub fn unit_parse_at(
        unit: impl Into<String>,
        message: impl Into<String>,
        help: impl Into<String>,
        context: &SourceContext,
        span: proc_macro2::Span,
    ) -> Self {
        let start = span.start();
        Error::UnitParse {
            unit: unit.into(),
            message: message.into(),
            help: help.into(),
            src: context.named_source(),
            span: Some(context.span_at(start.line, start.column)),
            location: Some(Location {
                file: context.path.clone(),
                line: start.line,
                column: start.column,
            }),
        }
    }

    /// A source file that `syn` rejected.
    pub fn source_parse(context: &SourceContext, err: &syn::Error) -> Self {
        let start = err.span().start();
        Error::SourceParse {
            path: context.path.clone(),
            message: err.to_string(),
            src: context.named_source(),
            span: context.span_at(start.line, start.column),
        }
    }

    /// Source location, when the error is tied to one.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Error::UnitParse { location, .. } => location.as_ref(),
            _ => None,
        }
    }
}

/// Result alias for build-time operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
