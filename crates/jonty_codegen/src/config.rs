//! Generator configuration.
//!
//! Settings come from the [`crate::Generator`] builder; a build script may
//! let the environment override them with [`Config::from_env`].
//!
//! | Variable | Effect | Default |
//! |----------|--------|---------|
//! | `JONTY_DEBUGGABLE` | Documented (`true`) or hidden (`false`) fielders | `true` |
//! | `JONTY_SYNTAX` | `rust` or `manifest` | `rust` |
//! | `OUT_DIR` | Output directory | set by cargo |

use std::path::PathBuf;

use syn::Path;

use crate::emit::{EmitOptions, Syntax};
use crate::error::{Error, Result};

/// Debuggable override.
pub const DEBUGGABLE_ENV: &str = "JONTY_DEBUGGABLE";

/// Output syntax override.
pub const SYNTAX_ENV: &str = "JONTY_SYNTAX";

/// Output directory, set by cargo for build scripts.
pub const OUT_DIR_ENV: &str = "OUT_DIR";

/// Configuration of a generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document fielders instead of hiding them.
    pub debuggable: bool,
    /// Output syntax.
    pub syntax: Syntax,
    /// Package (module path) of the scanned files, e.g. `app::model`.
    pub package: String,
    /// Output directory.
    pub out_dir: Option<PathBuf>,
    /// Path of the runtime crate in generated code.
    pub runtime: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debuggable: true,
            syntax: Syntax::Rust,
            package: String::new(),
            out_dir: None,
            runtime: "::jonty".to_owned(),
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::default().with_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps variable names to values.
    pub fn with_lookup<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(DEBUGGABLE_ENV) {
            self.debuggable = parse_bool(DEBUGGABLE_ENV, &value)?;
        }
        if let Some(value) = lookup(SYNTAX_ENV) {
            self.syntax = value.parse()?;
        }
        if let Some(value) = lookup(OUT_DIR_ENV) {
            self.out_dir = Some(PathBuf::from(value));
        }
        Ok(self)
    }

    /// Package segments.
    pub fn package_segments(&self) -> Result<Vec<String>> {
        jonty_core::parse_package(&self.package).map_err(|err| Error::Config {
            key: "package",
            value: self.package.clone(),
            help: err.to_string(),
        })
    }

    /// Emitter options derived from this configuration.
    pub fn emit_options(&self) -> Result<EmitOptions> {
        let runtime: Path = syn::parse_str(&self.runtime).map_err(|err| Error::Config {
            key: "runtime",
            value: self.runtime.clone(),
            help: format!("expected a path such as `::jonty`: {err}"),
        })?;

        Ok(EmitOptions {
            debuggable: self.debuggable,
            runtime,
            package: self.package_segments()?,
            ..EmitOptions::default()
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::Config {
            key,
            value: value.to_owned(),
            help: "expected `true` or `false`".to_owned(),
        }),
    }
}
