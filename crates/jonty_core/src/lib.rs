//! # jonty_core
//!
//! The naming convention that ties generated fielders to the classes they
//! describe. Code generation derives a companion name from a source type's
//! identity, and the runtime resolver derives the same name from a class's
//! qualified name. Both sides call into this crate so the two can never drift.
//!
//! ## Identity Format
//!
//! | Part | Separator | Example |
//! |------|-----------|---------|
//! | Package (module path) | `::` | `app::model` |
//! | Nesting (enclosing types) | `.` | `Example.Inner` |
//!
//! `app::model::Example.Inner` has package `app::model`, nesting `Example`
//! and simple name `Inner`. Its companion is `app::model::Example_Inner_Fielder`:
//! nesting is flattened with `_` so the companion is always a top-level unit
//! addressable by a single identifier.
//!
//! ```rust
//! use jonty_core::companion_name;
//!
//! assert_eq!(
//!     companion_name("app::model::Example.Inner").unwrap(),
//!     "app::model::Example_Inner_Fielder",
//! );
//! ```

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Suffix appended to the flattened source name to form the companion name.
pub const SUFFIX: &str = "_Fielder";

/// Separator between package (module path) segments.
pub const PATH_SEPARATOR: &str = "::";

/// Separator between nesting levels in the textual form of an identity.
pub const NESTING_SEPARATOR: char = '.';

/// Replaces [`NESTING_SEPARATOR`] when nesting is flattened into one identifier.
///
/// Flattening is not injective: `app::Outer.Inner` and `app::Outer_Inner`
/// share the companion `app::Outer_Inner_Fielder`. The scan driver keeps the
/// first of two such units in its index and reports the other.
pub const FLATTEN_SEPARATOR: char = '_';

/// Errors produced when a textual identity cannot be decomposed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The qualified name was empty.
    #[error("qualified name is empty")]
    Empty,

    /// One of the `::` or `.` separated segments was empty.
    #[error("qualified name `{input}` contains an empty segment")]
    EmptySegment {
        /// The offending qualified name.
        input: String,
    },

    /// A segment contained a separator that is not legal in that position.
    #[error("segment `{segment}` of `{input}` is not a valid name")]
    InvalidSegment {
        /// The offending qualified name.
        input: String,
        /// The segment that failed validation.
        segment: String,
    },
}

/// Qualified identity of a type-like unit.
///
/// Identities order lexicographically by package, then nesting, then name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity {
    package: Vec<String>,
    nested: Vec<String>,
    name: String,
}

impl Identity {
    /// Create a top-level identity in the given package.
    pub fn new<I, S>(package: I, name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            package: package.into_iter().map(Into::into).collect(),
            nested: Vec::new(),
            name: name.into(),
        }
    }

    /// Place this identity inside the given enclosing types, outermost first.
    #[must_use]
    pub fn nested_in<I, S>(mut self, enclosing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nested = enclosing.into_iter().map(Into::into).collect();
        self
    }

    /// Parse the textual form `pkg::path::Outer.Inner`.
    pub fn parse(input: &str) -> Result<Self, IdentityError> {
        if input.is_empty() {
            return Err(IdentityError::Empty);
        }

        let mut segments: Vec<&str> = input.split(PATH_SEPARATOR).collect();
        // `split` always yields at least one item
        let type_path = segments.pop().unwrap_or_default();

        for segment in &segments {
            validate_segment(input, segment, true)?;
        }

        let mut type_segments: Vec<&str> = type_path.split(NESTING_SEPARATOR).collect();
        for segment in &type_segments {
            validate_segment(input, segment, false)?;
        }
        let name = type_segments.pop().unwrap_or_default();

        Ok(Self {
            package: segments.into_iter().map(str::to_owned).collect(),
            nested: type_segments.into_iter().map(str::to_owned).collect(),
            name: name.to_owned(),
        })
    }

    /// Package (module path) segments.
    pub fn package(&self) -> &[String] {
        &self.package
    }

    /// Package rendered with `::`, empty for the root package.
    pub fn package_path(&self) -> String {
        self.package.join(PATH_SEPARATOR)
    }

    /// Enclosing types, outermost first.
    pub fn nested(&self) -> &[String] {
        &self.nested
    }

    /// Simple name of the unit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nesting path and simple name joined into a single legal identifier.
    pub fn flattened_name(&self) -> String {
        let mut flat = String::new();
        for enclosing in &self.nested {
            flat.push_str(enclosing);
            flat.push(FLATTEN_SEPARATOR);
        }
        flat.push_str(&self.name);
        flat
    }

    /// Identity of the generated companion for this unit.
    pub fn companion(&self) -> Identity {
        companion_identity(self)
    }

    /// Whether this identity names a generated companion.
    pub fn is_companion(&self) -> bool {
        self.nested.is_empty() && self.name.ends_with(SUFFIX) && self.name.len() > SUFFIX.len()
    }
}

fn validate_segment(input: &str, segment: &str, in_package: bool) -> Result<(), IdentityError> {
    if segment.is_empty() {
        return Err(IdentityError::EmptySegment {
            input: input.to_owned(),
        });
    }

    let illegal = segment.contains(':')
        || segment.chars().any(char::is_whitespace)
        || (in_package && segment.contains(NESTING_SEPARATOR));
    if illegal {
        return Err(IdentityError::InvalidSegment {
            input: input.to_owned(),
            segment: segment.to_owned(),
        });
    }

    Ok(())
}

impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for segment in &self.package {
            write!(f, "{segment}{PATH_SEPARATOR}")?;
        }
        for enclosing in &self.nested {
            write!(f, "{enclosing}{NESTING_SEPARATOR}")?;
        }
        f.write_str(&self.name)
    }
}

impl FromStr for Identity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a package path such as `app::model`. The empty string is the root package.
pub fn parse_package(input: &str) -> Result<Vec<String>, IdentityError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(PATH_SEPARATOR)
        .map(|segment| validate_segment(input, segment, true).map(|()| segment.to_owned()))
        .collect()
}

/// Companion identity for a source identity: same package, flattened
/// nesting, [`SUFFIX`] appended.
pub fn companion_identity(source: &Identity) -> Identity {
    Identity {
        package: source.package.clone(),
        nested: Vec::new(),
        name: format!("{}{SUFFIX}", source.flattened_name()),
    }
}

/// Companion qualified name for a class's qualified name.
///
/// This is the lookup side of the convention used by the runtime registry.
pub fn companion_name(qualified: &str) -> Result<String, IdentityError> {
    Identity::parse(qualified).map(|identity| companion_identity(&identity).to_string())
}
