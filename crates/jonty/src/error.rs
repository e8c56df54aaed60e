//! Runtime error types.

use miette::Diagnostic;

/// Diagnostic codes used by jonty's runtime and build-time errors.
///
/// | Code | Description |
/// |------|-------------|
/// | `jonty::not_fieldable` | No fielder for the class or any ancestor |
/// | `jonty::resolution` | A loader failed while resolving |
/// | `jonty::load::*` | Loader failure kinds |
///
/// Build-time codes live in `jonty_codegen::diagnostic_codes`.
pub mod diagnostic_codes {
    /// Neither the class nor any ancestor has a fielder.
    pub const NOT_FIELDABLE: &str = "jonty::not_fieldable";

    /// Resolution failed for a reason other than absence.
    pub const RESOLUTION: &str = "jonty::resolution";

    /// A registered companion does not belong to the class it was found for.
    pub const LOAD_MALFORMED: &str = "jonty::load::malformed";

    /// The superclass chain loops back on itself.
    pub const LOAD_CYCLE: &str = "jonty::load::cycle";

    /// The class name cannot be mapped to a companion name.
    pub const LOAD_INVALID_NAME: &str = "jonty::load::invalid_name";
}

/// Why a loader could not produce a companion.
///
/// Absence is not an error; loaders return `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Diagnostic, thiserror::Error)]
pub enum LoadError {
    /// A companion exists under the conventional name but was generated for
    /// a different class.
    #[error("companion `{companion}` belongs to `{source_class}`, not `{class}`")]
    #[diagnostic(
        code(jonty::load::malformed),
        help("two types produce the same fielder name; rename one of them")
    )]
    Malformed {
        /// Class being resolved.
        class: String,
        /// Companion found.
        companion: String,
        /// Class the companion was generated for.
        source_class: String,
    },

    /// The superclass chain contains a cycle.
    #[error("superclass chain of `{class}` loops back to `{repeated}`")]
    #[diagnostic(code(jonty::load::cycle))]
    Cycle {
        /// Class being resolved.
        class: String,
        /// First class seen twice.
        repeated: String,
    },

    /// The class name is not a valid identity.
    #[error("class name `{class}` is not a valid path: {reason}")]
    #[diagnostic(code(jonty::load::invalid_name))]
    InvalidName {
        /// The class name.
        class: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors returned by field lookups.
#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum Error {
    /// Neither the class nor any ancestor up to a boundary has a fielder.
    #[error("`{class}` is not fieldable")]
    #[diagnostic(
        code(jonty::not_fieldable),
        help("derive `Fieldable` on the class or one of its superclasses")
    )]
    NotFieldable {
        /// The class that was looked up.
        class: &'static str,
    },

    /// A loader failed while walking the ancestry of `class`.
    #[error("unable to resolve fields of `{class}`")]
    #[diagnostic(code(jonty::resolution))]
    Resolution {
        /// The class that was looked up.
        class: &'static str,
        /// The loader's failure.
        #[source]
        #[diagnostic_source]
        source: LoadError,
    },
}

impl Error {
    /// The class the lookup was for.
    pub fn class(&self) -> &'static str {
        match self {
            Error::NotFieldable { class } | Error::Resolution { class, .. } => class,
        }
    }
}

/// Result alias for field lookups.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_constants() {
        let err = Error::NotFieldable { class: "app::Plain" };
        assert_eq!(
            err.code().map(|code| code.to_string()),
            Some(diagnostic_codes::NOT_FIELDABLE.to_owned())
        );

        let err = Error::Resolution {
            class: "app::Child",
            source: LoadError::Cycle {
                class: "app::Child".to_owned(),
                repeated: "app::Parent".to_owned(),
            },
        };
        assert_eq!(
            err.code().map(|code| code.to_string()),
            Some(diagnostic_codes::RESOLUTION.to_owned())
        );
        assert_eq!(err.class(), "app::Child");
    }

    #[test]
    fn test_resolution_keeps_cause() {
        let err = Error::Resolution {
            class: "app::Child",
            source: LoadError::Malformed {
                class: "app::Child".to_owned(),
                companion: "app::Child_Fielder".to_owned(),
                source_class: "app::Other".to_owned(),
            },
        };
        let cause = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            cause.as_deref(),
            Some("companion `app::Child_Fielder` belongs to `app::Other`, not `app::Child`")
        );
    }
}
