//! Framework boundary namespaces.
//!
//! Classes under a boundary belong to the platform rather than the
//! application. The resolver never looks for fielders past one.

/// Module path prefixes treated as framework boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    prefixes: Vec<String>,
}

impl Boundary {
    /// Prefixes used by [`Boundary::default`].
    pub const DEFAULT_PREFIXES: [&'static str; 3] = ["std::", "core::", "alloc::"];

    /// No boundaries at all.
    pub fn none() -> Self {
        Self {
            prefixes: Vec::new(),
        }
    }

    /// Exactly the given prefixes.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a prefix, e.g. `"tokio::"`.
    #[must_use]
    pub fn with(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    /// Whether `class` lies under a boundary namespace.
    pub fn contains(&self, class: &str) -> bool {
        self.prefixes.iter().any(|prefix| class.starts_with(prefix.as_str()))
    }

    /// Configured prefixes.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIXES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes() {
        let boundary = Boundary::default();
        assert!(boundary.contains("std::collections::HashMap"));
        assert!(boundary.contains("core::cell::Cell"));
        assert!(!boundary.contains("app::model::Example"));
        // Prefix match is on whole segments only when the prefix ends with `::`
        assert!(!boundary.contains("stdlib::Thing"));
    }

    #[test]
    fn test_custom_prefixes() {
        let boundary = Boundary::none().with("framework::");
        assert!(boundary.contains("framework::Activity"));
        assert!(!boundary.contains("std::string::String"));
        assert_eq!(boundary.prefixes(), ["framework::"]);
    }
}
