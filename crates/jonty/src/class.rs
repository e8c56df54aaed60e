//! Runtime class descriptors and companions.

use std::fmt::{self, Display, Formatter};

/// A generated fielder as seen at runtime.
///
/// Built in const context by generated code; see `Example_Fielder::COMPANION`
/// style constants emitted by `#[derive(Fieldable)]` and the build script
/// generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Companion {
    name: &'static str,
    source: &'static str,
    fields: &'static [&'static str],
}

impl Companion {
    /// A companion named `name` listing the `fields` of `source`.
    pub const fn new(
        name: &'static str,
        source: &'static str,
        fields: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            source,
            fields,
        }
    }

    /// Qualified name of the companion, e.g. `app::Example_Fielder`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Qualified name of the class it was generated for.
    pub const fn source(&self) -> &'static str {
        self.source
    }

    /// Declared field names of the source class, sorted.
    pub const fn fields(&self) -> &'static [&'static str] {
        self.fields
    }
}

impl Display for Companion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Runtime descriptor of a class: its name, superclass and, when it has one,
/// its statically linked companion.
#[derive(Debug, Clone, Copy)]
pub struct ClassInfo {
    name: &'static str,
    superclass: Option<&'static ClassInfo>,
    companion: Option<&'static Companion>,
}

impl ClassInfo {
    /// A root class with no companion.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            superclass: None,
            companion: None,
        }
    }

    /// Set the immediate superclass.
    #[must_use]
    pub const fn extends(mut self, superclass: &'static ClassInfo) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Link the generated companion.
    #[must_use]
    pub const fn with_companion(mut self, companion: &'static Companion) -> Self {
        self.companion = Some(companion);
        self
    }

    /// Qualified name, e.g. `app::model::Example`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Immediate superclass.
    pub const fn superclass(&self) -> Option<&'static ClassInfo> {
        self.superclass
    }

    /// Statically linked companion.
    pub const fn companion(&self) -> Option<&'static Companion> {
        self.companion
    }
}

/// Classes are identified by name.
impl PartialEq for ClassInfo {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ClassInfo {}

impl Display for ClassInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A type with a runtime class descriptor.
///
/// Implemented by `#[derive(Class)]` and `#[derive(Fieldable)]`.
pub trait Class: 'static {
    /// The class descriptor.
    const CLASS: &'static ClassInfo;
}
