//! Generator Descriptor Builder.

use jonty_core::{Identity, companion_identity};

use crate::collect::NameSet;

/// Everything an emitter needs to render one fielder.
///
/// The companion identity is always derived from the source identity with
/// [`jonty_core::companion_identity`], the same function the runtime
/// registry applies to class names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorDescriptor {
    source: Identity,
    companion: Identity,
    names: NameSet,
    superclasses: Vec<String>,
}

impl GeneratorDescriptor {
    /// Pair a source identity with its collected names.
    pub fn build(source: Identity, names: NameSet) -> Self {
        let companion = companion_identity(&source);
        Self {
            source,
            companion,
            names,
            superclasses: Vec::new(),
        }
    }

    /// Attach the source's immediate superclass references.
    #[must_use]
    pub fn with_superclasses(mut self, superclasses: Vec<String>) -> Self {
        self.superclasses = superclasses;
        self
    }

    /// Identity of the unit the names were collected from.
    pub fn source(&self) -> &Identity {
        &self.source
    }

    /// Identity of the generated companion.
    pub fn companion(&self) -> &Identity {
        &self.companion
    }

    /// Field names in canonical order.
    pub fn names(&self) -> &NameSet {
        &self.names
    }

    /// Immediate superclass references of the source.
    pub fn superclasses(&self) -> &[String] {
        &self.superclasses
    }
}

/// Incremental form of [`GeneratorDescriptor::build`].
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    source: Identity,
    names: NameSet,
    superclasses: Vec<String>,
}

impl DescriptorBuilder {
    /// Start a descriptor for `source`.
    pub fn new(source: Identity) -> Self {
        Self {
            source,
            names: NameSet::new(),
            superclasses: Vec::new(),
        }
    }

    /// Add a field name; duplicates are ignored.
    pub fn add_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.names.insert(name);
        self
    }

    /// Add an immediate superclass reference.
    pub fn add_superclass(&mut self, superclass: impl Into<String>) -> &mut Self {
        self.superclasses.push(superclass.into());
        self
    }

    /// Freeze into a descriptor.
    pub fn build(self) -> GeneratorDescriptor {
        GeneratorDescriptor::build(self.source, self.names).with_superclasses(self.superclasses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_companion_follows_convention() {
        let source = Identity::new(["com", "test", "app"], "Example");
        let descriptor = GeneratorDescriptor::build(source, NameSet::new());
        assert_eq!(
            descriptor.companion().to_string(),
            "com::test::app::Example_Fielder"
        );
    }

    #[test]
    fn test_nested_source_is_flattened() {
        let source = Identity::new(["com", "test", "app"], "InnerExample").nested_in(["Example"]);
        let descriptor = GeneratorDescriptor::build(source, ["d", "e", "f"].into_iter().collect());
        assert_eq!(descriptor.companion().name(), "Example_InnerExample_Fielder");
        assert!(descriptor.companion().nested().is_empty());
        assert_eq!(descriptor.companion().package(), descriptor.source().package());
        assert_eq!(descriptor.names().len(), 3);
    }

    #[test]
    fn test_builder_accumulates() {
        let mut builder = DescriptorBuilder::new(Identity::new(["app"], "SubClass"));
        builder
            .add_name("i")
            .add_name("i")
            .add_superclass("PrivateInnerNonStaticExample");
        let descriptor = builder.build();
        assert_eq!(descriptor.names().len(), 1);
        assert_eq!(descriptor.superclasses(), ["PrivateInnerNonStaticExample"]);
    }

    #[test]
    fn test_same_source_same_companion() {
        let a = GeneratorDescriptor::build(Identity::new(["app"], "Empty"), NameSet::new());
        let b = GeneratorDescriptor::build(Identity::new(["app"], "Empty"), NameSet::new());
        assert_eq!(a.companion(), b.companion());
    }
}
