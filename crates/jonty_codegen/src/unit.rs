//! The input model: a type-like unit marked for processing.

use jonty_core::Identity;

/// Classification of a declared member.
///
/// Only [`MemberKind::Field`] contributes to a fielder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Per-instance field.
    Field,
    /// Associated constant or static; not part of an instance.
    StaticField,
    /// Method or associated function.
    Method,
    /// Associated function returning `Self` without a receiver.
    Constructor,
    /// Associated or nested type.
    NestedType,
}

/// A declared member of a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Simple name.
    pub name: String,
    /// What kind of member it is.
    pub kind: MemberKind,
}

impl Member {
    /// An instance field.
    pub fn field(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Field)
    }

    /// A member of any kind.
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A unit discovered in a round.
///
/// Immutable once built; owned by the round that discovered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldableUnit {
    identity: Identity,
    superclasses: Vec<String>,
    members: Vec<Member>,
}

impl FieldableUnit {
    /// Create a unit with no superclass.
    pub fn new(identity: Identity, members: Vec<Member>) -> Self {
        Self {
            identity,
            superclasses: Vec::new(),
            members,
        }
    }

    /// Record the immediate superclass references, as written in source.
    #[must_use]
    pub fn with_superclasses(mut self, superclasses: Vec<String>) -> Self {
        self.superclasses = superclasses;
        self
    }

    /// Qualified identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Immediate superclass references.
    pub fn superclasses(&self) -> &[String] {
        &self.superclasses
    }

    /// Declared members, in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}
