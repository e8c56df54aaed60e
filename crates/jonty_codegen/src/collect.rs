//! Name Collector: extracts the declared field names of a unit.

use std::collections::BTreeSet;
use std::collections::btree_set;

use crate::unit::{FieldableUnit, MemberKind};

/// Deduplicated field names in lexicographic order.
///
/// The ordering keeps generated output stable across runs regardless of
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet(BTreeSet<String>);

impl NameSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name. Returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Names in canonical order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a NameSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Collect the unit's own instance field names.
///
/// Static fields, methods, constructors and nested types are skipped.
/// Inherited fields are not visited.
pub fn collect(unit: &FieldableUnit) -> NameSet {
    unit.members()
        .iter()
        .filter(|member| member.kind == MemberKind::Field)
        .map(|member| member.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Member;
    use jonty_core::Identity;
    use proptest::prelude::*;

    fn unit(members: Vec<Member>) -> FieldableUnit {
        FieldableUnit::new(Identity::new(["com", "test", "app"], "Example"), members)
    }

    #[test]
    fn test_collect_sorts_fields() {
        let names = collect(&unit(vec![
            Member::field("c"),
            Member::field("a"),
            Member::field("b"),
        ]));
        let ordered: Vec<&String> = names.iter().collect();
        assert_eq!(ordered, ["a", "b", "c"]);
    }

    #[test]
    fn test_collect_skips_non_fields() {
        let names = collect(&unit(vec![
            Member::field("h"),
            Member::new("CREATOR", MemberKind::StaticField),
            Member::new("get_things", MemberKind::Method),
            Member::new("new", MemberKind::Constructor),
            Member::new("Inner", MemberKind::NestedType),
            Member::field("k"),
        ]));
        assert_eq!(names.len(), 2);
        assert!(names.contains("h"));
        assert!(names.contains("k"));
        assert!(!names.contains("CREATOR"));
    }

    #[test]
    fn test_collect_empty_unit() {
        assert!(collect(&unit(Vec::new())).is_empty());
    }

    #[test]
    fn test_collect_deduplicates() {
        let names = collect(&unit(vec![Member::field("a"), Member::field("a")]));
        assert_eq!(names.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_collect_is_sorted_and_distinct(
            fields in proptest::collection::vec("[a-z_][a-z0-9_]{0,6}", 0..16),
        ) {
            let members = fields.iter().map(|f| Member::field(f.clone())).collect();
            let names: Vec<String> = collect(&unit(members)).iter().cloned().collect();

            let mut expected = fields.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(names, expected);
        }

        #[test]
        fn prop_declaration_order_is_irrelevant(
            fields in proptest::collection::vec("[a-z]{1,4}", 0..10),
        ) {
            let forward: Vec<Member> = fields.iter().map(|f| Member::field(f.clone())).collect();
            let mut backward = forward.clone();
            backward.reverse();
            prop_assert_eq!(collect(&unit(forward)), collect(&unit(backward)));
        }
    }
}
