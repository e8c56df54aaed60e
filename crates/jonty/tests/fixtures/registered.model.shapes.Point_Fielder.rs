// Generated code by jonty. Do not modify!

/// Field names of `registered::model::shapes::Point`.
///
/// Fields: `r`, `theta`.
///
/// Generated code by jonty. Do not modify!
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point_Fielder;
#[allow(dead_code)]
impl Point_Fielder {
    /// Declared field names, sorted.
    pub const FIELDS: &'static [&'static str] = &["r", "theta"];
    /// Runtime handle of this fielder.
    pub const COMPANION: ::jonty::Companion = ::jonty::Companion::new(
        "registered::model::shapes::Point_Fielder",
        "registered::model::shapes::Point",
        Self::FIELDS,
    );
    /// Declared field names, sorted.
    pub fn fields() -> &'static [&'static str] {
        Self::FIELDS
    }
}
