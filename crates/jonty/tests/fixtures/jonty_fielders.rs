// Generated code by jonty. Do not modify!

include!("registered.model.Point_Fielder.rs");
pub mod shapes {
    include!("registered.model.shapes.Point_Fielder.rs");
}
/// Every fielder generated in this round, in discovery order.
pub const COMPANIONS: &[::jonty::Companion] = &[
    Point_Fielder::COMPANION,
    shapes::Point_Fielder::COMPANION,
];
