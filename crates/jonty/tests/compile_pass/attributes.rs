//! Test: every jonty option is accepted where it belongs

use jonty::{Class, Fieldable};

#[derive(Fieldable)]
#[jonty(debuggable = false)]
pub struct Hidden {
    secret: u8,
}

#[derive(Fieldable)]
#[jonty(debuggable)]
pub struct Shown {
    value: u8,
}

// Marker for the build script generator, ignored by the derive
#[derive(Class)]
#[jonty(fieldable)]
pub struct Generated {
    value: u8,
}

#[derive(Class)]
pub enum Shape {
    Circle,
}

fn main() {
    assert_eq!(Hidden_Fielder::FIELDS, ["secret"]);
    assert_eq!(Shown_Fielder::FIELDS, ["value"]);
    assert!(jonty::fields_of::<Generated>().is_err());
    assert!(jonty::fields_of::<Shape>().is_err());
}
