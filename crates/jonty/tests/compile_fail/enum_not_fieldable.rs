//! Test: Fieldable cannot be derived on enums

use jonty::Fieldable;

#[derive(Fieldable)]
enum Shape {
    Circle,
    Square,
}

fn main() {}
