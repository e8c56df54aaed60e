//! Test: Fieldable cannot be derived on unions

use jonty::Fieldable;

#[derive(Fieldable)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
