//! Test: the build script marker cannot be combined with derive(Fieldable)

use jonty::Fieldable;

#[derive(Fieldable)]
#[jonty(fieldable)]
struct Example {
    a: String,
}

fn main() {}
