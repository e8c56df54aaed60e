//! Test: Unknown options in #[jonty(...)] are rejected

use jonty::Fieldable;

#[derive(Fieldable)]
#[jonty(merge)]
struct Example {
    a: String,
}

fn main() {}
