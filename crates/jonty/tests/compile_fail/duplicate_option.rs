//! Test: Duplicate options in #[jonty(...)] are rejected

use jonty::{Class, Fieldable};

#[derive(Class)]
struct Parent;

#[derive(Fieldable)]
#[jonty(extends = Parent, extends = Parent)]
struct Example {
    a: String,
}

fn main() {}
