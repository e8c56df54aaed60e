//! Test: Fieldable on a struct with named fields

use jonty::Fieldable;

#[derive(Fieldable)]
struct Example {
    a: String,
    c: String,
    b: String,
}

fn main() {
    assert_eq!(Example_Fielder::FIELDS, ["a", "b", "c"]);
    assert_eq!(jonty::fields_of::<Example>().unwrap(), ["a", "b", "c"]);
}
