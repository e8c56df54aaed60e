//! Test: Fieldable on tuple and unit structs

use jonty::Fieldable;

#[derive(Fieldable)]
struct Pair(u8, u16);

#[derive(Fieldable)]
struct Empty;

fn main() {
    assert_eq!(Pair_Fielder::fields(), ["0", "1"]);
    assert!(Empty_Fielder::fields().is_empty());
}
