//! Test: generic structs and raw identifiers

use jonty::Fieldable;

#[derive(Fieldable)]
struct Wrapper<T: Clone + 'static>
where
    T: Default,
{
    value: T,
    r#type: u8,
}

#[derive(Fieldable)]
struct Borrowing<const N: usize> {
    items: [u8; N],
}

fn main() {
    assert_eq!(jonty::fields_of::<Wrapper<String>>().unwrap(), ["type", "value"]);
    assert_eq!(Borrowing_Fielder::FIELDS, ["items"]);
}
