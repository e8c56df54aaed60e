//! Test: extends links a class to its superclass

use jonty::{Class, Fieldable};

mod model {
    use jonty::Fieldable;

    #[derive(Fieldable)]
    pub struct Parent {
        pub h: String,
    }
}

#[derive(Class)]
#[jonty(extends = model::Parent)]
struct Child {
    i: String,
}

#[derive(Fieldable)]
#[jonty(extends = Child)]
struct GrandChild {
    j: String,
}

fn main() {
    assert_eq!(jonty::fields_of::<Child>().unwrap(), ["h"]);
    assert_eq!(jonty::fields_of::<GrandChild>().unwrap(), ["j"]);
    assert_eq!(
        <GrandChild as Class>::CLASS.superclass().map(|class| class.name()),
        Some(<Child as Class>::CLASS.name())
    );
}
