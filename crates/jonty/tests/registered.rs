//! Build script fielders resolved through the registry.
//!
//! `fixtures/` holds what `jonty_codegen::Generator` writes for
//! `fixtures/model.rs` scanned as `registered::model`; `jonty_codegen`'s
//! generator tests keep the two in sync.

use std::sync::{LazyLock, Once};

use jonty::{Chain, Class, Error, Registry, Resolver, StaticLoader};

mod model {
    include!("fixtures/model.rs");
}

mod fielders {
    include!("fixtures/jonty_fielders.rs");
}

use model::{Point, Point3};

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let registry = Registry::new();
    registry.register(fielders::COMPANIONS);
    registry
});

fn resolver() -> Resolver<Chain<StaticLoader, &'static Registry>> {
    Resolver::new(Chain::new(StaticLoader, &*REGISTRY))
}

fn register_globally() {
    static REGISTER: Once = Once::new();
    REGISTER.call_once(|| jonty::register(fielders::COMPANIONS));
}

#[test]
fn companion_names_follow_class_names() {
    assert_eq!(
        fielders::Point_Fielder::COMPANION.source(),
        Point::CLASS.name()
    );
    assert_eq!(
        fielders::shapes::Point_Fielder::COMPANION.source(),
        model::shapes::Point::CLASS.name()
    );
    assert_eq!(
        jonty::companion_name(Point::CLASS.name()).unwrap(),
        fielders::Point_Fielder::COMPANION.name()
    );
}

#[test]
fn build_script_classes_are_not_linked() {
    assert!(Point::CLASS.companion().is_none());
    assert!(resolver().fields::<Point>().is_ok());
    assert!(Resolver::new(StaticLoader).fields::<Point>().is_err());
}

#[test]
fn registered_fielders_resolve() {
    let resolver = resolver();
    assert_eq!(resolver.fields::<Point>().unwrap(), ["x", "y"]);
    assert_eq!(
        resolver.fields::<model::shapes::Point>().unwrap(),
        ["r", "theta"]
    );
}

#[test]
fn unannotated_subclass_uses_registered_parent() {
    let resolver = resolver();
    assert_eq!(resolver.fields::<Point3>().unwrap(), ["x", "y"]);
    assert_eq!(
        resolver.companion_of(Point3::CLASS).unwrap(),
        &fielders::Point_Fielder::COMPANION
    );
}

#[test]
fn global_registration() {
    register_globally();
    assert_eq!(jonty::fields_of::<Point>().unwrap(), ["x", "y"]);
    assert_eq!(jonty::fields_of::<Point3>().unwrap(), ["x", "y"]);
    assert_eq!(
        jonty::fields_of::<model::shapes::Point>().unwrap(),
        ["r", "theta"]
    );
}

#[test]
fn unregistered_registry_misses() {
    let empty: &'static Registry = Box::leak(Box::new(Registry::new()));
    let resolver = Resolver::new(Chain::new(StaticLoader, empty));
    assert!(matches!(
        resolver.fields::<Point3>(),
        Err(Error::NotFieldable { class }) if class.ends_with("::model::Point3")
    ));
}
