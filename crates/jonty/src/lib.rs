//! # jonty
//!
//! Compile-time field name companions for Rust types, with a cached runtime
//! resolver that walks the superclass chain.
//!
//! `#[derive(Fieldable)]` generates a companion "fielder" next to a struct
//! listing the names of the fields it declares. At runtime, [`fields_of`]
//! maps a class to its fielder. A class without one resolves through its
//! superclasses (declared with `#[jonty(extends = Parent)]`) to the nearest
//! ancestor that has one, stopping at framework namespaces such as `std::`.
//!
//! ## Features
//!
//! - **Zero runtime reflection** - field names are `&'static str` constants
//! - **Superclass fallback** - an unannotated subclass answers with its
//!   parent's fielder
//! - **Cached resolution** - every answer, positive or negative, is cached and
//!   each class is loaded at most once, even under concurrent first lookups
//! - **Two front-ends** - a derive macro, or a build script generator for
//!   types marked `#[jonty(fieldable)]` (see `jonty_codegen`)
//! - **Rich diagnostics** - errors implement [`miette::Diagnostic`]
//!
//! ## Quick Start
//!
//! ```rust
//! use jonty::{Class, Fieldable};
//!
//! #[derive(Fieldable)]
//! struct Example {
//!     a: String,
//!     c: String,
//!     b: String,
//! }
//!
//! #[derive(Class)]
//! #[jonty(extends = Example)]
//! struct SubClass2 {
//!     i: u32,
//! }
//!
//! assert_eq!(jonty::fields_of::<Example>().unwrap(), ["a", "b", "c"]);
//! assert_eq!(Example_Fielder::FIELDS, ["a", "b", "c"]);
//!
//! // No fielder of its own: the superclass answers
//! assert_eq!(jonty::fields_of::<SubClass2>().unwrap(), ["a", "b", "c"]);
//! ```
//!
//! ## Struct Attributes
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `extends = Path` | Immediate superclass, must implement [`Class`] |
//! | `debuggable = bool` | Document the fielder (default) or hide it |
//! | `fieldable` | Marks a `#[derive(Class)]` type for the build script generator |
//!
//! ## Inherited Fields
//!
//! Field names are never merged. A fieldable subclass lists only the fields
//! it declares; its superclass's fields are only reported when the subclass
//! has no fielder at all.
//!
//! ## Build Script Fielders
//!
//! Fielders written by `jonty_codegen::Generator` are found by name rather
//! than linked into the class, so the index can be included in a module of
//! its own. Register them before the first lookup:
//!
//! ```rust,ignore
//! mod fielders {
//!     include!(concat!(env!("OUT_DIR"), "/jonty_fielders.rs"));
//! }
//!
//! jonty::register(fielders::COMPANIONS);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `tracing` | yes | Log resolver hits, misses and boundary stops |

extern crate self as jonty;

use std::sync::LazyLock;

mod boundary;
mod class;
mod error;
mod loader;
mod log;
mod registry;
mod resolver;

pub use boundary::Boundary;
pub use class::{Class, ClassInfo, Companion};
pub use error::{Error, LoadError, Result, diagnostic_codes};
pub use loader::{Chain, Loader, StaticLoader};
pub use registry::Registry;
pub use resolver::Resolver;

pub use jonty_core::{SUFFIX, companion_name};
pub use jonty_macro::{Class, Fieldable};

/// Loader behind [`fields_of`]: linked companions first, then the global
/// registry.
pub type GlobalLoader = Chain<StaticLoader, &'static Registry>;

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static RESOLVER: LazyLock<Resolver<GlobalLoader>> =
    LazyLock::new(|| Resolver::new(Chain::new(StaticLoader, registry())));

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// The process-wide resolver used by [`fields_of`].
pub fn resolver() -> &'static Resolver<GlobalLoader> {
    &RESOLVER
}

/// Register build script companions with the process-wide registry.
///
/// Misses are cached, so register before looking up the classes involved.
pub fn register(companions: &'static [Companion]) {
    REGISTRY.register(companions);
}

/// Declared field names of `T`, or of its nearest ancestor with a fielder.
///
/// # Errors
///
/// [`Error::NotFieldable`] when neither `T` nor any ancestor below a
/// framework boundary has a fielder, [`Error::Resolution`] when a loader fails.
pub fn fields_of<T: Class>() -> Result<&'static [&'static str]> {
    resolver().fields::<T>()
}
