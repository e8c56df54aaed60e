//! Companion loading.
//!
//! A [`Loader`] answers one question for one class, without looking at
//! superclasses: does this class have a companion of its own? Walking the
//! ancestry and caching is the [`crate::Resolver`]'s job.

use std::sync::Arc;

use crate::class::{ClassInfo, Companion};
use crate::error::LoadError;

/// Finds the companion generated for a class.
pub trait Loader: Send + Sync {
    /// The companion of `class` itself, `None` when it has none.
    fn load(&self, class: &'static ClassInfo) -> Result<Option<&'static Companion>, LoadError>;
}

impl<L: Loader + ?Sized> Loader for &L {
    fn load(&self, class: &'static ClassInfo) -> Result<Option<&'static Companion>, LoadError> {
        (**self).load(class)
    }
}

impl<L: Loader + ?Sized> Loader for Box<L> {
    fn load(&self, class: &'static ClassInfo) -> Result<Option<&'static Companion>, LoadError> {
        (**self).load(class)
    }
}

impl<L: Loader + ?Sized> Loader for Arc<L> {
    fn load(&self, class: &'static ClassInfo) -> Result<Option<&'static Companion>, LoadError> {
        (**self).load(class)
    }
}

/// Uses the companion linked into the class descriptor at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLoader;

impl Loader for StaticLoader {
    fn load(&self, class: &'static ClassInfo) -> Result<Option<&'static Companion>, LoadError> {
        Ok(class.companion())
    }
}

/// Tries `first`, then `second` when `first` finds nothing.
///
/// Errors from `first` are returned without consulting `second`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: Loader, B: Loader> Chain<A, B> {
    /// Chain two loaders.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Loader, B: Loader> Loader for Chain<A, B> {
    fn load(&self, class: &'static ClassInfo) -> Result<Option<&'static Companion>, LoadError> {
        match self.first.load(class)? {
            Some(companion) => Ok(Some(companion)),
            None => self.second.load(class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static POINT_FIELDER: Companion =
        Companion::new("app::Point_Fielder", "app::Point", &["x", "y"]);
    static OTHER_FIELDER: Companion = Companion::new("app::Other_Fielder", "app::Point", &["z"]);
    static POINT: ClassInfo = ClassInfo::new("app::Point").with_companion(&POINT_FIELDER);
    static PLAIN: ClassInfo = ClassInfo::new("app::Plain");

    struct Fixed(Option<&'static Companion>);

    impl Loader for Fixed {
        fn load(&self, _: &'static ClassInfo) -> Result<Option<&'static Companion>, LoadError> {
            Ok(self.0)
        }
    }

    struct Failing;

    impl Loader for Failing {
        fn load(&self, class: &'static ClassInfo) -> Result<Option<&'static Companion>, LoadError> {
            Err(LoadError::InvalidName {
                class: class.name().to_owned(),
                reason: "test".to_owned(),
            })
        }
    }

    #[test]
    fn test_static_loader_reads_link() {
        assert_eq!(StaticLoader.load(&POINT).unwrap(), Some(&POINT_FIELDER));
        assert_eq!(StaticLoader.load(&PLAIN).unwrap(), None);
    }

    #[test]
    fn test_chain_prefers_first() {
        let chain = Chain::new(StaticLoader, Fixed(Some(&OTHER_FIELDER)));
        assert_eq!(chain.load(&POINT).unwrap(), Some(&POINT_FIELDER));
        assert_eq!(chain.load(&PLAIN).unwrap(), Some(&OTHER_FIELDER));
    }

    #[test]
    fn test_chain_propagates_first_error() {
        let chain = Chain::new(Failing, Fixed(Some(&OTHER_FIELDER)));
        assert!(chain.load(&PLAIN).is_err());
    }

    #[test]
    fn test_boxed_loader() {
        let boxed: Box<dyn Loader> = Box::new(StaticLoader);
        assert_eq!(boxed.load(&POINT).unwrap(), Some(&POINT_FIELDER));
    }
}
