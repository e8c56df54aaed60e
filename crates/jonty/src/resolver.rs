//! Cached resolution of a class to its fielder.
//!
//! A class without a fielder of its own resolves to its nearest ancestor's
//! fielder. Fields are never merged along the way: the answer is exactly one
//! companion's list.
//!
//! # Lookup
//!
//! 1. A cached entry for the class is returned as is.
//! 2. Otherwise the ancestry is walked, nearest first. For each class the
//!    cache is consulted, then the loader. A hit stops the walk. On a miss
//!    the walk ends at a boundary class or at the root, otherwise it moves to
//!    the superclass.
//! 3. The outcome is stored against every class visited.
//!
//! Loader failures are returned and not cached, so a later lookup retries.

use std::collections::HashMap;

use parking_lot::{Mutex, RwLock};

use crate::boundary::Boundary;
use crate::class::{Class, ClassInfo, Companion};
use crate::error::{Error, LoadError, Result};
use crate::loader::Loader;
use crate::log::{debug, trace};

/// Cached outcome for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Hit(&'static Companion),
    Miss,
}

impl Entry {
    fn into_result(self, class: &'static ClassInfo) -> Result<&'static Companion> {
        match self {
            Entry::Hit(companion) => Ok(companion),
            Entry::Miss => Err(Error::NotFieldable {
                class: class.name(),
            }),
        }
    }
}

/// Maps classes to fielders through a [`Loader`], caching every answer for
/// the life of the resolver.
///
/// Concurrent first lookups of the same class are serialized, so the loader
/// runs at most once per class. Cached lookups only take a read lock.
#[derive(Debug)]
pub struct Resolver<L> {
    loader: L,
    boundary: Boundary,
    cache: RwLock<HashMap<&'static str, Entry>>,
    resolving: Mutex<()>,
}

impl<L: Loader> Resolver<L> {
    /// A resolver with the default boundary.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            boundary: Boundary::default(),
            cache: RwLock::new(HashMap::new()),
            resolving: Mutex::new(()),
        }
    }

    /// Replace the boundary.
    #[must_use]
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// The loader.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// The boundary.
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Field names of `class`, or of its nearest ancestor with a fielder.
    pub fn fields_of(&self, class: &'static ClassInfo) -> Result<&'static [&'static str]> {
        self.companion_of(class).map(Companion::fields)
    }

    /// Field names of `T`.
    pub fn fields<T: Class>(&self) -> Result<&'static [&'static str]> {
        self.fields_of(T::CLASS)
    }

    /// The fielder `class` resolves to.
    pub fn companion_of(&self, class: &'static ClassInfo) -> Result<&'static Companion> {
        if let Some(entry) = self.cached(class) {
            trace!(class = class.name(), "cached");
            return entry.into_result(class);
        }

        let _resolving = self.resolving.lock();

        // Resolved by another thread while this one waited
        if let Some(entry) = self.cached(class) {
            return entry.into_result(class);
        }

        self.walk(class)?.into_result(class)
    }

    /// Number of cached classes.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    fn cached(&self, class: &'static ClassInfo) -> Option<Entry> {
        self.cache.read().get(class.name()).copied()
    }

    fn walk(&self, class: &'static ClassInfo) -> Result<Entry> {
        let mut visited: Vec<&'static ClassInfo> = Vec::new();
        let mut current = Some(class);

        let outcome = loop {
            let Some(candidate) = current else {
                debug!(class = class.name(), "miss: no superclass left");
                break Entry::Miss;
            };

            if let Some(seen) = visited.iter().find(|seen| seen.name() == candidate.name()) {
                return Err(Error::Resolution {
                    class: class.name(),
                    source: LoadError::Cycle {
                        class: class.name().to_owned(),
                        repeated: seen.name().to_owned(),
                    },
                });
            }
            visited.push(candidate);

            if let Some(entry) = self.cached(candidate) {
                trace!(class = candidate.name(), "hit: cached ancestor");
                break entry;
            }

            trace!(class = candidate.name(), "loading fielder");
            let loaded = self.loader.load(candidate).map_err(|source| Error::Resolution {
                class: class.name(),
                source,
            })?;

            if let Some(companion) = loaded {
                debug!(class = candidate.name(), companion = companion.name(), "hit");
                break Entry::Hit(companion);
            }

            if self.boundary.contains(candidate.name()) {
                debug!(class = candidate.name(), "miss: reached framework class");
                break Entry::Miss;
            }

            trace!(class = candidate.name(), "not found, trying superclass");
            current = candidate.superclass();
        };

        let mut cache = self.cache.write();
        for visited in visited {
            cache.entry(visited.name()).or_insert(outcome);
        }

        Ok(outcome)
    }
}

impl<L: Loader + Default> Default for Resolver<L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}
