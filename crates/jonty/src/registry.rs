//! Convention-based companion lookup.
//!
//! Companions generated by a build script are not linked into their class
//! descriptors. They are registered here and found by applying the naming
//! convention to the class name: `app::model::Example` looks for
//! `app::model::Example_Fielder`.
//!
//! ```rust,ignore
//! mod fielders {
//!     include!(concat!(env!("OUT_DIR"), "/jonty_fielders.rs"));
//! }
//!
//! fn main() {
//!     jonty::register(fielders::COMPANIONS);
//! }
//! ```

use std::collections::HashMap;

use jonty_core::Identity;
use parking_lot::RwLock;

use crate::class::{ClassInfo, Companion};
use crate::error::LoadError;
use crate::loader::Loader;

/// Companions indexed by qualified name.
#[derive(Debug, Default)]
pub struct Registry {
    companions: RwLock<HashMap<&'static str, &'static Companion>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every companion in `companions`.
    ///
    /// Registering a name twice keeps the first companion. A companion whose
    /// name is not a fielder name can never be looked up and is skipped.
    pub fn register(&self, companions: &'static [Companion]) {
        let mut map = self.companions.write();
        for companion in companions {
            let conventional =
                Identity::parse(companion.name()).is_ok_and(|identity| identity.is_companion());
            if !conventional {
                crate::log::warn!(
                    companion = companion.name(),
                    "not a fielder name, skipping companion"
                );
                continue;
            }

            let existing = *map.entry(companion.name()).or_insert(companion);
            if existing != companion {
                crate::log::warn!(
                    companion = companion.name(),
                    "companion already registered, keeping the first"
                );
            }
        }
    }

    /// Register a single companion.
    pub fn register_one(&self, companion: &'static Companion) {
        self.register(std::slice::from_ref(companion));
    }

    /// Companion registered under `name`.
    pub fn get(&self, name: &str) -> Option<&'static Companion> {
        self.companions.read().get(name).copied()
    }

    /// Number of registered companions.
    pub fn len(&self) -> usize {
        self.companions.read().len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.companions.read().is_empty()
    }
}

impl Loader for Registry {
    fn load(&self, class: &'static ClassInfo) -> Result<Option<&'static Companion>, LoadError> {
        let name = jonty_core::companion_name(class.name()).map_err(|err| LoadError::InvalidName {
            class: class.name().to_owned(),
            reason: err.to_string(),
        })?;

        let Some(companion) = self.get(&name) else {
            return Ok(None);
        };

        if companion.source() != class.name() {
            return Err(LoadError::Malformed {
                class: class.name().to_owned(),
                companion: companion.name().to_owned(),
                source_class: companion.source().to_owned(),
            });
        }

        Ok(Some(companion))
    }
}
