//! Read access to a component registry.

use std::fmt;
use std::sync::Arc;

use crate::component::ComponentClass;

/// A store mapping registered names to component classes.
///
/// Registry hooks receive the registry through this trait.
pub trait Registry: Send + Sync {
    /// Identifier of this registry instance.
    fn id(&self) -> &str;

    /// Look up a component class by registered name.
    fn get(&self, name: &str) -> Option<Arc<ComponentClass>>;

    /// Registered names, sorted.
    fn names(&self) -> Vec<String>;

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl fmt::Debug for dyn Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("id", &self.id()).finish()
    }
}
