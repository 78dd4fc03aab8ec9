//! Augmented classes: explicit override chains.

use std::sync::Arc;

use serde_json::Value;

use super::{ClassDef, InitFn, MethodFn};
use crate::component::{Component, ExtensionInstance};
use crate::error::ExtensionError;

/// The class an extension attaches to a component class.
///
/// Lookups walk the resolution order front to back: the user-declared class
/// and its ancestors, then the base class and its ancestors. A class that
/// appears in both chains keeps only its last position, so a shared ancestor
/// never shadows a more specific base.
#[derive(Debug)]
pub struct AugmentedClass {
    name: String,
    declared: Option<Arc<ClassDef>>,
    base: Arc<ClassDef>,
    mro: Vec<Arc<ClassDef>>,
}

impl AugmentedClass {
    /// Combine an optional user declaration with a base class.
    pub fn synthesize(
        name: impl Into<String>,
        declared: Option<Arc<ClassDef>>,
        base: Arc<ClassDef>,
    ) -> Self {
        let mut chain = Vec::new();
        if let Some(declared) = &declared {
            chain.extend(declared.lineage());
        }
        chain.extend(base.lineage());

        let mro = chain
            .iter()
            .enumerate()
            .filter(|&(i, class)| !chain[i + 1..].iter().any(|later| Arc::ptr_eq(later, class)))
            .map(|(_, class)| class.clone())
            .collect();

        Self {
            name: name.into(),
            declared,
            base,
            mro,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The class the component declared for this extension, if any.
    pub fn declared(&self) -> Option<&Arc<ClassDef>> {
        self.declared.as_ref()
    }

    /// The resolved base class.
    pub fn base(&self) -> &Arc<ClassDef> {
        &self.base
    }

    /// Resolution order, most specific first.
    pub fn mro(&self) -> &[Arc<ClassDef>] {
        &self.mro
    }

    pub fn mro_names(&self) -> Vec<&str> {
        self.mro.iter().map(|class| class.name()).collect()
    }

    /// Whether both classes resolve through the same class objects.
    pub fn same_resolution(&self, other: &AugmentedClass) -> bool {
        self.mro.len() == other.mro.len()
            && self
                .mro
                .iter()
                .zip(&other.mro)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }

    pub fn resolve_method(&self, name: &str) -> Option<MethodFn> {
        self.mro
            .iter()
            .find_map(|class| class.own_method(name).cloned())
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.mro.iter().any(|class| class.own_method(name).is_some())
    }

    pub fn resolve_attr(&self, key: &str) -> Option<&Value> {
        self.mro.iter().find_map(|class| class.own_attr(key))
    }

    fn resolve_init(&self) -> Option<InitFn> {
        self.mro.iter().find_map(|class| class.own_init().cloned())
    }

    /// Create the per-component instance. The first initializer along the
    /// resolution order runs.
    pub fn instantiate(
        self: &Arc<Self>,
        component: &Component,
    ) -> Result<ExtensionInstance, ExtensionError> {
        let mut instance = ExtensionInstance::new(self.clone(), component.to_ref());
        if let Some(init) = self.resolve_init() {
            init(&mut instance)?;
        }
        Ok(instance)
    }
}

#[cfg(test)]
#[path = "augmented_tests.rs"]
mod tests;
