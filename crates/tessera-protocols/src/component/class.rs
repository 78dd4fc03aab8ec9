//! Component classes.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

use crate::class::{AugmentedClass, ClassDef};

/// Key of the per-component base override for an extension (`"<name>_class"`).
pub fn base_override_key(extension_name: &str) -> String {
    format!("{extension_name}_class")
}

/// A component type.
///
/// Holds the classes the author declared for extensions (keyed by the
/// extension's class name), per-extension base overrides, and the augmented
/// classes synthesized from them. Declarations are fixed at build time;
/// augmented classes and attributes may change afterwards.
#[derive(Debug)]
pub struct ComponentClass {
    name: String,
    declared: HashMap<String, Arc<ClassDef>>,
    base_overrides: HashMap<String, Arc<ClassDef>>,
    augmented: DashMap<String, Arc<AugmentedClass>>,
    attrs: DashMap<String, Value>,
}

impl ComponentClass {
    /// Create a class with no declarations.
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Self::builder(name).build()
    }

    pub fn builder(name: impl Into<String>) -> ComponentClassBuilder {
        ComponentClassBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The class the author declared under `class_name`.
    pub fn declared_class(&self, class_name: &str) -> Option<Arc<ClassDef>> {
        self.declared.get(class_name).cloned()
    }

    /// Base class override for the extension named `extension_name`.
    pub fn base_override(&self, extension_name: &str) -> Option<Arc<ClassDef>> {
        self.base_overrides
            .get(&base_override_key(extension_name))
            .cloned()
    }

    pub fn augmented_class(&self, class_name: &str) -> Option<Arc<AugmentedClass>> {
        self.augmented.get(class_name).map(|entry| entry.value().clone())
    }

    pub fn has_augmented_class(&self, class_name: &str) -> bool {
        self.augmented.contains_key(class_name)
    }

    /// Store an augmented class, replacing any previous one. Returns the
    /// replaced class.
    pub fn set_augmented_class(
        &self,
        class_name: impl Into<String>,
        class: Arc<AugmentedClass>,
    ) -> Option<Arc<AugmentedClass>> {
        self.augmented.insert(class_name.into(), class)
    }

    /// Names of all augmented classes, sorted.
    pub fn augmented_class_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.augmented.iter().map(|e| e.key().clone()).collect();
        names.sort_unstable();
        names
    }

    pub fn attr(&self, key: &str) -> Option<Value> {
        self.attrs.get(key).map(|entry| entry.value().clone())
    }

    /// Set a class attribute. Extensions use this from class hooks.
    pub fn set_attr(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.attrs.insert(key.into(), value)
    }
}

/// Builder for [`ComponentClass`].
pub struct ComponentClassBuilder {
    name: String,
    declared: HashMap<String, Arc<ClassDef>>,
    base_overrides: HashMap<String, Arc<ClassDef>>,
    attrs: HashMap<String, Value>,
}

impl ComponentClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared: HashMap::new(),
            base_overrides: HashMap::new(),
            attrs: HashMap::new(),
        }
    }

    /// Declare the nested class for an extension, keyed by its class name
    /// (`MyExtension` for `my_extension`).
    pub fn nested(mut self, class_name: impl Into<String>, class: Arc<ClassDef>) -> Self {
        self.declared.insert(class_name.into(), class);
        self
    }

    /// Replace the base class the extension named `extension_name` augments
    /// with, for this component only.
    pub fn extension_base(mut self, extension_name: &str, base: Arc<ClassDef>) -> Self {
        self.base_overrides
            .insert(base_override_key(extension_name), base);
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attrs.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Arc<ComponentClass> {
        Arc::new(ComponentClass {
            name: self.name,
            declared: self.declared,
            base_overrides: self.base_overrides,
            augmented: DashMap::new(),
            attrs: self.attrs.into_iter().collect(),
        })
    }
}
