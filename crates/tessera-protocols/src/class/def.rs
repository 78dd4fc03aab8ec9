//! Behavior objects.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::component::ExtensionInstance;
use crate::error::ExtensionError;

/// A method callable on an extension instance.
pub type MethodFn =
    Arc<dyn Fn(&mut ExtensionInstance, &[Value]) -> Result<Value, ExtensionError> + Send + Sync>;

/// Initializer run once when an extension instance is created.
pub type InitFn = Arc<dyn Fn(&mut ExtensionInstance) -> Result<(), ExtensionError> + Send + Sync>;

/// Name of the default extension base class.
pub const BASE_EXTENSION_CLASS: &str = "BaseExtensionClass";

static BASE: Lazy<Arc<ClassDef>> = Lazy::new(|| Arc::new(ClassDef::new(BASE_EXTENSION_CLASS)));

/// A named behavior object with an optional parent.
pub struct ClassDef {
    name: String,
    parent: Option<Arc<ClassDef>>,
    init: Option<InitFn>,
    methods: HashMap<String, MethodFn>,
    attrs: Map<String, Value>,
}

impl ClassDef {
    /// Create an empty class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            init: None,
            methods: HashMap::new(),
            attrs: Map::new(),
        }
    }

    /// The shared `BaseExtensionClass`. Defines nothing; instances still carry
    /// a reference to their component.
    pub fn base() -> Arc<ClassDef> {
        BASE.clone()
    }

    /// Inherit from `parent`.
    pub fn extends(mut self, parent: Arc<ClassDef>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn method<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut ExtensionInstance, &[Value]) -> Result<Value, ExtensionError> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(f));
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attrs.insert(key.into(), value);
        self
    }

    pub fn on_init<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ExtensionInstance) -> Result<(), ExtensionError> + Send + Sync + 'static,
    {
        self.init = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> Arc<ClassDef> {
        Arc::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Arc<ClassDef>> {
        self.parent.as_ref()
    }

    /// Method defined directly on this class.
    pub fn own_method(&self, name: &str) -> Option<&MethodFn> {
        self.methods.get(name)
    }

    /// Attribute defined directly on this class.
    pub fn own_attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub fn own_init(&self) -> Option<&InitFn> {
        self.init.as_ref()
    }

    /// Names of methods defined directly on this class, sorted.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// This class followed by its ancestors.
    pub fn lineage(self: &Arc<Self>) -> Vec<Arc<ClassDef>> {
        let mut chain = vec![self.clone()];
        let mut current = self.parent.clone();
        while let Some(class) = current {
            current = class.parent.clone();
            chain.push(class);
        }
        chain
    }
}

impl fmt::Debug for ClassDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDef")
            .field("name", &self.name)
            .field("parent", &self.parent.as_ref().map(|p| p.name()))
            .field("methods", &self.method_names())
            .field("attrs", &self.attrs)
            .field("has_init", &self.init.is_some())
            .finish()
    }
}
