//! Component render instances and their bound extension instances.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use uuid::Uuid;

use super::ComponentClass;
use crate::class::AugmentedClass;
use crate::error::ExtensionError;

/// Generate a short unique component instance id (`c` + 7 hex digits).
pub fn generate_component_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("c{}", &hex[..7])
}

/// What an extension instance knows about the component that owns it.
#[derive(Debug, Clone)]
pub struct ComponentRef {
    pub id: String,
    pub registered_name: Option<String>,
    pub class: Arc<ComponentClass>,
}

/// One instantiation of a component class.
///
/// Owns one [`ExtensionInstance`] per active extension once augmented,
/// keyed by extension name.
#[derive(Debug)]
pub struct Component {
    id: String,
    registered_name: Option<String>,
    class: Arc<ComponentClass>,
    extensions: HashMap<String, ExtensionInstance>,
}

impl Component {
    pub fn new(class: Arc<ComponentClass>) -> Self {
        Self {
            id: generate_component_id(),
            registered_name: None,
            class,
            extensions: HashMap::new(),
        }
    }

    pub fn with_registered_name(mut self, name: impl Into<String>) -> Self {
        self.registered_name = Some(name.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn registered_name(&self) -> Option<&str> {
        self.registered_name.as_deref()
    }

    pub fn class(&self) -> &Arc<ComponentClass> {
        &self.class
    }

    pub fn to_ref(&self) -> ComponentRef {
        ComponentRef {
            id: self.id.clone(),
            registered_name: self.registered_name.clone(),
            class: self.class.clone(),
        }
    }

    /// The instance bound for the extension named `name`.
    pub fn extension(&self, name: &str) -> Option<&ExtensionInstance> {
        self.extensions.get(name)
    }

    pub fn extension_mut(&mut self, name: &str) -> Option<&mut ExtensionInstance> {
        self.extensions.get_mut(name)
    }

    /// Bind an extension instance under `name`, replacing any previous one.
    pub fn bind_extension(
        &mut self,
        name: impl Into<String>,
        instance: ExtensionInstance,
    ) -> Option<ExtensionInstance> {
        self.extensions.insert(name.into(), instance)
    }

    /// Names of bound extensions, sorted.
    pub fn extension_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.extensions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Per-component object created from an [`AugmentedClass`].
#[derive(Debug)]
pub struct ExtensionInstance {
    class: Arc<AugmentedClass>,
    component: ComponentRef,
    state: Map<String, Value>,
}

impl ExtensionInstance {
    pub(crate) fn new(class: Arc<AugmentedClass>, component: ComponentRef) -> Self {
        Self {
            class,
            component,
            state: Map::new(),
        }
    }

    pub fn class(&self) -> &Arc<AugmentedClass> {
        &self.class
    }

    /// The owning component.
    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    /// Call a method, resolving it along the class's resolution order.
    pub fn call(&mut self, method: &str, args: &[Value]) -> Result<Value, ExtensionError> {
        let f = self
            .class
            .resolve_method(method)
            .ok_or_else(|| ExtensionError::MethodNotFound {
                class: self.class.name().to_string(),
                method: method.to_string(),
            })?;
        f(self, args)
    }

    pub fn responds_to(&self, method: &str) -> bool {
        self.class.has_method(method)
    }

    /// Class attribute, resolved along the resolution order.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.class.resolve_attr(key)
    }

    pub fn state(&self) -> &Map<String, Value> {
        &self.state
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.state.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.state.remove(key)
    }
}

#[cfg(test)]
#[path = "instance_tests.rs"]
mod tests;
