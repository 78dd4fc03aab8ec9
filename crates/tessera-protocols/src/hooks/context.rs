//! Hook payloads.
//!
//! One record per lifecycle event, carrying exactly the data relevant to it.

use std::sync::Arc;

use crate::component::{Component, ComponentClass};
use crate::registry::Registry;
use crate::types::{Args, DataMap, Kwargs, Slots, TemplateContext};

/// Payload of `on_component_class_created`.
#[derive(Debug, Clone)]
pub struct OnComponentClassCreatedContext {
    /// The created component class.
    pub component_cls: Arc<ComponentClass>,
}

impl OnComponentClassCreatedContext {
    pub fn new(component_cls: Arc<ComponentClass>) -> Self {
        Self { component_cls }
    }
}

/// Payload of `on_component_class_deleted`.
#[derive(Debug, Clone)]
pub struct OnComponentClassDeletedContext {
    /// The to-be-deleted component class.
    pub component_cls: Arc<ComponentClass>,
}

impl OnComponentClassDeletedContext {
    pub fn new(component_cls: Arc<ComponentClass>) -> Self {
        Self { component_cls }
    }
}

/// Payload of `on_registry_created`.
#[derive(Debug, Clone)]
pub struct OnRegistryCreatedContext {
    pub registry: Arc<dyn Registry>,
}

impl OnRegistryCreatedContext {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self { registry }
    }
}

/// Payload of `on_registry_deleted`.
#[derive(Debug, Clone)]
pub struct OnRegistryDeletedContext {
    pub registry: Arc<dyn Registry>,
}

impl OnRegistryDeletedContext {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self { registry }
    }
}

/// Payload of `on_component_registered`.
#[derive(Debug, Clone)]
pub struct OnComponentRegisteredContext {
    /// The registry the component was registered to.
    pub registry: Arc<dyn Registry>,
    /// The name the component was registered under.
    pub name: String,
    pub component_cls: Arc<ComponentClass>,
}

impl OnComponentRegisteredContext {
    pub fn new(
        registry: Arc<dyn Registry>,
        name: impl Into<String>,
        component_cls: Arc<ComponentClass>,
    ) -> Self {
        Self {
            registry,
            name: name.into(),
            component_cls,
        }
    }
}

/// Payload of `on_component_unregistered`.
#[derive(Debug, Clone)]
pub struct OnComponentUnregisteredContext {
    /// The registry the component was removed from.
    pub registry: Arc<dyn Registry>,
    /// The name the component was registered under.
    pub name: String,
    pub component_cls: Arc<ComponentClass>,
}

impl OnComponentUnregisteredContext {
    pub fn new(
        registry: Arc<dyn Registry>,
        name: impl Into<String>,
        component_cls: Arc<ComponentClass>,
    ) -> Self {
        Self {
            registry,
            name: name.into(),
            component_cls,
        }
    }
}

/// Payload of `on_component_input`.
///
/// Fired before the component computes its data. `args`, `kwargs` and `slots`
/// are what the component will receive.
#[derive(Debug)]
pub struct OnComponentInputContext<'a> {
    /// The component instance being rendered.
    pub component: &'a mut Component,
    pub component_cls: Arc<ComponentClass>,
    /// Unique identifier of this component instance.
    pub component_id: String,
    pub args: Args,
    pub kwargs: Kwargs,
    pub slots: Slots,
    /// The template context the component renders in.
    pub context: TemplateContext,
}

/// Payload of `on_component_data`.
///
/// Fired after the component computed its data and before it renders.
#[derive(Debug)]
pub struct OnComponentDataContext<'a> {
    pub component: &'a mut Component,
    pub component_cls: Arc<ComponentClass>,
    pub component_id: String,
    /// Template variables.
    pub context_data: DataMap,
    pub js_data: DataMap,
    pub css_data: DataMap,
}
