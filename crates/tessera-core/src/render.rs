//! Render driver.
//!
//! Runs the extension side of one render: create the component, bind the
//! extension instances, let extensions adjust the inputs, compute the data,
//! and let extensions adjust the data. Template rendering is left to the
//! caller.

use std::sync::Arc;

use serde_json::Map;
use tracing::debug;

use tessera_protocols::error::ExtensionError;
use tessera_protocols::{
    Args, Component, ComponentClass, DataMap, Kwargs, OnComponentDataContext,
    OnComponentInputContext, Slots, TemplateContext,
};

use crate::manager::ExtensionManager;

/// Inputs of one render, as passed by the caller.
#[derive(Debug, Clone, Default)]
pub struct RenderInput {
    pub args: Args,
    pub kwargs: Kwargs,
    pub slots: Slots,
    pub context: TemplateContext,
    /// Name the component was looked up under, if it came from a registry.
    pub registered_name: Option<String>,
}

impl RenderInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, value: serde_json::Value) -> Self {
        self.args.push(value);
        self
    }

    pub fn kwarg(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.kwargs.insert(key.into(), value);
        self
    }

    pub fn slot(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.slots.insert(name.into(), value);
        self
    }

    pub fn context(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.context.insert(key.into(), value);
        self
    }

    pub fn registered_name(mut self, name: impl Into<String>) -> Self {
        self.registered_name = Some(name.into());
        self
    }
}

/// Data computed by a component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentData {
    /// Template variables.
    pub context_data: DataMap,
    pub js_data: DataMap,
    pub css_data: DataMap,
}

impl ComponentData {
    pub fn new(context_data: DataMap) -> Self {
        Self {
            context_data,
            js_data: Map::new(),
            css_data: Map::new(),
        }
    }
}

/// Result of a render: the component with its bound extension instances, and
/// the data after every extension had a chance to change it.
#[derive(Debug)]
pub struct RenderOutcome {
    pub component: Component,
    /// Inputs as the component received them.
    pub input: RenderInput,
    pub data: ComponentData,
}

/// Run one render of `component_cls`.
///
/// `compute` receives the component and the inputs after `on_component_input`
/// ran. Any hook error or `compute` error aborts the render.
pub fn render_component<F>(
    manager: &ExtensionManager,
    component_cls: &Arc<ComponentClass>,
    input: RenderInput,
    compute: F,
) -> Result<RenderOutcome, ExtensionError>
where
    F: FnOnce(&Component, &RenderInput) -> Result<ComponentData, ExtensionError>,
{
    let mut component = Component::new(component_cls.clone());
    if let Some(name) = &input.registered_name {
        component = component.with_registered_name(name.clone());
    }
    let component_id = component.id().to_string();
    debug!(
        component = component_cls.name(),
        id = %component_id,
        "Rendering component"
    );

    manager.augment_component_instance(&mut component)?;

    let RenderInput {
        args,
        kwargs,
        slots,
        context,
        registered_name,
    } = input;
    let mut input_ctx = OnComponentInputContext {
        component: &mut component,
        component_cls: component_cls.clone(),
        component_id: component_id.clone(),
        args,
        kwargs,
        slots,
        context,
    };
    manager.on_component_input(&mut input_ctx)?;
    let input = RenderInput {
        args: input_ctx.args,
        kwargs: input_ctx.kwargs,
        slots: input_ctx.slots,
        context: input_ctx.context,
        registered_name,
    };

    let ComponentData {
        context_data,
        js_data,
        css_data,
    } = compute(&component, &input)?;

    let mut data_ctx = OnComponentDataContext {
        component: &mut component,
        component_cls: component_cls.clone(),
        component_id,
        context_data,
        js_data,
        css_data,
    };
    manager.on_component_data(&mut data_ctx)?;
    let data = ComponentData {
        context_data: data_ctx.context_data,
        js_data: data_ctx.js_data,
        css_data: data_ctx.css_data,
    };

    Ok(RenderOutcome {
        component,
        input,
        data,
    })
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
