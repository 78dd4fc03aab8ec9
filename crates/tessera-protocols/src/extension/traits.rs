//! Extension trait definition.

use std::any::Any;
use std::sync::Arc;

use super::ExtensionMeta;
use crate::class::ClassDef;
use crate::error::ExtensionError;
use crate::hooks::{
    OnComponentClassCreatedContext, OnComponentClassDeletedContext, OnComponentDataContext,
    OnComponentInputContext, OnComponentRegisteredContext, OnComponentUnregisteredContext,
    OnRegistryCreatedContext, OnRegistryDeletedContext,
};

/// Core trait for all extensions.
///
/// Every hook defaults to a no-op. A hook that returns an error aborts the
/// operation that triggered it; the error reaches the caller unchanged.
///
/// Class and registry hooks receive shared contexts. Render hooks receive the
/// context mutably, and every extension sees the changes made by the ones
/// registered before it.
pub trait Extension: Send + Sync + 'static {
    /// Returns the extension metadata.
    fn meta(&self) -> &ExtensionMeta;

    /// Name under which the bound instance is stored on components.
    fn name(&self) -> &str {
        &self.meta().name
    }

    /// Name under which the augmented class is stored on component classes.
    fn class_name(&self) -> &str {
        &self.meta().class_name
    }

    /// Class the per-component augmented class falls back to.
    fn base_class(&self) -> Arc<ClassDef> {
        ClassDef::base()
    }

    // Component lifecycle hooks

    /// Called after a component class is defined, before it is registered.
    fn on_component_class_created(
        &self,
        _ctx: &OnComponentClassCreatedContext,
    ) -> Result<(), ExtensionError> {
        Ok(())
    }

    /// Called before a component class is dropped.
    fn on_component_class_deleted(
        &self,
        _ctx: &OnComponentClassDeletedContext,
    ) -> Result<(), ExtensionError> {
        Ok(())
    }

    /// Called after a registry is created.
    fn on_registry_created(&self, _ctx: &OnRegistryCreatedContext) -> Result<(), ExtensionError> {
        Ok(())
    }

    /// Called before a registry is deleted.
    fn on_registry_deleted(&self, _ctx: &OnRegistryDeletedContext) -> Result<(), ExtensionError> {
        Ok(())
    }

    /// Called after a component class is registered.
    fn on_component_registered(
        &self,
        _ctx: &OnComponentRegisteredContext,
    ) -> Result<(), ExtensionError> {
        Ok(())
    }

    /// Called after a component class is removed from a registry.
    fn on_component_unregistered(
        &self,
        _ctx: &OnComponentUnregisteredContext,
    ) -> Result<(), ExtensionError> {
        Ok(())
    }

    // Component render hooks

    /// Called before the component's data methods run. Mutate `ctx.kwargs`,
    /// `ctx.args` or `ctx.slots` to change the input.
    fn on_component_input(&self, _ctx: &mut OnComponentInputContext<'_>) -> Result<(), ExtensionError> {
        Ok(())
    }

    /// Called after the component's data methods ran. Mutate the data maps to
    /// change what gets rendered.
    fn on_component_data(&self, _ctx: &mut OnComponentDataContext<'_>) -> Result<(), ExtensionError> {
        Ok(())
    }

    /// Returns a reference to the extension as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}
