//! Trace extension definition.

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::{Value, json};
use tracing::{debug, info};

use tessera_protocols::error::ExtensionError;
use tessera_protocols::{
    ClassDef, Extension, ExtensionMeta, HookName, OnComponentClassCreatedContext,
    OnComponentClassDeletedContext, OnComponentDataContext, OnComponentInputContext,
    OnComponentRegisteredContext, OnComponentUnregisteredContext, OnRegistryCreatedContext,
    OnRegistryDeletedContext, Registry,
};

pub const NAME: &str = "trace";

/// Logs every hook and keeps call and render counters.
pub struct TraceExtension {
    meta: ExtensionMeta,
    base: Arc<ClassDef>,
    calls: DashMap<HookName, u64>,
    renders: DashMap<String, u64>,
}

impl TraceExtension {
    pub fn new() -> Result<Self, ExtensionError> {
        let meta = ExtensionMeta::new(NAME)?.with_description("Traces every lifecycle hook");
        let base = ClassDef::new("ComponentTrace")
            .on_init(|inst| {
                let id = inst.component().id.clone();
                inst.set("component_id", json!(id));
                inst.set("render", json!(0));
                Ok(())
            })
            .method("mark", |inst, args| {
                let ordinal = args.first().cloned().unwrap_or(Value::Null);
                inst.set("render", ordinal.clone());
                Ok(ordinal)
            })
            .method("render", |inst, _args| {
                Ok(inst.get("render").cloned().unwrap_or(Value::Null))
            })
            .build();

        Ok(Self {
            meta,
            base,
            calls: DashMap::new(),
            renders: DashMap::new(),
        })
    }

    /// Settings are accepted for symmetry with other extensions and ignored.
    pub fn from_settings(_settings: &Value) -> Result<Self, ExtensionError> {
        Self::new()
    }

    /// Number of calls of `hook` so far.
    pub fn count(&self, hook: HookName) -> u64 {
        self.calls.get(&hook).map(|c| *c).unwrap_or(0)
    }

    /// Call counts of every hook, in declaration order.
    pub fn counts(&self) -> Vec<(HookName, u64)> {
        HookName::ALL.iter().map(|&hook| (hook, self.count(hook))).collect()
    }

    /// Renders of the component class named `component` so far.
    pub fn renders(&self, component: &str) -> u64 {
        self.renders.get(component).map(|c| *c).unwrap_or(0)
    }

    fn record(&self, hook: HookName) {
        *self.calls.entry(hook).or_insert(0) += 1;
    }
}

impl Extension for TraceExtension {
    fn meta(&self) -> &ExtensionMeta {
        &self.meta
    }

    fn base_class(&self) -> Arc<ClassDef> {
        self.base.clone()
    }

    fn on_component_class_created(
        &self,
        ctx: &OnComponentClassCreatedContext,
    ) -> Result<(), ExtensionError> {
        self.record(HookName::OnComponentClassCreated);
        info!(
            component = ctx.component_cls.name(),
            augmented = ?ctx.component_cls.augmented_class_names(),
            "Component class created"
        );
        Ok(())
    }

    fn on_component_class_deleted(
        &self,
        ctx: &OnComponentClassDeletedContext,
    ) -> Result<(), ExtensionError> {
        self.record(HookName::OnComponentClassDeleted);
        info!(component = ctx.component_cls.name(), "Component class deleted");
        Ok(())
    }

    fn on_registry_created(&self, ctx: &OnRegistryCreatedContext) -> Result<(), ExtensionError> {
        self.record(HookName::OnRegistryCreated);
        info!(registry = ctx.registry.id(), "Registry created");
        Ok(())
    }

    fn on_registry_deleted(&self, ctx: &OnRegistryDeletedContext) -> Result<(), ExtensionError> {
        self.record(HookName::OnRegistryDeleted);
        info!(registry = ctx.registry.id(), "Registry deleted");
        Ok(())
    }

    fn on_component_registered(
        &self,
        ctx: &OnComponentRegisteredContext,
    ) -> Result<(), ExtensionError> {
        self.record(HookName::OnComponentRegistered);
        info!(
            registry = ctx.registry.id(),
            name = %ctx.name,
            component = ctx.component_cls.name(),
            "Component registered"
        );
        Ok(())
    }

    fn on_component_unregistered(
        &self,
        ctx: &OnComponentUnregisteredContext,
    ) -> Result<(), ExtensionError> {
        self.record(HookName::OnComponentUnregistered);
        info!(
            registry = ctx.registry.id(),
            name = %ctx.name,
            component = ctx.component_cls.name(),
            "Component unregistered"
        );
        Ok(())
    }

    fn on_component_input(&self, ctx: &mut OnComponentInputContext<'_>) -> Result<(), ExtensionError> {
        self.record(HookName::OnComponentInput);
        let ordinal = {
            let mut renders = self
                .renders
                .entry(ctx.component_cls.name().to_string())
                .or_insert(0);
            *renders += 1;
            *renders
        };

        if let Some(instance) = ctx.component.extension_mut(NAME) {
            instance.call("mark", &[json!(ordinal)])?;
        }
        debug!(
            component = ctx.component_cls.name(),
            id = %ctx.component_id,
            render = ordinal,
            args = ctx.args.len(),
            kwargs = ?ctx.kwargs.keys().collect::<Vec<_>>(),
            slots = ?ctx.slots.keys().collect::<Vec<_>>(),
            "Component input"
        );
        Ok(())
    }

    fn on_component_data(&self, ctx: &mut OnComponentDataContext<'_>) -> Result<(), ExtensionError> {
        self.record(HookName::OnComponentData);
        debug!(
            component = ctx.component_cls.name(),
            id = %ctx.component_id,
            context_data = ?ctx.context_data.keys().collect::<Vec<_>>(),
            js_data = ctx.js_data.len(),
            css_data = ctx.css_data.len(),
            "Component data"
        );
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
