//! Defaults extension definition.

use std::any::Any;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::debug;

use tessera_protocols::error::ExtensionError;
use tessera_protocols::{
    ClassDef, DataMap, Extension, ExtensionInstance, ExtensionMeta, OnComponentDataContext,
    OnComponentInputContext,
};

pub const NAME: &str = "defaults";

const KWARGS: &str = "kwargs";
const CONTEXT_DATA: &str = "context_data";
const APPLIED: &str = "applied";

/// Contents of the `[extensions.settings.defaults]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSettings {
    /// Keyword arguments added when the caller did not pass them.
    #[serde(default)]
    pub kwargs: DataMap,

    /// Template variables added when the component did not compute them.
    #[serde(default)]
    pub context_data: DataMap,
}

/// Injects default kwargs before a component computes its data, and default
/// template variables after.
pub struct DefaultsExtension {
    meta: ExtensionMeta,
    settings: DefaultsSettings,
    base: Arc<ClassDef>,
}

impl DefaultsExtension {
    pub fn new(settings: DefaultsSettings) -> Result<Self, ExtensionError> {
        let meta = ExtensionMeta::new(NAME)?
            .with_description("Fills in default kwargs and context data");
        let base = ClassDef::new("ComponentDefaults")
            .attr(KWARGS, Value::Object(settings.kwargs.clone()))
            .attr(CONTEXT_DATA, Value::Object(settings.context_data.clone()))
            .on_init(|inst| {
                inst.set(APPLIED, json!([]));
                Ok(())
            })
            .method("defaults", |inst, _args| {
                Ok(json!({
                    "kwargs": collect_defaults(inst, KWARGS),
                    "context_data": collect_defaults(inst, CONTEXT_DATA),
                }))
            })
            .method(APPLIED, |inst, _args| {
                Ok(inst.get(APPLIED).cloned().unwrap_or_else(|| json!([])))
            })
            .build();

        Ok(Self {
            meta,
            settings,
            base,
        })
    }

    /// Build from a settings table. `Value::Null` means no settings.
    pub fn from_settings(settings: &Value) -> Result<Self, ExtensionError> {
        let settings = if settings.is_null() {
            DefaultsSettings::default()
        } else {
            serde_json::from_value(settings.clone())?
        };
        Self::new(settings)
    }

    pub fn settings(&self) -> &DefaultsSettings {
        &self.settings
    }

    /// Defaults for `key` as seen by `instance`, or the configured ones when
    /// the component has no bound instance.
    fn defaults_for(&self, instance: Option<&ExtensionInstance>, key: &str) -> DataMap {
        match instance {
            Some(instance) => collect_defaults(instance, key),
            None if key == KWARGS => self.settings.kwargs.clone(),
            None => self.settings.context_data.clone(),
        }
    }
}

impl Extension for DefaultsExtension {
    fn meta(&self) -> &ExtensionMeta {
        &self.meta
    }

    fn base_class(&self) -> Arc<ClassDef> {
        self.base.clone()
    }

    fn on_component_input(&self, ctx: &mut OnComponentInputContext<'_>) -> Result<(), ExtensionError> {
        let defaults = self.defaults_for(ctx.component.extension(NAME), KWARGS);
        let applied = fill_missing(&mut ctx.kwargs, defaults);
        if applied.is_empty() {
            return Ok(());
        }

        debug!(
            component = ctx.component_cls.name(),
            id = %ctx.component_id,
            kwargs = ?applied,
            "Applied default kwargs"
        );
        if let Some(instance) = ctx.component.extension_mut(NAME) {
            instance.set(APPLIED, json!(applied));
        }
        Ok(())
    }

    fn on_component_data(&self, ctx: &mut OnComponentDataContext<'_>) -> Result<(), ExtensionError> {
        let defaults = self.defaults_for(ctx.component.extension(NAME), CONTEXT_DATA);
        let applied = fill_missing(&mut ctx.context_data, defaults);
        if !applied.is_empty() {
            debug!(
                component = ctx.component_cls.name(),
                id = %ctx.component_id,
                context_data = ?applied,
                "Applied default context data"
            );
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Merge the `key` attribute of every class in the resolution order, the
/// earlier classes winning.
fn collect_defaults(instance: &ExtensionInstance, key: &str) -> DataMap {
    let mut merged = Map::new();
    for class in instance.class().mro().iter().rev() {
        if let Some(Value::Object(map)) = class.own_attr(key) {
            for (k, v) in map {
                merged.insert(k.clone(), v.clone());
            }
        }
    }
    merged
}

/// Insert every entry of `defaults` missing from `target`; returns the keys
/// that were inserted.
fn fill_missing(target: &mut DataMap, defaults: DataMap) -> Vec<String> {
    let mut applied = Vec::new();
    for (key, value) in defaults {
        if !target.contains_key(&key) {
            applied.push(key.clone());
            target.insert(key, value);
        }
    }
    applied
}

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;
