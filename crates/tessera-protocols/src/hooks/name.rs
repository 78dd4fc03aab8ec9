//! Hook identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookName {
    OnComponentClassCreated,
    OnComponentClassDeleted,
    OnRegistryCreated,
    OnRegistryDeleted,
    OnComponentRegistered,
    OnComponentUnregistered,
    OnComponentInput,
    OnComponentData,
}

impl HookName {
    /// Every hook, in declaration order.
    pub const ALL: [HookName; 8] = [
        HookName::OnComponentClassCreated,
        HookName::OnComponentClassDeleted,
        HookName::OnRegistryCreated,
        HookName::OnRegistryDeleted,
        HookName::OnComponentRegistered,
        HookName::OnComponentUnregistered,
        HookName::OnComponentInput,
        HookName::OnComponentData,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HookName::OnComponentClassCreated => "on_component_class_created",
            HookName::OnComponentClassDeleted => "on_component_class_deleted",
            HookName::OnRegistryCreated => "on_registry_created",
            HookName::OnRegistryDeleted => "on_registry_deleted",
            HookName::OnComponentRegistered => "on_component_registered",
            HookName::OnComponentUnregistered => "on_component_unregistered",
            HookName::OnComponentInput => "on_component_input",
            HookName::OnComponentData => "on_component_data",
        }
    }

    /// Class and registry hooks may fire before extensions are configured and
    /// are held back until initialization. Render hooks never are.
    pub fn is_buffered(&self) -> bool {
        !matches!(self, HookName::OnComponentInput | HookName::OnComponentData)
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
