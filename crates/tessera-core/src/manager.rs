//! Extension manager: hook dispatch and the pre-initialization event buffer.
//!
//! Class and registry events can fire before the process knows its
//! extensions (component classes are often defined at startup, ahead of
//! configuration). Until [`ExtensionManager::initialize`] runs, those events
//! are queued; initialization replays them in order, augmenting each created
//! class before any extension sees it. Render hooks are never queued.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use tessera_protocols::error::ExtensionError;
use tessera_protocols::extension::{is_identifier, validate_name};
use tessera_protocols::{
    Component, ComponentClass, Extension, HookName, OnComponentClassCreatedContext,
    OnComponentClassDeletedContext, OnComponentDataContext, OnComponentInputContext,
    OnComponentRegisteredContext, OnComponentUnregisteredContext, OnRegistryCreatedContext,
    OnRegistryDeletedContext,
};

use crate::augment;
use crate::event::BufferedEvent;

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;

/// Manager state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ManagerState {
    /// Class and registry events are buffered.
    Uninitialized = 0,
    /// Events are dispatched as they arrive. Terminal.
    Initialized = 1,
}

impl From<u8> for ManagerState {
    fn from(v: u8) -> Self {
        match v {
            1 => ManagerState::Initialized,
            _ => ManagerState::Uninitialized,
        }
    }
}

/// Dispatches lifecycle events to the active extensions.
///
/// Constructed once by the process entry point and shared as
/// `Arc<ExtensionManager>` with everything that emits events. The extension
/// list is fixed at construction.
pub struct ExtensionManager {
    extensions: Vec<Arc<dyn Extension>>,
    state: AtomicU8,
    buffer: Mutex<Vec<BufferedEvent>>,
}

impl ExtensionManager {
    /// Create a manager for `extensions`, in dispatch order.
    ///
    /// Fails if a name or class name is invalid, or if two extensions share
    /// either one.
    pub fn new(extensions: Vec<Arc<dyn Extension>>) -> Result<Self, ExtensionError> {
        for (i, extension) in extensions.iter().enumerate() {
            validate_name(extension.name())?;
            if !is_identifier(extension.class_name()) {
                return Err(ExtensionError::InvalidClassName {
                    name: extension.class_name().to_string(),
                    reason: "must be a valid identifier".to_string(),
                });
            }

            let earlier = &extensions[..i];
            if earlier.iter().any(|e| e.name() == extension.name()) {
                return Err(ExtensionError::AlreadyRegistered(extension.name().to_string()));
            }
            // Augmented classes are keyed by class name.
            if earlier.iter().any(|e| e.class_name() == extension.class_name()) {
                return Err(ExtensionError::AlreadyRegistered(
                    extension.class_name().to_string(),
                ));
            }
        }

        Ok(Self {
            extensions,
            state: AtomicU8::new(ManagerState::Uninitialized as u8),
            buffer: Mutex::new(Vec::new()),
        })
    }

    /// A manager with no extensions.
    pub fn empty() -> Self {
        Self {
            extensions: Vec::new(),
            state: AtomicU8::new(ManagerState::Uninitialized as u8),
            buffer: Mutex::new(Vec::new()),
        }
    }

    pub fn extensions(&self) -> &[Arc<dyn Extension>] {
        &self.extensions
    }

    /// Look up an active extension by name.
    pub fn get_extension(&self, name: &str) -> Option<&Arc<dyn Extension>> {
        self.extensions.iter().find(|e| e.name() == name)
    }

    pub fn state(&self) -> ManagerState {
        ManagerState::from(self.state.load(Ordering::SeqCst))
    }

    pub fn is_initialized(&self) -> bool {
        self.state() == ManagerState::Initialized
    }

    /// Number of events waiting for initialization.
    pub fn pending_events(&self) -> usize {
        self.buffer.lock().len()
    }

    /// Switch to direct dispatch and replay the buffered events in order.
    ///
    /// Runs once; later calls return `Ok(())` without doing anything. The
    /// buffer is emptied even if a replayed hook fails; the first failure is
    /// returned and the remaining events are dropped.
    pub fn initialize(&self) -> Result<(), ExtensionError> {
        let events = {
            let mut buffer = self.buffer.lock();
            if self.is_initialized() {
                return Ok(());
            }
            self.state
                .store(ManagerState::Initialized as u8, Ordering::SeqCst);
            std::mem::take(&mut *buffer)
        };

        info!(
            extensions = self.extensions.len(),
            buffered = events.len(),
            "Extension manager initialized"
        );

        let total = events.len();
        for (i, event) in events.into_iter().enumerate() {
            if let Err(e) = self.dispatch_event(&event) {
                warn!(
                    hook = %event.hook(),
                    dropped = total - i - 1,
                    "Replay of buffered events aborted: {}",
                    e
                );
                return Err(e);
            }
        }
        Ok(())
    }

    /// Drop the buffered events without dispatching them.
    ///
    /// For teardown when [`ExtensionManager::initialize`] will never run.
    /// Buffered registry events hold the registry, which in turn holds the
    /// manager, so the pair is only freed once the buffer is emptied.
    /// Returns the number of events dropped.
    pub fn discard_pending(&self) -> usize {
        let dropped = std::mem::take(&mut *self.buffer.lock());
        if !dropped.is_empty() {
            warn!(dropped = dropped.len(), "Discarding buffered events");
        }
        dropped.len()
    }

    /// Attach every extension's augmented class to `component_cls`.
    ///
    /// Does nothing before initialization; the class is augmented when its
    /// buffered creation event is replayed.
    pub fn augment_component_class(&self, component_cls: &ComponentClass) {
        if !self.is_initialized() {
            return;
        }
        augment::augment_component_class(&self.extensions, component_cls);
    }

    /// Bind every extension's instance onto `component`.
    pub fn augment_component_instance(&self, component: &mut Component) -> Result<(), ExtensionError> {
        augment::augment_component_instance(&self.extensions, component)
    }

    // Component lifecycle hooks

    pub fn on_component_class_created(
        &self,
        ctx: OnComponentClassCreatedContext,
    ) -> Result<(), ExtensionError> {
        self.buffer_or_dispatch(BufferedEvent::ComponentClassCreated(ctx))
    }

    pub fn on_component_class_deleted(
        &self,
        ctx: OnComponentClassDeletedContext,
    ) -> Result<(), ExtensionError> {
        self.buffer_or_dispatch(BufferedEvent::ComponentClassDeleted(ctx))
    }

    pub fn on_registry_created(&self, ctx: OnRegistryCreatedContext) -> Result<(), ExtensionError> {
        self.buffer_or_dispatch(BufferedEvent::RegistryCreated(ctx))
    }

    pub fn on_registry_deleted(&self, ctx: OnRegistryDeletedContext) -> Result<(), ExtensionError> {
        self.buffer_or_dispatch(BufferedEvent::RegistryDeleted(ctx))
    }

    pub fn on_component_registered(
        &self,
        ctx: OnComponentRegisteredContext,
    ) -> Result<(), ExtensionError> {
        self.buffer_or_dispatch(BufferedEvent::ComponentRegistered(ctx))
    }

    pub fn on_component_unregistered(
        &self,
        ctx: OnComponentUnregisteredContext,
    ) -> Result<(), ExtensionError> {
        self.buffer_or_dispatch(BufferedEvent::ComponentUnregistered(ctx))
    }

    // Component render hooks

    pub fn on_component_input(&self, ctx: &mut OnComponentInputContext<'_>) -> Result<(), ExtensionError> {
        self.dispatch(HookName::OnComponentInput, |ext| ext.on_component_input(ctx))
    }

    pub fn on_component_data(&self, ctx: &mut OnComponentDataContext<'_>) -> Result<(), ExtensionError> {
        self.dispatch(HookName::OnComponentData, |ext| ext.on_component_data(ctx))
    }

    fn buffer_or_dispatch(&self, event: BufferedEvent) -> Result<(), ExtensionError> {
        if !self.is_initialized() {
            let mut buffer = self.buffer.lock();
            // Checked again under the lock: initialize() flips the state while
            // holding it, so the event lands either in the drained buffer or here.
            if !self.is_initialized() {
                debug!(hook = %event.hook(), "Buffering event until initialization");
                buffer.push(event);
                return Ok(());
            }
        }
        self.dispatch_event(&event)
    }

    fn dispatch_event(&self, event: &BufferedEvent) -> Result<(), ExtensionError> {
        let hook = event.hook();
        match event {
            BufferedEvent::ComponentClassCreated(ctx) => {
                augment::augment_component_class(&self.extensions, &ctx.component_cls);
                self.dispatch(hook, |ext| ext.on_component_class_created(ctx))
            }
            BufferedEvent::ComponentClassDeleted(ctx) => {
                self.dispatch(hook, |ext| ext.on_component_class_deleted(ctx))
            }
            BufferedEvent::RegistryCreated(ctx) => {
                self.dispatch(hook, |ext| ext.on_registry_created(ctx))
            }
            BufferedEvent::RegistryDeleted(ctx) => {
                self.dispatch(hook, |ext| ext.on_registry_deleted(ctx))
            }
            BufferedEvent::ComponentRegistered(ctx) => {
                self.dispatch(hook, |ext| ext.on_component_registered(ctx))
            }
            BufferedEvent::ComponentUnregistered(ctx) => {
                self.dispatch(hook, |ext| ext.on_component_unregistered(ctx))
            }
        }
    }

    /// Call `f` for each extension in order, stopping at the first error.
    fn dispatch<F>(&self, hook: HookName, mut f: F) -> Result<(), ExtensionError>
    where
        F: FnMut(&dyn Extension) -> Result<(), ExtensionError>,
    {
        for extension in &self.extensions {
            if let Err(e) = f(extension.as_ref()) {
                warn!(
                    extension = extension.name(),
                    hook = %hook,
                    "Extension hook failed: {}",
                    e
                );
                return Err(e);
            }
        }
        Ok(())
    }
}

impl Default for ExtensionManager {
    fn default() -> Self {
        Self::empty()
    }
}
