//! # Tessera Core
//!
//! The extension lifecycle and hook-dispatch core.
//!
//! ## Components
//!
//! - [`ExtensionManager`] - Dispatches hooks to the active extensions and
//!   buffers class/registry events until initialization
//! - [`augment`] - Class and instance augmentation engines
//! - [`ComponentRegistry`] - Component store that reports its changes to the manager
//! - [`render_component`] - Runs one render cycle through the manager
//! - [`ExtensionCatalog`] - Builds the active extension list from names

pub mod augment;
pub mod catalog;
pub mod event;
pub mod manager;
pub mod registry;
pub mod render;

pub use catalog::{ExtensionCatalog, ExtensionFactory};
pub use event::BufferedEvent;
pub use manager::{ExtensionManager, ManagerState};
pub use registry::ComponentRegistry;
pub use render::{ComponentData, RenderInput, RenderOutcome, render_component};
