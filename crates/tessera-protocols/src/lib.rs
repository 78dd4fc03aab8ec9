//! # Tessera Protocols
//!
//! Contracts and data types shared by the Tessera extension core.
//! Contains the extension trait, hook contexts and the class model - no
//! dispatch logic.
//!
//! ## Core Types
//!
//! - [`Extension`] - Trait every extension implements
//! - [`ClassDef`] / [`AugmentedClass`] - Behavior objects and their override chain
//! - [`ComponentClass`] / [`Component`] - Component types and render instances
//! - [`Registry`] - Read access to a component registry
//! - Hook contexts, one per lifecycle event

pub mod class;
pub mod component;
pub mod error;
pub mod extension;
pub mod hooks;
pub mod registry;
pub mod types;

pub use class::{AugmentedClass, ClassDef, InitFn, MethodFn};
pub use component::{Component, ComponentClass, ComponentClassBuilder, ComponentRef, ExtensionInstance};
pub use error::{ExtensionError, RegistryError};
pub use extension::{Extension, ExtensionMeta};
pub use hooks::*;
pub use registry::Registry;
pub use types::*;
