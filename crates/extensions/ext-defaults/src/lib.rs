//! # Tessera Defaults Extension
//!
//! Fills in missing render inputs and template variables.
//!
//! Process-wide defaults come from the `[extensions.settings.defaults]` table.
//! A component refines them by declaring a nested `Defaults` class with
//! `kwargs` / `context_data` attributes; its keys win over the configured ones.

pub mod extension;

pub use extension::{DefaultsExtension, DefaultsSettings};
