//! Class model for per-component extension state.
//!
//! A [`ClassDef`] is a named bundle of methods, attributes and an optional
//! initializer. An [`AugmentedClass`] combines the class a component declares
//! for an extension with the extension's base class into one resolution
//! chain, user declaration first.

mod augmented;
mod def;

pub use augmented::*;
pub use def::*;
