//! Extension protocol definitions.
//!
//! Extensions hook into component, registry and render lifecycle events, and
//! may attach a per-component augmented class.

mod meta;
mod traits;

pub use meta::*;
pub use traits::*;
