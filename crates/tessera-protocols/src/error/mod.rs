//! Error types for the Tessera protocol layer.

mod extension;
mod registry;

pub use extension::*;
pub use registry::*;
