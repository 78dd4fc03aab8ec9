//! Hook names and hook payloads.

mod context;
mod name;

pub use context::*;
pub use name::*;
