//! Component classes and render instances.

mod class;
mod instance;

pub use class::*;
pub use instance::*;
