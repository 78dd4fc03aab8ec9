//! # Tessera Trace Extension
//!
//! Emits a `tracing` event for every lifecycle hook and counts hook calls.
//! Each rendered component gets a `trace` instance counting its renders.

pub mod extension;

pub use extension::TraceExtension;
