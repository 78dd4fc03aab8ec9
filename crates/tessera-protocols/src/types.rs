//! Value types carried by hook payloads.

use serde_json::{Map, Value};

/// Positional arguments passed to a component.
pub type Args = Vec<Value>;

/// Keyword arguments passed to a component.
pub type Kwargs = Map<String, Value>;

/// Slot fills passed to a component, keyed by slot name.
pub type Slots = Map<String, Value>;

/// Data computed by a component (`context_data`, `js_data`, `css_data`).
pub type DataMap = Map<String, Value>;

/// Variables of the template context the component renders in.
pub type TemplateContext = Map<String, Value>;
