//! Built-in extension registration for Tessera.

use std::sync::Arc;

use tessera_core::ExtensionCatalog;
use tessera_protocols::error::ExtensionError;
use tessera_protocols::Extension;

use tessera_ext_defaults::DefaultsExtension;
use tessera_ext_trace::TraceExtension;

/// Catalog of the extensions shipped with the binary.
pub(crate) fn builtin_catalog() -> Result<ExtensionCatalog, ExtensionError> {
    let mut catalog = ExtensionCatalog::new();

    catalog.register(
        "defaults",
        "Fills in default kwargs and context data",
        |settings| -> Result<Arc<dyn Extension>, ExtensionError> {
            Ok(Arc::new(DefaultsExtension::from_settings(settings)?))
        },
    )?;

    catalog.register(
        "trace",
        "Traces every lifecycle hook",
        |settings| -> Result<Arc<dyn Extension>, ExtensionError> {
            Ok(Arc::new(TraceExtension::from_settings(settings)?))
        },
    )?;

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_builtin_names() {
        let catalog = builtin_catalog().unwrap();
        let names: Vec<&str> = catalog.available().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["defaults", "trace"]);
    }

    #[test]
    fn test_builtins_build_with_settings() {
        let catalog = builtin_catalog().unwrap();
        let mut settings = HashMap::new();
        settings.insert("defaults".to_string(), json!({"kwargs": {"theme": "light"}}));

        let extensions = catalog
            .build(&["trace".to_string(), "defaults".to_string()], &settings)
            .unwrap();

        assert_eq!(extensions[0].name(), "trace");
        let defaults = extensions[1]
            .as_any()
            .downcast_ref::<DefaultsExtension>()
            .unwrap();
        assert_eq!(defaults.settings().kwargs["theme"], json!("light"));
    }
}
