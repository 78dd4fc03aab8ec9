use super::*;
use tessera_core::{ComponentData, ExtensionManager, RenderInput, render_component};
use tessera_protocols::{Component, ComponentClass};

fn settings() -> Value {
    json!({
        "kwargs": {"theme": "light", "size": "md"},
        "context_data": {"site": "docs"},
    })
}

fn manager(settings: &Value) -> ExtensionManager {
    let ext = DefaultsExtension::from_settings(settings).unwrap();
    let manager = ExtensionManager::new(vec![Arc::new(ext)]).unwrap();
    manager.initialize().unwrap();
    manager
}

fn echo_kwargs(_component: &Component, input: &RenderInput) -> Result<ComponentData, ExtensionError> {
    Ok(ComponentData::new(input.kwargs.clone()))
}

#[test]
fn test_extension_meta() {
    let ext = DefaultsExtension::from_settings(&Value::Null).unwrap();
    assert_eq!(ext.name(), "defaults");
    assert_eq!(ext.class_name(), "Defaults");
    assert!(ext.meta().description.contains("default"));
    assert_eq!(ext.settings(), &DefaultsSettings::default());
}

#[test]
fn test_from_settings_rejects_unknown_keys() {
    let result = DefaultsExtension::from_settings(&json!({"kwarg": {}}));
    assert!(matches!(result, Err(ExtensionError::Serialization(_))));
}

#[test]
fn test_missing_kwargs_filled() {
    let manager = manager(&settings());
    let button = ComponentClass::new("Button");

    let outcome = render_component(
        &manager,
        &button,
        RenderInput::new().kwarg("theme", json!("dark")),
        echo_kwargs,
    )
    .unwrap();

    assert_eq!(outcome.input.kwargs["theme"], json!("dark"));
    assert_eq!(outcome.input.kwargs["size"], json!("md"));
    assert_eq!(outcome.data.context_data["site"], json!("docs"));
    let bound = outcome.component.extension("defaults").unwrap();
    assert_eq!(bound.get("applied"), Some(&json!(["size"])));
}

#[test]
fn test_computed_context_data_wins() {
    let manager = manager(&settings());
    let page = ComponentClass::new("Page");

    let outcome = render_component(&manager, &page, RenderInput::new(), |_c, _i| {
        let mut data = Map::new();
        data.insert("site".to_string(), json!("blog"));
        Ok(ComponentData::new(data))
    })
    .unwrap();

    assert_eq!(outcome.data.context_data["site"], json!("blog"));
}

#[test]
fn test_nested_defaults_class_refines_configured_ones() {
    let manager = manager(&settings());
    let alert = ComponentClass::builder("Alert")
        .nested(
            "Defaults",
            ClassDef::new("Defaults")
                .attr("kwargs", json!({"theme": "warning"}))
                .build(),
        )
        .build();
    manager.augment_component_class(&alert);

    let outcome = render_component(&manager, &alert, RenderInput::new(), echo_kwargs).unwrap();

    assert_eq!(outcome.input.kwargs["theme"], json!("warning"));
    assert_eq!(outcome.input.kwargs["size"], json!("md"));

    let mut component = outcome.component;
    let defaults = component
        .extension_mut("defaults")
        .unwrap()
        .call("defaults", &[])
        .unwrap();
    assert_eq!(defaults["kwargs"], json!({"theme": "warning", "size": "md"}));
    assert_eq!(defaults["context_data"], json!({"site": "docs"}));
}

#[test]
fn test_nothing_applied_leaves_instance_untouched() {
    let manager = manager(&Value::Null);
    let button = ComponentClass::new("Button");

    let mut outcome =
        render_component(&manager, &button, RenderInput::new(), echo_kwargs).unwrap();

    let bound = outcome.component.extension_mut("defaults").unwrap();
    assert_eq!(bound.call("applied", &[]).unwrap(), json!([]));
    assert!(outcome.input.kwargs.is_empty());
}

#[test]
fn test_fill_missing_reports_inserted_keys() {
    let mut target = Map::new();
    target.insert("a".to_string(), json!(1));
    let mut defaults = Map::new();
    defaults.insert("a".to_string(), json!(0));
    defaults.insert("b".to_string(), json!(2));

    let applied = fill_missing(&mut target, defaults);

    assert_eq!(applied, vec!["b"]);
    assert_eq!(target["a"], json!(1));
    assert_eq!(target["b"], json!(2));
}

#[test]
fn test_as_any() {
    let ext = DefaultsExtension::from_settings(&Value::Null).unwrap();
    assert!(ext.as_any().downcast_ref::<DefaultsExtension>().is_some());
}
