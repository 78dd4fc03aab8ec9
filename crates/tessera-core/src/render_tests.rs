use super::*;
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::any::Any;
use tessera_protocols::{ClassDef, Extension, ExtensionMeta};

/// Fills in a default `theme` kwarg and stamps the rendered data.
struct ThemeExtension {
    meta: ExtensionMeta,
    calls: Mutex<Vec<&'static str>>,
}

impl ThemeExtension {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            meta: ExtensionMeta::new("theme").unwrap(),
            calls: Mutex::new(Vec::new()),
        })
    }
}

impl Extension for ThemeExtension {
    fn meta(&self) -> &ExtensionMeta {
        &self.meta
    }

    fn base_class(&self) -> Arc<ClassDef> {
        ClassDef::new("ThemeBase")
            .method("palette", |_inst, _args| Ok(json!("default")))
            .build()
    }

    fn on_component_input(&self, ctx: &mut OnComponentInputContext<'_>) -> Result<(), ExtensionError> {
        self.calls.lock().push("input");
        assert!(ctx.component.extension("theme").is_some());
        ctx.kwargs
            .entry("theme")
            .or_insert_with(|| json!("light"));
        Ok(())
    }

    fn on_component_data(&self, ctx: &mut OnComponentDataContext<'_>) -> Result<(), ExtensionError> {
        self.calls.lock().push("data");
        let palette = ctx
            .component
            .extension_mut("theme")
            .ok_or_else(|| ExtensionError::NotFound("theme".to_string()))?
            .call("palette", &[])?;
        ctx.css_data.insert("palette".to_string(), palette);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn manager_with(theme: &Arc<ThemeExtension>) -> ExtensionManager {
    let manager = ExtensionManager::new(vec![theme.clone()]).unwrap();
    manager.initialize().unwrap();
    manager
}

fn echo_theme(_component: &Component, input: &RenderInput) -> Result<ComponentData, ExtensionError> {
    let mut context_data = Map::new();
    context_data.insert(
        "theme".to_string(),
        input.kwargs.get("theme").cloned().unwrap_or(Value::Null),
    );
    Ok(ComponentData::new(context_data))
}

#[test]
fn test_render_runs_hooks_in_order() {
    let theme = ThemeExtension::new();
    let manager = manager_with(&theme);
    let button = ComponentClass::new("Button");

    let outcome = render_component(&manager, &button, RenderInput::new(), echo_theme).unwrap();

    assert_eq!(*theme.calls.lock(), vec!["input", "data"]);
    assert_eq!(outcome.data.context_data.get("theme"), Some(&json!("light")));
    assert_eq!(outcome.data.css_data.get("palette"), Some(&json!("default")));
    assert_eq!(outcome.input.kwargs.get("theme"), Some(&json!("light")));
    assert!(outcome.component.extension("theme").is_some());
}

#[test]
fn test_render_keeps_explicit_inputs() {
    let theme = ThemeExtension::new();
    let manager = manager_with(&theme);
    let button = ComponentClass::new("Button");
    let input = RenderInput::new()
        .arg(json!(1))
        .kwarg("theme", json!("dark"))
        .slot("content", json!("Click"))
        .context("user", json!("ada"))
        .registered_name("button");

    let outcome = render_component(&manager, &button, input, echo_theme).unwrap();

    assert_eq!(outcome.data.context_data.get("theme"), Some(&json!("dark")));
    assert_eq!(outcome.input.args, vec![json!(1)]);
    assert_eq!(outcome.input.slots.get("content"), Some(&json!("Click")));
    assert_eq!(outcome.input.context.get("user"), Some(&json!("ada")));
    assert_eq!(outcome.component.registered_name(), Some("button"));
}

#[test]
fn test_user_nested_class_overrides_base_during_render() {
    let theme = ThemeExtension::new();
    let manager = manager_with(&theme);
    let button = ComponentClass::builder("Button")
        .nested(
            "Theme",
            ClassDef::new("Theme")
                .method("palette", |_inst, _args| Ok(json!("brand")))
                .build(),
        )
        .build();
    manager.augment_component_class(&button);

    let outcome = render_component(&manager, &button, RenderInput::new(), echo_theme).unwrap();

    assert_eq!(outcome.data.css_data.get("palette"), Some(&json!("brand")));
}

#[test]
fn test_compute_error_aborts_before_data_hook() {
    let theme = ThemeExtension::new();
    let manager = manager_with(&theme);
    let button = ComponentClass::new("Button");

    let result = render_component(&manager, &button, RenderInput::new(), |_c, _i| {
        Err(ExtensionError::Custom("template missing".to_string()))
    });

    assert!(matches!(result, Err(ExtensionError::Custom(_))));
    assert_eq!(*theme.calls.lock(), vec!["input"]);
}

#[test]
fn test_render_without_extensions() {
    let manager = ExtensionManager::empty();
    let button = ComponentClass::new("Button");

    let outcome = render_component(
        &manager,
        &button,
        RenderInput::new().kwarg("label", json!("OK")),
        |component, input| {
            let mut data = Map::new();
            data.insert("id".to_string(), json!(component.id()));
            data.insert("label".to_string(), input.kwargs["label"].clone());
            Ok(ComponentData::new(data))
        },
    )
    .unwrap();

    assert_eq!(outcome.data.context_data.get("label"), Some(&json!("OK")));
    assert_eq!(
        outcome.data.context_data.get("id"),
        Some(&json!(outcome.component.id()))
    );
    assert!(outcome.component.extension_names().is_empty());
}

#[test]
fn test_each_render_gets_fresh_component() {
    let manager = ExtensionManager::empty();
    let button = ComponentClass::new("Button");

    let first = render_component(&manager, &button, RenderInput::new(), |_c, _i| {
        Ok(ComponentData::default())
    })
    .unwrap();
    let second = render_component(&manager, &button, RenderInput::new(), |_c, _i| {
        Ok(ComponentData::default())
    })
    .unwrap();

    assert_ne!(first.component.id(), second.component.id());
}
