use super::*;
use serde_json::{Value, json};
use std::any::Any;
use tessera_protocols::{ClassDef, ExtensionMeta};

struct MockExtension {
    meta: ExtensionMeta,
    base: Arc<ClassDef>,
}

impl MockExtension {
    fn new(name: &str, base: Arc<ClassDef>) -> Arc<dyn Extension> {
        Arc::new(Self {
            meta: ExtensionMeta::new(name).unwrap(),
            base,
        })
    }
}

impl Extension for MockExtension {
    fn meta(&self) -> &ExtensionMeta {
        &self.meta
    }

    fn base_class(&self) -> Arc<ClassDef> {
        self.base.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn foo_base() -> Arc<ClassDef> {
    ClassDef::new("FooBase")
        .method("describe", |_inst, _args| Ok(json!("base")))
        .method("only_base", |_inst, _args| Ok(json!(true)))
        .build()
}

#[test]
fn test_augment_without_declaration() {
    let base = foo_base();
    let extensions = vec![MockExtension::new("foo", base.clone())];
    let widget = ComponentClass::new("Widget");

    augment_component_class(&extensions, &widget);

    let augmented = widget.augmented_class("Foo").unwrap();
    assert_eq!(augmented.mro_names(), vec!["FooBase"]);
    assert!(Arc::ptr_eq(augmented.base(), &base));
    assert!(augmented.declared().is_none());
}

#[test]
fn test_declared_class_takes_precedence() {
    let extensions = vec![MockExtension::new("foo", foo_base())];
    let widget = ComponentClass::builder("Widget")
        .nested(
            "Foo",
            ClassDef::new("Foo")
                .method("describe", |_inst, _args| Ok(json!("user")))
                .build(),
        )
        .build();

    augment_component_class(&extensions, &widget);

    let augmented = widget.augmented_class("Foo").unwrap();
    assert_eq!(augmented.mro_names(), vec!["Foo", "FooBase"]);

    let mut component = Component::new(widget.clone());
    augment_component_instance(&extensions, &mut component).unwrap();
    let foo = component.extension_mut("foo").unwrap();
    assert_eq!(foo.call("describe", &[]).unwrap(), json!("user"));
    assert_eq!(foo.call("only_base", &[]).unwrap(), json!(true));
}

#[test]
fn test_augmentation_is_idempotent() {
    let extensions = vec![MockExtension::new("foo", foo_base())];
    let widget = ComponentClass::builder("Widget")
        .nested("Foo", ClassDef::new("Foo").build())
        .build();

    augment_component_class(&extensions, &widget);
    let first = widget.augmented_class("Foo").unwrap();

    augment_component_class(&extensions, &widget);
    let second = widget.augmented_class("Foo").unwrap();

    assert!(first.same_resolution(&second));
    assert_eq!(second.mro_names(), vec!["Foo", "FooBase"]);
    assert_eq!(widget.augmented_class_names(), vec!["Foo".to_string()]);
}

#[test]
fn test_component_base_override() {
    let custom = ClassDef::new("CustomFooBase")
        .extends(foo_base())
        .method("describe", |_inst, _args| Ok(json!("custom")))
        .build();
    let extensions = vec![MockExtension::new("foo", foo_base())];
    let widget = ComponentClass::builder("Widget")
        .extension_base("foo", custom)
        .build();

    augment_component_class(&extensions, &widget);
    let augmented = widget.augmented_class("Foo").unwrap();
    assert_eq!(augmented.mro_names(), vec!["CustomFooBase", "FooBase"]);

    let mut component = Component::new(widget);
    augment_component_instance(&extensions, &mut component).unwrap();
    let foo = component.extension_mut("foo").unwrap();
    assert_eq!(foo.call("describe", &[]).unwrap(), json!("custom"));
}

#[test]
fn test_override_only_applies_to_named_extension() {
    let custom = ClassDef::new("Custom").build();
    let extensions = vec![
        MockExtension::new("foo", foo_base()),
        MockExtension::new("bar", ClassDef::base()),
    ];
    let widget = ComponentClass::builder("Widget")
        .extension_base("foo", custom)
        .build();

    augment_component_class(&extensions, &widget);
    assert_eq!(widget.augmented_class("Foo").unwrap().mro_names(), vec!["Custom"]);
    assert_eq!(
        widget.augmented_class("Bar").unwrap().mro_names(),
        vec!["BaseExtensionClass"]
    );
}

#[test]
fn test_instance_augmentation_binds_every_extension() {
    let extensions = vec![
        MockExtension::new("foo", foo_base()),
        MockExtension::new("my_extension", ClassDef::base()),
    ];
    let widget = ComponentClass::new("Widget");
    augment_component_class(&extensions, &widget);

    let mut component = Component::new(widget);
    augment_component_instance(&extensions, &mut component).unwrap();

    assert_eq!(component.extension_names(), vec!["foo", "my_extension"]);
    let bound = component.extension("my_extension").unwrap();
    assert_eq!(bound.class().name(), "MyExtension");
    assert_eq!(bound.component().id, component.id());
}

#[test]
fn test_instance_augmentation_retroactively_augments_class() {
    let extensions = vec![MockExtension::new("foo", foo_base())];
    let widget = ComponentClass::new("Widget");
    assert!(!widget.has_augmented_class("Foo"));

    let mut component = Component::new(widget.clone());
    augment_component_instance(&extensions, &mut component).unwrap();

    assert!(widget.has_augmented_class("Foo"));
    assert!(component.extension("foo").is_some());
}

#[test]
fn test_instances_do_not_share_state() {
    let base = ClassDef::new("Store")
        .method("put", |inst, args| {
            let value = args.first().cloned().unwrap_or(Value::Null);
            inst.set("value", value);
            Ok(Value::Null)
        })
        .build();
    let extensions = vec![MockExtension::new("store", base)];
    let widget = ComponentClass::new("Widget");
    augment_component_class(&extensions, &widget);

    let mut first = Component::new(widget.clone());
    let mut second = Component::new(widget);
    augment_component_instance(&extensions, &mut first).unwrap();
    augment_component_instance(&extensions, &mut second).unwrap();

    first
        .extension_mut("store")
        .unwrap()
        .call("put", &[json!("one")])
        .unwrap();

    assert_eq!(first.extension("store").unwrap().get("value"), Some(&json!("one")));
    assert_eq!(second.extension("store").unwrap().get("value"), None);
}

#[test]
fn test_initializer_error_aborts_instance_augmentation() {
    let failing = ClassDef::new("Failing")
        .on_init(|_inst| Err(ExtensionError::Rejected("bad component".to_string())))
        .build();
    let extensions = vec![MockExtension::new("strict", failing)];
    let mut component = Component::new(ComponentClass::new("Widget"));

    let result = augment_component_instance(&extensions, &mut component);
    assert!(matches!(result, Err(ExtensionError::Rejected(_))));
    assert!(component.extension("strict").is_none());
}

#[test]
fn test_no_extensions_is_noop() {
    let widget = ComponentClass::new("Widget");
    augment_component_class(&[], &widget);
    assert!(widget.augmented_class_names().is_empty());

    let mut component = Component::new(widget);
    augment_component_instance(&[], &mut component).unwrap();
    assert!(component.extension_names().is_empty());
}
