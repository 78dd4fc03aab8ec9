//! Class and instance augmentation engines.
//!
//! Class augmentation attaches one [`AugmentedClass`] per extension to a
//! component class. Instance augmentation binds one [`ExtensionInstance`] per
//! extension to a component about to render.
//!
//! [`ExtensionInstance`]: tessera_protocols::ExtensionInstance

use std::sync::Arc;

use tracing::debug;

use tessera_protocols::error::ExtensionError;
use tessera_protocols::{AugmentedClass, Component, ComponentClass, Extension};

/// Synthesize and store the augmented class of every extension on
/// `component_cls`, in order.
///
/// The class declared by the component under the extension's class name comes
/// first in the resolution order, then the base class: the component's
/// override for that extension if it set one, otherwise the extension's own.
/// Re-running replaces the stored classes with equivalent ones.
pub fn augment_component_class(extensions: &[Arc<dyn Extension>], component_cls: &ComponentClass) {
    for extension in extensions {
        let class_name = extension.class_name();
        let declared = component_cls.declared_class(class_name);
        let base = component_cls
            .base_override(extension.name())
            .unwrap_or_else(|| extension.base_class());

        let augmented = AugmentedClass::synthesize(class_name, declared, base);
        debug!(
            component = component_cls.name(),
            extension = extension.name(),
            mro = ?augmented.mro_names(),
            "Augmented component class"
        );
        component_cls.set_augmented_class(class_name, Arc::new(augmented));
    }
}

/// Instantiate every extension's augmented class for `component` and bind the
/// result under the extension's name.
///
/// A class that was never augmented (created before the extensions were
/// known) is augmented on the spot.
pub fn augment_component_instance(
    extensions: &[Arc<dyn Extension>],
    component: &mut Component,
) -> Result<(), ExtensionError> {
    for extension in extensions {
        let class_name = extension.class_name();
        let augmented = match component.class().augmented_class(class_name) {
            Some(class) => class,
            None => {
                debug!(
                    component = component.class().name(),
                    extension = extension.name(),
                    "Component class missing augmented class, augmenting retroactively"
                );
                augment_component_class(extensions, component.class());
                component
                    .class()
                    .augmented_class(class_name)
                    .ok_or_else(|| ExtensionError::NotFound(class_name.to_string()))?
            }
        };

        let instance = augmented.instantiate(component)?;
        component.bind_extension(extension.name(), instance);
    }
    Ok(())
}

#[cfg(test)]
#[path = "augment_tests.rs"]
mod tests;
