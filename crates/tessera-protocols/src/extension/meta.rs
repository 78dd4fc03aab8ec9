//! Extension metadata and name validation.

use serde::Serialize;

use crate::error::ExtensionError;

/// Identity of an extension.
///
/// `name` is where the bound instance lives on a component, `class_name` is
/// where the augmented class lives on a component class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionMeta {
    pub name: String,
    pub class_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl ExtensionMeta {
    /// Create metadata for `name`, deriving `class_name` from it.
    ///
    /// Fails when `name` is empty, not an identifier, or not lowercase.
    pub fn new(name: impl Into<String>) -> Result<Self, ExtensionError> {
        let name = name.into();
        validate_name(&name)?;
        let class_name = snake_to_pascal(&name);
        Ok(Self {
            name,
            class_name,
            description: String::new(),
        })
    }

    /// Override the derived class name.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Result<Self, ExtensionError> {
        let class_name = class_name.into();
        if !is_identifier(&class_name) {
            return Err(ExtensionError::InvalidClassName {
                name: class_name,
                reason: "must be a valid identifier".to_string(),
            });
        }
        self.class_name = class_name;
        Ok(self)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Check that `name` is usable as an extension name.
pub fn validate_name(name: &str) -> Result<(), ExtensionError> {
    if name.is_empty() {
        return Err(ExtensionError::invalid_name(name, "must not be empty"));
    }
    if !is_identifier(name) {
        return Err(ExtensionError::invalid_name(
            name,
            "must be a valid identifier",
        ));
    }
    if !is_lowercase(name) {
        return Err(ExtensionError::invalid_name(name, "must be lowercase"));
    }
    Ok(())
}

/// Whether `s` is a bare identifier: a letter or `_`, then letters, digits or `_`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// At least one cased character, and no uppercase ones.
fn is_lowercase(s: &str) -> bool {
    s.chars().any(char::is_lowercase) && !s.chars().any(char::is_uppercase)
}

/// Convert `snake_case` to `PascalCase` (`my_extension` -> `MyExtension`).
///
/// Each segment is title-cased: a letter following a non-letter is
/// uppercased, so `ext_v2x` becomes `ExtV2X`.
pub fn snake_to_pascal(s: &str) -> String {
    s.split('_').map(title_case).collect()
}

fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut after_letter = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if after_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(c);
            after_letter = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "meta_tests.rs"]
mod tests;
