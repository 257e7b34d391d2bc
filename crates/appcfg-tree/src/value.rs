//! Values returned from the configuration tree
//!
//! [`ConfigValue`] is what a lookup hands back: a scalar, a list, or a
//! [`Section`] that can be indexed further. Sections are borrowed views of
//! the typed structs in [`crate::sections`], so nothing is copied out of the
//! tree and derived keys are computed at the moment they are read.

use appcfg_models::{ModelDescriptor, ModelRegistry};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::sections::{
    AiSettings, ApiSettings, CodeApplicationSettings, DevSettings, FileSettings, PackageSettings,
    SandboxProfile, UiSettings,
};

/// A node that can be indexed by key
///
/// Implemented by every typed section. `keys` lists what `child` answers
/// for, derived keys included.
pub trait ConfigNode {
    /// Keys in declaration order
    fn keys(&self) -> Vec<&str>;

    /// Value under `key`, or `None` if the node has no such key
    fn child(&self, key: &str) -> Option<ConfigValue<'_>>;
}

/// A value read from the tree
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue<'a> {
    /// Flag
    Bool(bool),
    /// Count, size, port, or duration in the unit the key names
    Integer(u64),
    /// Fractional setting such as temperature
    Float(f64),
    /// String setting
    Text(&'a str),
    /// Ordered list
    List(Vec<ConfigValue<'a>>),
    /// Nested node
    Section(Section<'a>),
}

impl<'a> ConfigValue<'a> {
    /// Build a list of text values
    #[must_use]
    pub fn text_list<S: AsRef<str>>(items: &'a [S]) -> Self {
        Self::List(items.iter().map(|item| Self::Text(item.as_ref())).collect())
    }

    /// Get as bool
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Get as unsigned integer
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Get as float (integers widen)
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Get as string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Text(value) => Some(*value),
            _ => None,
        }
    }

    /// Get as list
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[ConfigValue<'a>]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get as nested section
    #[inline]
    #[must_use]
    pub fn as_section(&self) -> Option<Section<'a>> {
        match self {
            Self::Section(section) => Some(*section),
            _ => None,
        }
    }

    /// Short name of the value's shape
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Section(_) => "section",
        }
    }
}

impl From<bool> for ConfigValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for ConfigValue<'_> {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for ConfigValue<'_> {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u16> for ConfigValue<'_> {
    fn from(value: u16) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for ConfigValue<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<'a> From<&'a str> for ConfigValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<Section<'a>> for ConfigValue<'a> {
    fn from(section: Section<'a>) -> Self {
        Self::Section(section)
    }
}

impl Serialize for ConfigValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Integer(value) => serializer.serialize_u64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Text(value) => serializer.serialize_str(value),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Section(section) => section.serialize(serializer),
        }
    }
}

/// Borrowed view of a nested node
///
/// The model registry shows up twice under `ai`: once as the display-name
/// table and once as the dispatch table, mirroring the keys callers address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section<'a> {
    /// `vercelSandbox` or `e2b`
    Sandbox(&'a SandboxProfile),
    /// `ai`
    Ai(&'a AiSettings),
    /// `codeApplication`
    CodeApplication(&'a CodeApplicationSettings),
    /// `ui`
    Ui(&'a UiSettings),
    /// `dev`
    Dev(&'a DevSettings),
    /// `packages`
    Packages(&'a PackageSettings),
    /// `files`
    Files(&'a FileSettings),
    /// `api`
    Api(&'a ApiSettings),
    /// `ai.modelDisplayNames`: model id → display name
    ModelDisplayNames(&'a ModelRegistry),
    /// `ai.modelApiConfig`: model id → dispatch entry
    ModelApiConfig(&'a ModelRegistry),
    /// `ai.modelApiConfig.<id>`: `provider` and `model`
    ModelDispatch(&'a ModelDescriptor),
}

impl<'a> Section<'a> {
    /// Keys this node answers for
    #[must_use]
    pub fn keys(self) -> Vec<&'a str> {
        match self {
            Self::Sandbox(node) => node.keys(),
            Self::Ai(node) => node.keys(),
            Self::CodeApplication(node) => node.keys(),
            Self::Ui(node) => node.keys(),
            Self::Dev(node) => node.keys(),
            Self::Packages(node) => node.keys(),
            Self::Files(node) => node.keys(),
            Self::Api(node) => node.keys(),
            Self::ModelDisplayNames(registry) | Self::ModelApiConfig(registry) => {
                registry.ids().collect()
            }
            Self::ModelDispatch(_) => vec!["provider", "model"],
        }
    }

    /// Value under `key`
    #[must_use]
    pub fn child(self, key: &str) -> Option<ConfigValue<'a>> {
        match self {
            Self::Sandbox(node) => node.child(key),
            Self::Ai(node) => node.child(key),
            Self::CodeApplication(node) => node.child(key),
            Self::Ui(node) => node.child(key),
            Self::Dev(node) => node.child(key),
            Self::Packages(node) => node.child(key),
            Self::Files(node) => node.child(key),
            Self::Api(node) => node.child(key),
            Self::ModelDisplayNames(registry) => registry
                .get(key)
                .map(|model| ConfigValue::Text(model.display_name())),
            Self::ModelApiConfig(registry) => registry
                .get(key)
                .map(|model| ConfigValue::Section(Self::ModelDispatch(model))),
            Self::ModelDispatch(model) => match key {
                "provider" => Some(ConfigValue::Text(model.provider().as_str())),
                "model" => Some(ConfigValue::Text(model.api_model_name())),
                _ => None,
            },
        }
    }
}

impl Serialize for Section<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let keys = self.keys();
        let mut map = serializer.serialize_map(Some(keys.len()))?;
        for key in keys {
            if let Some(value) = self.child(key) {
                map.serialize_entry(key, &value)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        assert_eq!(ConfigValue::Bool(true).as_bool(), Some(true));
        assert_eq!(ConfigValue::Integer(3).as_u64(), Some(3));
        assert_eq!(ConfigValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(ConfigValue::Float(0.7).as_f64(), Some(0.7));
        assert_eq!(ConfigValue::Text("x").as_str(), Some("x"));
        assert_eq!(ConfigValue::Text("x").as_u64(), None);
        assert_eq!(ConfigValue::Bool(true).as_str(), None);
    }

    #[test]
    fn text_list_borrows_items() {
        let items = vec!["a".to_string(), "b".to_string()];
        let value = ConfigValue::text_list(&items);
        let list = value.as_list().unwrap();
        assert_eq!(list, &[ConfigValue::Text("a"), ConfigValue::Text("b")]);
        assert_eq!(value.kind(), "list");
    }

    #[test]
    fn scalars_serialize_plainly() {
        assert_eq!(serde_json::to_string(&ConfigValue::Integer(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&ConfigValue::Bool(false)).unwrap(), "false");
        assert_eq!(serde_json::to_string(&ConfigValue::Text("a")).unwrap(), "\"a\"");
        let list = ConfigValue::List(vec![ConfigValue::Integer(1), ConfigValue::Integer(2)]);
        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2]");
    }
}
