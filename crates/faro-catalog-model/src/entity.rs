use crate::serde_helpers;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Namespace assumed for entities and references that do not name one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// A catalog entity as authored in an entity document.
///
/// The envelope is tolerant: `spec` is an open bag of values, and unknown
/// metadata is preserved by the document owner, not by this type. Processors
/// receive an entity by value and return a (possibly extended) value; the
/// caller's own copy is never touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub api_version: String,
    pub kind: String,
    pub metadata: EntityMeta,
    #[serde(default, skip_serializing_if = "serde_helpers::map_is_empty")]
    pub spec: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "serde_helpers::map_is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl Entity {
    /// The entity's namespace, falling back to [`DEFAULT_NAMESPACE`].
    #[must_use]
    pub fn namespace_or_default(&self) -> &str {
        match self.metadata.namespace.as_deref() {
            Some(namespace) if !namespace.is_empty() => namespace,
            _ => DEFAULT_NAMESPACE,
        }
    }

    #[must_use]
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata.annotations.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn spec_field(&self, key: &str) -> Option<&Value> {
        self.spec.get(key)
    }

    /// Returns the entity with `key` set in its annotations, keeping all
    /// existing keys.
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.annotations.insert(key.into(), value.into());
        self
    }
}
