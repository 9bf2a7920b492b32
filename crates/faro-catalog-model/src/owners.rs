// SPDX-License-Identifier: Apache-2.0

use crate::Entity;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The field under `spec` where multiple owners are declared.
pub const OWNERS_SPEC_FIELD: &str = "owners";

/// The legacy single-owner field. Read only by [`effective_owners`]; the
/// processing hooks never touch it.
pub const LEGACY_OWNER_FIELD: &str = "owner";

/// Annotation key holding the normalized owner list as a JSON array.
pub const OWNERS_ANNOTATION: &str = "faro.io/owners";

/// One owning party in canonical form. `name` is always non-empty and
/// trimmed; `role` is present only when it trims non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OwnerEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl OwnerEntry {
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
        }
    }

    #[must_use]
    pub fn with_role(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Some(role.into()),
        }
    }
}

/// Normalize a raw `spec.owners` value into canonical owner entries.
///
/// Accepts string shorthand (`"group:default/team"`) and detailed objects
/// (`{"name": "...", "role": "..."}`). Input order is preserved. Malformed
/// input never fails: non-array input yields an empty sequence and malformed
/// elements are dropped.
#[must_use]
pub fn normalize_owners(raw: Option<&Value>) -> Vec<OwnerEntry> {
    let items = match raw {
        Some(Value::Array(items)) => items,
        _ => return Vec::new(),
    };
    items.iter().filter_map(canonical_entry).collect()
}

/// Per-element ok/skip decision behind [`normalize_owners`].
fn canonical_entry(value: &Value) -> Option<OwnerEntry> {
    match value {
        Value::String(reference) => {
            let name = reference.trim();
            if name.is_empty() {
                return None;
            }
            Some(OwnerEntry::reference(name))
        }
        Value::Object(fields) => {
            let name = fields.get("name")?.as_str()?.trim();
            if name.is_empty() {
                return None;
            }
            let role = fields
                .get("role")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|role| !role.is_empty())
                .map(String::from);
            Some(OwnerEntry {
                name: name.to_string(),
                role,
            })
        }
        _ => None,
    }
}

/// Decode the owner list written to [`OWNERS_ANNOTATION`].
///
/// Returns `None` when the annotation is absent or not valid JSON; the
/// decoded value is re-normalized, so a hand-edited annotation degrades the
/// same way raw spec data does.
#[must_use]
pub fn owners_from_annotation(entity: &Entity) -> Option<Vec<OwnerEntry>> {
    let raw = entity.annotation(OWNERS_ANNOTATION)?;
    let decoded: Value = serde_json::from_str(raw).ok()?;
    Some(normalize_owners(Some(&decoded)))
}

/// Owners for display: the normalized annotation when present, otherwise the
/// legacy single `spec.owner` string as a role-less entry.
#[must_use]
pub fn effective_owners(entity: &Entity) -> Vec<OwnerEntry> {
    if let Some(owners) = owners_from_annotation(entity) {
        return owners;
    }
    match entity
        .spec_field(LEGACY_OWNER_FIELD)
        .and_then(Value::as_str)
        .map(str::trim)
    {
        Some(owner) if !owner.is_empty() => vec![OwnerEntry::reference(owner)],
        _ => Vec::new(),
    }
}
