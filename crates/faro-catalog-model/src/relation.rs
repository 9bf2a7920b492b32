// SPDX-License-Identifier: Apache-2.0

use crate::EntityRef;
use serde::{Deserialize, Serialize};

/// Relation type: the entity is owned by the target.
pub const RELATION_OWNED_BY: &str = "ownedBy";

/// Relation type: the entity owns the target.
pub const RELATION_OWNER_OF: &str = "ownerOf";

/// A directed typed edge between two catalog graph nodes.
///
/// The surrounding graph sink owns deduplication and persistence; the same
/// edge may legitimately be constructed more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Relation {
    #[serde(rename = "type")]
    pub relation_type: String,
    pub source: EntityRef,
    pub target: EntityRef,
}

impl Relation {
    #[must_use]
    pub fn owned_by(entity: EntityRef, owner: EntityRef) -> Self {
        Self {
            relation_type: RELATION_OWNED_BY.to_string(),
            source: entity,
            target: owner,
        }
    }

    #[must_use]
    pub fn owner_of(owner: EntityRef, entity: EntityRef) -> Self {
        Self {
            relation_type: RELATION_OWNER_OF.to_string(),
            source: owner,
            target: entity,
        }
    }

    /// The paired edge in the opposite direction, when the type has a known
    /// inverse.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let relation_type = match self.relation_type.as_str() {
            RELATION_OWNED_BY => RELATION_OWNER_OF,
            RELATION_OWNER_OF => RELATION_OWNED_BY,
            _ => return None,
        };
        Some(Self {
            relation_type: relation_type.to_string(),
            source: self.target.clone(),
            target: self.source.clone(),
        })
    }
}
