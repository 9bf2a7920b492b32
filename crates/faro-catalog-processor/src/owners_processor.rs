// SPDX-License-Identifier: Apache-2.0

use crate::processor::{EntityProcessor, RelationSink};
use crate::ProcessError;
use faro_catalog_model::{
    normalize_owners, Entity, EntityRef, RefDefaults, Relation, OWNERS_ANNOTATION,
    OWNERS_SPEC_FIELD,
};

/// Reads `spec.owners` and derives ownership state in two phases: the
/// pre-processing hook writes the normalized owner list as a JSON annotation,
/// the post-processing hook emits paired `ownedBy`/`ownerOf` relations.
///
/// Runs in addition to whatever handles the legacy single `spec.owner` field;
/// that field is never read here.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiOwnerProcessor;

impl MultiOwnerProcessor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EntityProcessor for MultiOwnerProcessor {
    fn processor_name(&self) -> &'static str {
        "MultiOwnerProcessor"
    }

    fn pre_process(&self, entity: Entity) -> Result<Entity, ProcessError> {
        let raw = entity.spec_field(OWNERS_SPEC_FIELD);
        if raw.is_none() {
            return Ok(entity);
        }
        let owners = normalize_owners(raw);
        if owners.is_empty() {
            return Ok(entity);
        }
        let encoded =
            serde_json::to_string(&owners).map_err(|err| ProcessError(err.to_string()))?;
        Ok(entity.with_annotation(OWNERS_ANNOTATION, encoded))
    }

    fn post_process(
        &self,
        entity: Entity,
        sink: &mut dyn RelationSink,
    ) -> Result<Entity, ProcessError> {
        // Owners are re-derived from spec, not read back from the
        // annotation; the two hooks may see different entity snapshots.
        let owners = match entity.spec_field(OWNERS_SPEC_FIELD) {
            Some(raw) => normalize_owners(Some(raw)),
            None => return Ok(entity),
        };
        if owners.is_empty() {
            return Ok(entity);
        }

        let entity_ref = match EntityRef::for_entity(&entity) {
            Ok(entity_ref) => entity_ref,
            Err(err) => {
                tracing::debug!(
                    entity = %entity.metadata.name,
                    error = %err,
                    "entity has no valid reference, emitting no ownership relations"
                );
                return Ok(entity);
            }
        };
        let defaults = RefDefaults::owner(entity.namespace_or_default());

        for owner in &owners {
            let owner_ref = match EntityRef::from_compound(&owner.name, &defaults) {
                Ok(owner_ref) => owner_ref,
                Err(err) => {
                    tracing::debug!(
                        owner = %owner.name,
                        error = %err,
                        "skipping owner with invalid reference"
                    );
                    continue;
                }
            };
            // Always a pair: the edge and its inverse, adjacently.
            sink.emit(Relation::owned_by(entity_ref.clone(), owner_ref.clone()));
            sink.emit(Relation::owner_of(owner_ref, entity_ref.clone()));
        }
        Ok(entity)
    }
}
