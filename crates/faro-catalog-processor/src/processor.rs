// SPDX-License-Identifier: Apache-2.0

use crate::ProcessError;
use faro_catalog_model::{Entity, Relation};

/// Receives derived relations. The sink owns deduplication and persistence;
/// processors may hand it the same edge more than once.
pub trait RelationSink {
    fn emit(&mut self, relation: Relation);
}

impl<F> RelationSink for F
where
    F: FnMut(Relation),
{
    fn emit(&mut self, relation: Relation) {
        self(relation)
    }
}

/// Extension point for the two-phase entity pipeline.
///
/// The host calls `pre_process` for every entity, and `post_process`
/// independently and later; the hooks share no state beyond the entity value
/// itself. Both default to identity so a processor implements only the
/// phases it cares about.
pub trait EntityProcessor {
    fn processor_name(&self) -> &'static str;

    fn pre_process(&self, entity: Entity) -> Result<Entity, ProcessError> {
        Ok(entity)
    }

    fn post_process(
        &self,
        entity: Entity,
        _sink: &mut dyn RelationSink,
    ) -> Result<Entity, ProcessError> {
        Ok(entity)
    }
}
