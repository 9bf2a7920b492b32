// SPDX-License-Identifier: Apache-2.0

use crate::logging::{ProcessEvent, ProcessLog, ProcessStage};
use crate::processor::{EntityProcessor, RelationSink};
use crate::ProcessError;
use faro_catalog_model::Entity;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub entities: Vec<Entity>,
    pub events: Vec<ProcessEvent>,
}

/// Run both phases of every processor over a batch of entities.
///
/// Per entity: every pre-processing hook in processor order, then every
/// post-processing hook. A processor error aborts the run; malformed
/// ownership data is not an error and never reaches this level.
pub fn run_pipeline(
    processors: &[&dyn EntityProcessor],
    entities: Vec<Entity>,
    sink: &mut dyn RelationSink,
) -> Result<PipelineOutcome, ProcessError> {
    let mut log = ProcessLog::default();
    let mut processed = Vec::with_capacity(entities.len());

    for entity in entities {
        let mut current = entity;
        for processor in processors {
            log.emit(
                ProcessStage::PreProcess,
                "pipeline.pre_process",
                stage_fields(&current, processor.processor_name()),
            );
            current = processor.pre_process(current)?;
        }
        for processor in processors {
            log.emit(
                ProcessStage::PostProcess,
                "pipeline.post_process",
                stage_fields(&current, processor.processor_name()),
            );
            current = processor.post_process(current, sink)?;
        }
        processed.push(current);
    }

    Ok(PipelineOutcome {
        entities: processed,
        events: log.events().to_vec(),
    })
}

fn stage_fields(entity: &Entity, processor_name: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    fields.insert("entity".to_string(), entity.metadata.name.clone());
    fields.insert("processor".to_string(), processor_name.to_string());
    fields
}
