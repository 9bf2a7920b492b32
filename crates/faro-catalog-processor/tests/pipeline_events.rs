// SPDX-License-Identifier: Apache-2.0

use faro_catalog_model::{Entity, Relation, OWNERS_ANNOTATION};
use faro_catalog_processor::{
    run_pipeline, EntityProcessor, MultiOwnerProcessor, ProcessError, ProcessStage, RelationSink,
};

fn entities_from_yaml(raw: &str) -> Vec<Entity> {
    raw.split("---")
        .filter(|doc| !doc.trim().is_empty())
        .map(|doc| serde_yaml::from_str(doc).expect("entity"))
        .collect()
}

const BATCH: &str = r"
apiVersion: faro.io/v1
kind: Component
metadata:
  name: my-service
  namespace: default
spec:
  owners:
    - group:default/platform-team
    - user:default/jane
---
apiVersion: faro.io/v1
kind: Component
metadata:
  name: ownerless
spec:
  owner: group:default/legacy-team
";

#[test]
fn pipeline_runs_pre_then_post_per_entity() {
    let processor = MultiOwnerProcessor::new();
    let processors: Vec<&dyn EntityProcessor> = vec![&processor];
    let mut relations = Vec::new();
    let mut sink = |relation: Relation| relations.push(relation);

    let outcome = run_pipeline(&processors, entities_from_yaml(BATCH), &mut sink).expect("run");

    assert_eq!(outcome.entities.len(), 2);
    assert!(outcome.entities[0].annotation(OWNERS_ANNOTATION).is_some());
    assert!(outcome.entities[1].annotation(OWNERS_ANNOTATION).is_none());
    assert_eq!(relations.len(), 4);

    assert_eq!(outcome.events.len(), 4);
    assert_eq!(outcome.events[0].stage, ProcessStage::PreProcess);
    assert_eq!(outcome.events[1].stage, ProcessStage::PostProcess);
    assert_eq!(outcome.events[0].fields["entity"], "my-service");
    assert_eq!(outcome.events[2].fields["entity"], "ownerless");
    for event in &outcome.events {
        assert_eq!(event.fields["processor"], "MultiOwnerProcessor");
    }
}

#[test]
fn pipeline_events_serialize_with_snake_case_stages() {
    let processor = MultiOwnerProcessor::new();
    let processors: Vec<&dyn EntityProcessor> = vec![&processor];
    let mut sink = |_relation: Relation| {};

    let outcome = run_pipeline(&processors, entities_from_yaml(BATCH), &mut sink).expect("run");
    let encoded = serde_json::to_value(&outcome.events[0]).expect("encode");
    assert_eq!(encoded["stage"], "pre_process");
    assert_eq!(encoded["name"], "pipeline.pre_process");
}

struct FailingProcessor;

impl EntityProcessor for FailingProcessor {
    fn processor_name(&self) -> &'static str {
        "FailingProcessor"
    }

    fn pre_process(&self, _entity: Entity) -> Result<Entity, ProcessError> {
        Err(ProcessError("boom".to_string()))
    }
}

#[test]
fn processor_error_aborts_the_run() {
    let failing = FailingProcessor;
    let processors: Vec<&dyn EntityProcessor> = vec![&failing];
    let mut sink = |_relation: Relation| {};

    let err = run_pipeline(&processors, entities_from_yaml(BATCH), &mut sink)
        .expect_err("must abort");
    assert_eq!(err.0, "boom");
}

#[test]
fn closure_sink_receives_adjacent_pairs() {
    let processor = MultiOwnerProcessor::new();
    let mut pairs = Vec::new();
    let mut sink = |relation: Relation| pairs.push(relation);
    sink_roundtrip(&processor, &mut sink);
    assert_eq!(pairs.len(), 4);
    for pair in pairs.chunks(2) {
        assert_eq!(pair[1], pair[0].inverse().expect("inverse"));
    }
}

fn sink_roundtrip(processor: &MultiOwnerProcessor, sink: &mut dyn RelationSink) {
    let entity = entities_from_yaml(BATCH).remove(0);
    processor
        .post_process(entity, sink)
        .expect("post process");
}
