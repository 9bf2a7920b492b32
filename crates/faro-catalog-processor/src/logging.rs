// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStage {
    PreProcess,
    PostProcess,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessEvent {
    pub stage: ProcessStage,
    pub name: String,
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug, Default, Clone)]
pub struct ProcessLog {
    events: Vec<ProcessEvent>,
}

impl ProcessLog {
    pub fn emit(
        &mut self,
        stage: ProcessStage,
        name: impl Into<String>,
        fields: BTreeMap<String, String>,
    ) {
        self.events.push(ProcessEvent {
            stage,
            name: name.into(),
            fields,
        });
    }

    #[must_use]
    pub fn events(&self) -> &[ProcessEvent] {
        &self.events
    }
}
