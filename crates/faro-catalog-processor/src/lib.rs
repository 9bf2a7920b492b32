// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Catalog pipeline processors.
//!
//! The [`EntityProcessor`] trait is the extension point a host pipeline
//! drives: a pre-processing hook that may extend entity metadata and a
//! post-processing hook that derives graph relations into a caller-supplied
//! sink. [`MultiOwnerProcessor`] implements both for multi-owner
//! declarations. Everything is synchronous and stateless; processing one
//! entity never depends on another.

mod logging;
mod owners_processor;
mod pipeline;
mod processor;

use std::fmt::{Display, Formatter};

pub const CRATE_NAME: &str = "faro-catalog-processor";

pub use logging::{ProcessEvent, ProcessLog, ProcessStage};
pub use owners_processor::MultiOwnerProcessor;
pub use pipeline::{run_pipeline, PipelineOutcome};
pub use processor::{EntityProcessor, RelationSink};

#[derive(Debug)]
pub struct ProcessError(pub String);

impl Display for ProcessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ProcessError {}
