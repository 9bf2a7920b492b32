#![forbid(unsafe_code)]
//! Catalog model SSOT.
//!
//! Entities, fully-qualified entity references, canonical owner entries and
//! directed ownership relations. Everything here is pure data plus
//! normalization and parsing; no I/O.

mod entity;
mod entity_ref;
mod owners;
mod relation;
pub mod serde_helpers;

pub use entity::{Entity, EntityMeta, DEFAULT_NAMESPACE};
pub use entity_ref::{
    EntityRef, RefDefaults, RefKind, RefName, RefNamespace, ValidationError, OWNER_DEFAULT_KIND,
    REF_SEGMENT_MAX_LEN,
};
pub use owners::{
    effective_owners, normalize_owners, owners_from_annotation, OwnerEntry, LEGACY_OWNER_FIELD,
    OWNERS_ANNOTATION, OWNERS_SPEC_FIELD,
};
pub use relation::{Relation, RELATION_OWNED_BY, RELATION_OWNER_OF};

pub const CRATE_NAME: &str = "faro-catalog-model";
