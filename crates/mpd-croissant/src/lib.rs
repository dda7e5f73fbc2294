//! # mpd-croissant — Croissant dataset-card model
//!
//! Implements the MLCommons Croissant 1.0 document vocabulary needed to
//! describe the MonopathPatientDAGs dataset. Provides:
//!
//! - **Document types** ([`Metadata`], [`Resource`], [`RecordSet`],
//!   [`Field`]) with serde serialization onto the exact JSON-LD key set
//!   (`@context`, `@id`, `contentUrl`, `dataType`, ...).
//! - **Structural validation** ([`validate::validate_metadata`]):
//!   reference integrity, identifier uniqueness, and mandatory-property
//!   checks, reported as errors and warnings.
//! - **Deterministic rendering** ([`Metadata::to_json_string`]): documents
//!   with validation errors are rejected before serialization; valid
//!   documents render as byte-stable, two-space-indented JSON.

pub mod context;
pub mod error;
pub mod metadata;
pub mod record_set;
pub mod resource;
pub mod validate;

// Re-export primary types.
pub use context::croissant_context;
pub use error::{CroissantError, CroissantResult};
pub use metadata::{CroissantType, Metadata, CONFORMS_TO};
pub use record_set::{CrType, DataType, Extract, Field, RecordSet, Source};
pub use resource::{FileObject, FileSet, Resource, ResourceRef};
pub use validate::{validate_metadata, IssueSeverity, ValidationIssue, ValidationIssues};
