//! # Top-Level Dataset Metadata
//!
//! Implements [`Metadata`], the full Croissant document: the JSON-LD
//! envelope (`@context`, `@type`, `conformsTo`), the dataset-level text
//! fields, the resource distribution, and the record schemas.
//!
//! ## Serialization
//!
//! [`Metadata::to_json_string`] validates the document and renders it as
//! two-space-indented JSON. A document with error-severity issues (a
//! dangling resource reference, a duplicate identifier) is rejected before
//! any text is produced. Key order follows struct declaration order and is
//! byte-stable across runs.

use serde::{Deserialize, Serialize};

use crate::context::croissant_context;
use crate::error::{CroissantError, CroissantResult};
use crate::record_set::RecordSet;
use crate::resource::Resource;
use crate::validate;

/// Version IRI of the Croissant specification this document conforms to.
pub const CONFORMS_TO: &str = "http://mlcommons.org/croissant/1.0";

/// `@type` of the top-level document. Croissant cards are schema.org
/// datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CroissantType {
    /// `sc:Dataset`
    #[serde(rename = "sc:Dataset")]
    Dataset,
}

/// The full top-level descriptor: dataset-level text fields plus the
/// resource and schema declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// JSON-LD context object (fixed Croissant 1.0 context).
    #[serde(rename = "@context")]
    pub context: serde_json::Value,
    /// Node type tag (`sc:Dataset`).
    #[serde(rename = "@type")]
    pub kind: CroissantType,
    /// Dataset display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Citation string. Always emitted, possibly empty.
    #[serde(rename = "citeAs")]
    pub cite_as: String,
    /// Croissant specification version IRI.
    #[serde(rename = "conformsTo")]
    pub conforms_to: String,
    /// Canonical dataset URL.
    pub url: String,
    /// Ordered resource list.
    pub distribution: Vec<Resource>,
    /// Record schemas.
    #[serde(rename = "recordSet")]
    pub record_sets: Vec<RecordSet>,
}

impl Metadata {
    /// Assemble a document from its parts, filling in the fixed JSON-LD
    /// envelope (context, node type, `conformsTo`).
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        cite_as: impl Into<String>,
        url: impl Into<String>,
        distribution: Vec<Resource>,
        record_sets: Vec<RecordSet>,
    ) -> Self {
        Self {
            context: croissant_context(),
            kind: CroissantType::Dataset,
            name: name.into(),
            description: description.into(),
            cite_as: cite_as.into(),
            conforms_to: CONFORMS_TO.to_string(),
            url: url.into(),
            distribution,
            record_sets,
        }
    }

    /// Validate and render the document as two-space-indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CroissantError::Invalid`] when structural validation
    /// reports errors, or [`CroissantError::Json`] if serialization itself
    /// fails. Validation warnings do not block rendering.
    pub fn to_json_string(&self) -> CroissantResult<String> {
        let issues = validate::validate_metadata(self);
        if issues.has_errors() {
            return Err(CroissantError::Invalid {
                report: issues.report(),
            });
        }
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record_set::{DataType, Field, Source};
    use crate::resource::{FileObject, FileSet, ResourceRef};

    fn sample_metadata() -> Metadata {
        Metadata::new(
            "Sample",
            "A sample dataset.",
            "",
            "https://example.com",
            vec![
                Resource::FileObject(FileObject {
                    id: "repo".to_string(),
                    name: "repo".to_string(),
                    description: "Source repository.".to_string(),
                    content_url: "https://example.com/repo".to_string(),
                    encoding_format: "git+https".to_string(),
                    sha256: Some("a".repeat(64)),
                }),
                Resource::FileSet(FileSet {
                    id: "files".to_string(),
                    name: "files".to_string(),
                    description: "Data files.".to_string(),
                    contained_in: ResourceRef::new("repo"),
                    encoding_format: "application/jsonlines".to_string(),
                    includes: "data/*.jsonl".to_string(),
                }),
            ],
            vec![RecordSet::new(
                "rows",
                "rows",
                vec![Field::new(
                    "rows/a",
                    "a",
                    "A column.",
                    DataType::Text,
                    Source::column("files", "a"),
                )],
            )],
        )
    }

    #[test]
    fn new_fills_envelope() {
        let metadata = sample_metadata();
        assert_eq!(metadata.kind, CroissantType::Dataset);
        assert_eq!(metadata.conforms_to, CONFORMS_TO);
        assert_eq!(metadata.context, croissant_context());
    }

    #[test]
    fn json_field_names_match_croissant() {
        let val = serde_json::to_value(sample_metadata()).unwrap();
        assert!(val.get("@context").is_some());
        assert_eq!(val["@type"], "sc:Dataset");
        assert_eq!(val["citeAs"], "");
        assert_eq!(val["conformsTo"], CONFORMS_TO);
        assert!(val.get("recordSet").is_some());
        assert!(val.get("cite_as").is_none());
        assert!(val.get("record_sets").is_none());
        assert!(val.get("conforms_to").is_none());
    }

    #[test]
    fn to_json_string_uses_two_space_indent() {
        let text = sample_metadata().to_json_string().unwrap();
        assert!(text.starts_with("{\n  \""));
        assert!(text.ends_with('}'));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn to_json_string_is_deterministic() {
        let metadata = sample_metadata();
        let a = metadata.to_json_string().unwrap();
        let b = metadata.to_json_string().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn to_json_string_rejects_dangling_reference() {
        let mut metadata = sample_metadata();
        if let Resource::FileSet(fs) = &mut metadata.distribution[1] {
            fs.contained_in = ResourceRef::new("nowhere");
        }
        let err = metadata.to_json_string().unwrap_err();
        assert!(matches!(err, CroissantError::Invalid { .. }));
        assert!(format!("{err}").contains("nowhere"));
    }

    #[test]
    fn to_json_string_allows_warnings() {
        let mut metadata = sample_metadata();
        if let Resource::FileObject(fo) = &mut metadata.distribution[0] {
            fo.sha256 = Some("main".to_string());
        }
        // Non-hex digest is a warning; rendering must still succeed.
        assert!(metadata.to_json_string().is_ok());
    }

    #[test]
    fn metadata_serde_roundtrip() {
        let metadata = sample_metadata();
        let json = metadata.to_json_string().unwrap();
        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(metadata, back);
    }

    #[test]
    fn top_level_key_order_is_declaration_order() {
        let text = sample_metadata().to_json_string().unwrap();
        // Top-level keys sit at two-space indent; nested occurrences of the
        // same names (e.g. "citeAs" inside @context) are indented deeper.
        let positions: Vec<usize> = [
            "\n  \"@context\"",
            "\n  \"@type\"",
            "\n  \"name\"",
            "\n  \"description\"",
            "\n  \"citeAs\"",
            "\n  \"conformsTo\"",
            "\n  \"url\"",
            "\n  \"distribution\"",
            "\n  \"recordSet\"",
        ]
        .iter()
        .map(|key| {
            text.find(key)
                .unwrap_or_else(|| panic!("missing top-level key {key:?}"))
        })
        .collect();
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
