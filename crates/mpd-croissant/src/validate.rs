//! # Structural Validation
//!
//! Validates a [`Metadata`] document before serialization.
//!
//! ## Validation Layers
//!
//! 1. **Mandatory properties**: dataset name, content URLs, encoding
//!    formats, include globs, column names.
//! 2. **Reference integrity**: a file set's `containedIn` must resolve to
//!    a resource declared earlier in the distribution; every field's
//!    `fileSet` reference must resolve to a declared resource.
//! 3. **Uniqueness**: resource, record-set, and field identifiers are
//!    pairwise distinct in their respective scopes.
//!
//! Errors block serialization; warnings (missing integrity digest, empty
//! descriptions, shared column bindings) are informational only.

use std::collections::{BTreeMap, BTreeSet};

use crate::metadata::Metadata;
use crate::record_set::RecordSet;
use crate::resource::Resource;

// ---------------------------------------------------------------------------
// Issues
// ---------------------------------------------------------------------------

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Blocks serialization.
    Error,
    /// Informational; does not block serialization.
    Warning,
}

/// A single validation issue with an optional node-path context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Issue severity.
    pub severity: IssueSeverity,
    /// What is wrong.
    pub message: String,
    /// Node path, e.g. `Metadata(x) > RecordSet(y) > Field(z)`.
    pub context: String,
}

/// Collected validation issues for one document.
#[derive(Debug, Clone, Default)]
pub struct ValidationIssues {
    issues: Vec<ValidationIssue>,
}

impl ValidationIssues {
    /// Create an empty issue list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error. Errors make the document invalid.
    pub fn add_error(&mut self, context: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            severity: IssueSeverity::Error,
            message: message.into(),
            context: context.into(),
        });
    }

    /// Add a warning (does not affect validity).
    pub fn add_warning(&mut self, context: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            severity: IssueSeverity::Warning,
            message: message.into(),
            context: context.into(),
        });
    }

    /// Whether any error-severity issue was recorded.
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == IssueSeverity::Error)
    }

    /// Number of error-severity issues.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .count()
    }

    /// Number of warning-severity issues.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
            .count()
    }

    /// Whether no issues of any severity were recorded.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// All recorded issues, in detection order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Render a line-per-issue report, errors first.
    pub fn report(&self) -> String {
        let mut lines = Vec::with_capacity(self.issues.len());
        for severity in [IssueSeverity::Error, IssueSeverity::Warning] {
            for issue in self.issues.iter().filter(|i| i.severity == severity) {
                let tag = match severity {
                    IssueSeverity::Error => "error",
                    IssueSeverity::Warning => "warning",
                };
                lines.push(format!("{tag}: [{}] {}", issue.context, issue.message));
            }
        }
        lines.join("\n")
    }
}

// ---------------------------------------------------------------------------
// Document Validation
// ---------------------------------------------------------------------------

/// Validate a full document. Returns every detected issue; callers decide
/// whether warnings matter. [`Metadata::to_json_string`] rejects documents
/// with error-severity issues.
pub fn validate_metadata(metadata: &Metadata) -> ValidationIssues {
    let mut issues = ValidationIssues::new();

    validate_basics(&mut issues, metadata);
    validate_distribution(&mut issues, metadata);
    validate_record_sets(&mut issues, metadata);

    issues
}

fn validate_basics(issues: &mut ValidationIssues, metadata: &Metadata) {
    let context = format!("Metadata({})", metadata.name);

    if metadata.name.is_empty() {
        issues.add_error(&context, "property \"name\" is mandatory but empty");
    }
    if metadata.description.is_empty() {
        issues.add_warning(&context, "property \"description\" is recommended but empty");
    }
    if metadata.conforms_to.is_empty() {
        issues.add_warning(&context, "property \"conformsTo\" is recommended but empty");
    }
    if metadata.url.is_empty() {
        issues.add_warning(&context, "property \"url\" is recommended but empty");
    }
}

fn validate_distribution(issues: &mut ValidationIssues, metadata: &Metadata) {
    // Resources declared so far; containedIn may only point backwards.
    let mut declared: BTreeSet<&str> = BTreeSet::new();

    for resource in &metadata.distribution {
        match resource {
            Resource::FileObject(fo) => {
                let context = format!("Metadata({}) > FileObject({})", metadata.name, fo.id);
                if fo.content_url.is_empty() {
                    issues.add_error(&context, "property \"contentUrl\" is mandatory but empty");
                }
                if fo.encoding_format.is_empty() {
                    issues.add_error(
                        &context,
                        "property \"encodingFormat\" is mandatory but empty",
                    );
                }
                match &fo.sha256 {
                    None => issues.add_warning(
                        &context,
                        "property \"sha256\" is recommended for integrity verification",
                    ),
                    Some(digest) if !is_sha256_hex(digest) => issues.add_warning(
                        &context,
                        format!(
                            "\"sha256\" value \"{digest}\" is not a 64-hex digest; \
                             treating it as a revision marker"
                        ),
                    ),
                    Some(_) => {}
                }
            }
            Resource::FileSet(fs) => {
                let context = format!("Metadata({}) > FileSet({})", metadata.name, fs.id);
                if fs.encoding_format.is_empty() {
                    issues.add_error(
                        &context,
                        "property \"encodingFormat\" is mandatory but empty",
                    );
                }
                if fs.includes.is_empty() {
                    issues.add_error(&context, "property \"includes\" is mandatory but empty");
                }
                if !declared.contains(fs.contained_in.id.as_str()) {
                    issues.add_error(
                        &context,
                        format!(
                            "\"containedIn\" references \"{}\", which is not declared \
                             earlier in the distribution",
                            fs.contained_in.id
                        ),
                    );
                }
            }
        }

        let context = format!("Metadata({})", metadata.name);
        if resource.id().is_empty() {
            issues.add_error(&context, "distribution entry has an empty \"@id\"");
        } else if !declared.insert(resource.id()) {
            issues.add_error(
                &context,
                format!("duplicate resource identifier \"{}\"", resource.id()),
            );
        }
    }
}

fn validate_record_sets(issues: &mut ValidationIssues, metadata: &Metadata) {
    let resource_ids: BTreeSet<&str> = metadata
        .distribution
        .iter()
        .map(|r| r.id())
        .collect();

    let mut record_set_ids: BTreeSet<&str> = BTreeSet::new();
    for record_set in &metadata.record_sets {
        let context = format!(
            "Metadata({}) > RecordSet({})",
            metadata.name, record_set.id
        );

        if record_set.id.is_empty() {
            issues.add_error(&context, "record set has an empty \"@id\"");
        } else if !record_set_ids.insert(record_set.id.as_str()) {
            issues.add_error(
                &context,
                format!("duplicate record-set identifier \"{}\"", record_set.id),
            );
        }

        if record_set.fields.is_empty() {
            issues.add_warning(&context, "record set declares no fields");
        }

        validate_fields(issues, metadata, record_set, &resource_ids);
    }
}

fn validate_fields(
    issues: &mut ValidationIssues,
    metadata: &Metadata,
    record_set: &RecordSet,
    resource_ids: &BTreeSet<&str>,
) {
    let mut field_ids: BTreeSet<&str> = BTreeSet::new();
    // (file set, column) -> first field that bound it.
    let mut bindings: BTreeMap<(&str, &str), &str> = BTreeMap::new();

    for field in &record_set.fields {
        let context = format!(
            "Metadata({}) > RecordSet({}) > Field({})",
            metadata.name, record_set.id, field.name
        );

        if field.name.is_empty() {
            issues.add_error(&context, "property \"name\" is mandatory but empty");
        }
        if field.description.is_empty() {
            issues.add_warning(&context, "property \"description\" is empty");
        }

        if field.id.is_empty() {
            issues.add_error(&context, "field has an empty \"@id\"");
        } else if !field_ids.insert(field.id.as_str()) {
            issues.add_error(
                &context,
                format!("duplicate field identifier \"{}\"", field.id),
            );
        }

        let file_set_id = field.source.file_set.id.as_str();
        let column = field.source.extract.column.as_str();

        if column.is_empty() {
            issues.add_error(&context, "source extract names an empty column");
        }
        if !resource_ids.contains(file_set_id) {
            issues.add_error(
                &context,
                format!("source references undeclared file set \"{file_set_id}\""),
            );
        }

        if let Some(first) = bindings.get(&(file_set_id, column)) {
            issues.add_warning(
                &context,
                format!(
                    "fields \"{first}\" and \"{}\" both extract column \"{column}\" \
                     from \"{file_set_id}\"",
                    field.name
                ),
            );
        } else {
            bindings.insert((file_set_id, column), field.name.as_str());
        }
    }
}

/// Whether `s` is a 64-character lowercase-insensitive hex digest.
fn is_sha256_hex(s: &str) -> bool {
    s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit())
}
