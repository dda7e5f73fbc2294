//! # Record Schemas and Fields
//!
//! Implements the `recordSet` entries of a Croissant card: a [`RecordSet`]
//! names one row-shape in the dataset and carries an ordered list of
//! [`Field`]s, each bound to a column of a declared file set via its
//! [`Source`].

use serde::{Deserialize, Serialize};

use crate::resource::ResourceRef;

/// `@type` tag carried by record-set and field nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrType {
    /// `cr:RecordSet`
    #[serde(rename = "cr:RecordSet")]
    RecordSet,
    /// `cr:Field`
    #[serde(rename = "cr:Field")]
    Field,
}

/// Declared scalar type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// Free text (`sc:Text`).
    #[serde(rename = "sc:Text")]
    Text,
    /// Boolean flag (`sc:Boolean`).
    #[serde(rename = "sc:Boolean")]
    Boolean,
}

/// Column-extraction step of a source binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extract {
    /// Name of the column to extract from the bound file set.
    pub column: String,
}

/// Source binding of a field: the originating file set plus the column
/// to extract from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Reference to the file set the field is extracted from.
    #[serde(rename = "fileSet")]
    pub file_set: ResourceRef,
    /// Column extraction.
    pub extract: Extract,
}

impl Source {
    /// Bind to `column` of the file set with identifier `file_set_id`.
    pub fn column(file_set_id: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            file_set: ResourceRef::new(file_set_id),
            extract: Extract {
                column: column.into(),
            },
        }
    }
}

/// One column-level entry in a record schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Node type tag (`cr:Field`).
    #[serde(rename = "@type")]
    pub kind: CrType,
    /// Unique identifier within the record schema.
    #[serde(rename = "@id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description. Always emitted, possibly empty.
    pub description: String,
    /// Declared scalar type.
    #[serde(rename = "dataType")]
    pub data_type: DataType,
    /// Source binding.
    pub source: Source,
}

impl Field {
    /// Construct a field node.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        data_type: DataType,
        source: Source,
    ) -> Self {
        Self {
            kind: CrType::Field,
            id: id.into(),
            name: name.into(),
            description: description.into(),
            data_type,
            source,
        }
    }
}

/// A named, ordered collection of fields describing one row-shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Node type tag (`cr:RecordSet`).
    #[serde(rename = "@type")]
    pub kind: CrType,
    /// Unique identifier within the document.
    #[serde(rename = "@id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ordered field list.
    #[serde(rename = "field")]
    pub fields: Vec<Field>,
}

impl RecordSet {
    /// Construct a record-set node.
    pub fn new(id: impl Into<String>, name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            kind: CrType::RecordSet,
            id: id.into(),
            name: name.into(),
            fields,
        }
    }
}
