//! # Dataset Resources
//!
//! Implements the `distribution` entries of a Croissant card: [`FileObject`]
//! for a single retrievable resource (here, the GitHub repository hosting
//! the dataset) and [`FileSet`] for a glob-scoped group of files inside a
//! parent resource.
//!
//! ## Field Naming
//!
//! Serde rename attributes map between Rust snake_case and the Croissant
//! JSON-LD property names (camelCase / `@`-prefixed).

use serde::{Deserialize, Serialize};

/// A JSON-LD reference to another node in the same document, serialized
/// as `{"@id": "<identifier>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Identifier of the referenced resource.
    #[serde(rename = "@id")]
    pub id: String,
}

impl ResourceRef {
    /// Create a reference to the resource with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A single retrievable resource the dataset's data lives in.
///
/// For this dataset the only file object is the GitHub repository itself;
/// its `sha256` slot carries the branch ref `main` rather than a content
/// digest, reproduced from the upstream card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileObject {
    /// Unique identifier within the document.
    #[serde(rename = "@id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description. Always emitted, possibly empty.
    pub description: String,
    /// Retrieval URL.
    #[serde(rename = "contentUrl")]
    pub content_url: String,
    /// Encoding tag (e.g., `git+https`).
    #[serde(rename = "encodingFormat")]
    pub encoding_format: String,
    /// Integrity marker. A 64-hex content digest in the common case; may
    /// carry a VCS revision for repository resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// A glob-scoped group of files contained in a parent resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSet {
    /// Unique identifier within the document.
    #[serde(rename = "@id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description. Always emitted, possibly empty.
    pub description: String,
    /// Reference to the parent resource. Must name a resource declared
    /// earlier in the same distribution list.
    #[serde(rename = "containedIn")]
    pub contained_in: ResourceRef,
    /// Encoding tag (e.g., `application/jsonlines`).
    #[serde(rename = "encodingFormat")]
    pub encoding_format: String,
    /// Include glob, relative to the parent resource.
    pub includes: String,
}

/// A distribution entry: either a file object or a file set.
///
/// Tagged on `@type` with the Croissant node type names, so entries
/// serialize as `{"@type": "cr:FileObject", ...}` / `{"@type":
/// "cr:FileSet", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum Resource {
    /// A single retrievable resource.
    #[serde(rename = "cr:FileObject")]
    FileObject(FileObject),
    /// A glob-scoped file group inside a parent resource.
    #[serde(rename = "cr:FileSet")]
    FileSet(FileSet),
}

impl Resource {
    /// Identifier of the underlying resource.
    pub fn id(&self) -> &str {
        match self {
            Resource::FileObject(fo) => &fo.id,
            Resource::FileSet(fs) => &fs.id,
        }
    }

    /// Display name of the underlying resource.
    pub fn name(&self) -> &str {
        match self {
            Resource::FileObject(fo) => &fo.name,
            Resource::FileSet(fs) => &fs.name,
        }
    }
}
