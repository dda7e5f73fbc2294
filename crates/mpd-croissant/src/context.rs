//! JSON-LD `@context` for Croissant 1.0 documents.
//!
//! The context is a fixed object defined by the MLCommons Croissant
//! specification. It maps the short property names used throughout a card
//! (`citeAs`, `dataType`, `fileSet`, ...) onto their vocabulary IRIs.

use serde_json::{json, Value};

/// The Croissant 1.0 `@context` object.
///
/// Serialized with sorted keys (serde_json map ordering), so the rendered
/// context is byte-stable across runs.
pub fn croissant_context() -> Value {
    json!({
        "@language": "en",
        "@vocab": "https://schema.org/",
        "citeAs": "cr:citeAs",
        "column": "cr:column",
        "conformsTo": "dct:conformsTo",
        "cr": "http://mlcommons.org/croissant/",
        "rai": "http://mlcommons.org/croissant/RAI/",
        "data": {
            "@id": "cr:data",
            "@type": "@json"
        },
        "dataType": {
            "@id": "cr:dataType",
            "@type": "@vocab"
        },
        "dct": "http://purl.org/dc/terms/",
        "examples": {
            "@id": "cr:examples",
            "@type": "@json"
        },
        "extract": "cr:extract",
        "field": "cr:field",
        "fileProperty": "cr:fileProperty",
        "fileObject": "cr:fileObject",
        "fileSet": "cr:fileSet",
        "format": "cr:format",
        "includes": "cr:includes",
        "isLiveDataset": "cr:isLiveDataset",
        "jsonPath": "cr:jsonPath",
        "key": "cr:key",
        "md5": "cr:md5",
        "parentField": "cr:parentField",
        "path": "cr:path",
        "recordSet": "cr:recordSet",
        "references": "cr:references",
        "regex": "cr:regex",
        "repeated": "cr:repeated",
        "replace": "cr:replace",
        "sameAs": "cr:sameAs",
        "sha256": "cr:sha256",
        "source": "cr:source",
        "subField": "cr:subField",
        "transform": "cr:transform"
    })
}
