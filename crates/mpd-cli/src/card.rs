//! # The MonopathPatientDAGs Card
//!
//! Declares the dataset card as literal constants: the GitHub repository
//! resource, the JSONL file set hosted inside it, and the single record
//! schema describing one trajectory row. Construction order matters: the
//! file set's `containedIn` must point at a resource declared before it.

use mpd_croissant::{
    DataType, Field, FileObject, FileSet, Metadata, RecordSet, Resource, ResourceRef, Source,
};

/// Dataset display name.
pub const DATASET_NAME: &str = "MonopathPatientDAGs";

/// Canonical dataset URL.
pub const DATASET_URL: &str = "https://github.com/DaneshjouLab/DynamicData/";

/// Identifier of the repository file object.
pub const REPOSITORY_ID: &str = "github-repository";

/// Identifier of the JSONL file set.
pub const JSONL_FILES_ID: &str = "jsonl-files";

// Description text reproduced verbatim from the upstream dataset card,
// including its run-together line joins and hyphenation artifacts.
const DESCRIPTION: &str = concat!(
    "We present a modular framework that transforms free-text case reports ",
    "into Monopath directed acyclic graphs (DAGs) that represent temporally ordered",
    "and semantically grounded patient trajectories. DAGs are a natural fit for model-ing",
    "clinical narratives as they encode time-ordered clinical states and transitions,",
    "supporting branching and causal reasoning. These graphs serve as generative tem-plates",
    "for clinically grounded synthetic data and support downstream tasks such as",
    "patient similarity retrieval and trajectory-aware data augmentation.",
);

/// Build the full MonopathPatientDAGs card.
pub fn monopath_metadata() -> Metadata {
    Metadata::new(
        DATASET_NAME,
        DESCRIPTION,
        "",
        DATASET_URL,
        distribution(),
        vec![jsonl_record_set()],
    )
}

/// The dataset's resources: the GitHub repository, then the JSONL file
/// set contained in it.
fn distribution() -> Vec<Resource> {
    vec![
        Resource::FileObject(FileObject {
            id: REPOSITORY_ID.to_string(),
            name: REPOSITORY_ID.to_string(),
            description: "MonopathPatientDAGs repository on GitHub.".to_string(),
            content_url: "https://github.com/shloknatarajan/MonopathPatientDAGsDataset"
                .to_string(),
            encoding_format: "git+https".to_string(),
            // The integrity slot carries the branch ref, as published upstream.
            sha256: Some("main".to_string()),
        }),
        Resource::FileSet(FileSet {
            id: JSONL_FILES_ID.to_string(),
            name: JSONL_FILES_ID.to_string(),
            description: "JSONL files are hosted on the GitHub repository.".to_string(),
            contained_in: ResourceRef::new(REPOSITORY_ID),
            encoding_format: "application/jsonlines".to_string(),
            includes: "dataset/dynamic_data.jsonl".to_string(),
        }),
    ]
}

/// The single record schema: one row per patient trajectory.
fn jsonl_record_set() -> RecordSet {
    RecordSet::new(
        "jsonl",
        "jsonl",
        vec![
            jsonl_field("graph_id", "", DataType::Text, "graph_id"),
            jsonl_field(
                "is_control",
                "Whether the graph is a control graph.",
                DataType::Boolean,
                "is_control",
            ),
            jsonl_field(
                "synthetic_output",
                "The synthetic output history.",
                DataType::Text,
                "synthetic_output",
            ),
            jsonl_field(
                "model",
                "The model used to generate the synthetic output.",
                DataType::Text,
                "model",
            ),
            jsonl_field(
                "node_path_used",
                "Node path in string format (needs to be parsed to array)",
                DataType::Text,
                "node_path_used",
            ),
            // Upstream binds node_path_true to the node_path_used column;
            // the duplication is carried through unchanged.
            jsonl_field(
                "node_path_true",
                "The longest path of the directed acyclic graph",
                DataType::Text,
                "node_path_used",
            ),
            jsonl_field("uid", "uid", DataType::Text, "uid"),
            jsonl_field(
                "graph_json",
                "JSON containing the history node/edges. Stored as a string but can be parsed",
                DataType::Text,
                "graph_json",
            ),
        ],
    )
}

/// A field of the `jsonl` record schema, bound to a column of the JSONL
/// file set.
fn jsonl_field(name: &str, description: &str, data_type: DataType, column: &str) -> Field {
    Field::new(
        format!("jsonl/{name}"),
        name,
        description,
        data_type,
        Source::column(JSONL_FILES_ID, column),
    )
}
