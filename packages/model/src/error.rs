use thiserror::Error;

/// Structural problems found in a campaign document
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Campaign document has an empty id")]
    EmptyDocumentId,

    #[error("Block at index {0} has an empty id")]
    EmptyBlockId(usize),

    #[error("Block {0} has an empty type")]
    EmptyBlockType(String),

    #[error("Duplicate block id: {0}")]
    DuplicateBlockId(String),

    /// JSON has no encoding for NaN or infinity
    #[error("Block {block_id} has a non-finite number in {key}")]
    NonFiniteValue { block_id: String, key: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
