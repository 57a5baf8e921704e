//! Error types for the editor

use thiserror::Error;

use crate::store::{LoadError, SaveError};

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid document: {0}")]
    Model(#[from] lander_model::ModelError),

    #[error("Load failed: {0}")]
    Load(#[from] LoadError),

    #[error("Save failed: {0}")]
    Save(#[from] SaveError),

    #[error("A save is already in progress")]
    SaveInFlight,

    #[error("No save is in progress")]
    NoSaveInFlight,

    #[error("Pending save is for campaign {found}, not {expected}")]
    ForeignSave { expected: String, found: String },
}
