//! # Campaign Persistence
//!
//! Load/save contracts the editor consumes from a backend, plus two
//! in-repo backends: an in-memory store and a JSON file store.
//!
//! Stores enforce per-user access: a campaign belongs to the user who first
//! saved it, and only that user may load or overwrite it. The acting user id
//! comes from the authentication layer and is trusted as given.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use lander_model::CampaignDocument;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a campaign could not be loaded
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Campaign not found: {0}")]
    NotFound(String),

    #[error("User {user} may not open campaign {campaign_id}")]
    PermissionDenied { campaign_id: String, user: String },

    #[error("Temporary failure: {0}")]
    Transient(String),

    /// The stored document is unreadable or breaks document invariants
    #[error("Stored campaign is malformed: {0}")]
    Malformed(String),
}

impl LoadError {
    /// Whether the caller may offer a retry
    pub fn is_retryable(&self) -> bool {
        matches!(self, LoadError::Transient(_))
    }
}

/// Why a campaign could not be saved
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaveError {
    #[error("User {user} may not save campaign {campaign_id}")]
    PermissionDenied { campaign_id: String, user: String },

    #[error("Campaign rejected: {0}")]
    Validation(String),

    #[error("Temporary failure: {0}")]
    Transient(String),
}

/// Backend that persists campaign documents
#[async_trait]
pub trait CampaignStore: Send + Sync {
    async fn load_campaign(
        &self,
        campaign_id: &str,
        acting_user: &str,
    ) -> Result<CampaignDocument, LoadError>;

    async fn save_campaign(
        &self,
        campaign_id: &str,
        acting_user: &str,
        document: &CampaignDocument,
    ) -> Result<(), SaveError>;
}

/// Persisted form of a campaign: the document plus its owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCampaign {
    pub owner: String,
    pub document: CampaignDocument,
}

/// Checks shared by every store before accepting a document
fn check_document(campaign_id: &str, document: &CampaignDocument) -> Result<(), SaveError> {
    if document.id != campaign_id {
        return Err(SaveError::Validation(format!(
            "document id {} does not match campaign {}",
            document.id, campaign_id
        )));
    }
    document
        .validate()
        .map_err(|e| SaveError::Validation(e.to_string()))
}
