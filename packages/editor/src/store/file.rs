use super::{check_document, CampaignStore, LoadError, SaveError, StoredCampaign};
use async_trait::async_trait;
use lander_model::CampaignDocument;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Campaign store keeping one `<id>.json` file per campaign in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path for a campaign, or `None` if the id cannot be a file name
    pub fn campaign_path(&self, campaign_id: &str) -> Option<PathBuf> {
        let safe = !campaign_id.is_empty()
            && campaign_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        safe.then(|| self.root.join(format!("{}.json", campaign_id)))
    }

    async fn read_stored(&self, path: &Path) -> Result<Option<StoredCampaign>, LoadError> {
        let source = match tokio::fs::read_to_string(path).await {
            Ok(source) => source,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LoadError::Transient(e.to_string())),
        };

        serde_json::from_str(&source)
            .map(Some)
            .map_err(|e| LoadError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl CampaignStore for FileStore {
    async fn load_campaign(
        &self,
        campaign_id: &str,
        acting_user: &str,
    ) -> Result<CampaignDocument, LoadError> {
        let path = self
            .campaign_path(campaign_id)
            .ok_or_else(|| LoadError::NotFound(campaign_id.to_string()))?;

        let stored = self
            .read_stored(&path)
            .await?
            .ok_or_else(|| LoadError::NotFound(campaign_id.to_string()))?;

        if stored.owner != acting_user {
            return Err(LoadError::PermissionDenied {
                campaign_id: campaign_id.to_string(),
                user: acting_user.to_string(),
            });
        }

        debug!(campaign_id, path = %path.display(), "Loaded campaign");
        Ok(stored.document)
    }

    async fn save_campaign(
        &self,
        campaign_id: &str,
        acting_user: &str,
        document: &CampaignDocument,
    ) -> Result<(), SaveError> {
        let path = self.campaign_path(campaign_id).ok_or_else(|| {
            SaveError::Validation(format!("invalid campaign id: {:?}", campaign_id))
        })?;
        check_document(campaign_id, document)?;

        let existing = self.read_stored(&path).await.map_err(|e| match e {
            LoadError::Malformed(msg) => {
                SaveError::Transient(format!("existing campaign file is unreadable: {}", msg))
            }
            other => SaveError::Transient(other.to_string()),
        })?;

        if let Some(existing) = existing {
            if existing.owner != acting_user {
                return Err(SaveError::PermissionDenied {
                    campaign_id: campaign_id.to_string(),
                    user: acting_user.to_string(),
                });
            }
        }

        let stored = StoredCampaign {
            owner: acting_user.to_string(),
            document: document.clone(),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| SaveError::Validation(e.to_string()))?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| SaveError::Transient(e.to_string()))?;

        // Write beside the target and rename so readers never see half a file
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| SaveError::Transient(e.to_string()))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| SaveError::Transient(e.to_string()))?;

        info!(campaign_id, path = %path.display(), "Saved campaign");
        Ok(())
    }
}
