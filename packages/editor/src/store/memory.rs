use super::{check_document, CampaignStore, LoadError, SaveError, StoredCampaign};
use async_trait::async_trait;
use lander_model::CampaignDocument;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory campaign store (tests, previews)
#[derive(Debug, Default)]
pub struct MemoryStore {
    campaigns: RwLock<HashMap<String, StoredCampaign>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a campaign owned by `owner`, replacing any existing one
    pub async fn insert(&self, owner: impl Into<String>, document: CampaignDocument) {
        let owner = owner.into();
        self.campaigns.write().await.insert(
            document.id.clone(),
            StoredCampaign { owner, document },
        );
    }

    /// Current stored copy, bypassing access checks
    pub async fn get(&self, campaign_id: &str) -> Option<StoredCampaign> {
        self.campaigns.read().await.get(campaign_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.campaigns.read().await.len()
    }
}

#[async_trait]
impl CampaignStore for MemoryStore {
    async fn load_campaign(
        &self,
        campaign_id: &str,
        acting_user: &str,
    ) -> Result<CampaignDocument, LoadError> {
        let campaigns = self.campaigns.read().await;
        let stored = campaigns
            .get(campaign_id)
            .ok_or_else(|| LoadError::NotFound(campaign_id.to_string()))?;

        if stored.owner != acting_user {
            return Err(LoadError::PermissionDenied {
                campaign_id: campaign_id.to_string(),
                user: acting_user.to_string(),
            });
        }

        Ok(stored.document.clone())
    }

    async fn save_campaign(
        &self,
        campaign_id: &str,
        acting_user: &str,
        document: &CampaignDocument,
    ) -> Result<(), SaveError> {
        check_document(campaign_id, document)?;

        let mut campaigns = self.campaigns.write().await;
        if let Some(existing) = campaigns.get(campaign_id) {
            if existing.owner != acting_user {
                return Err(SaveError::PermissionDenied {
                    campaign_id: campaign_id.to_string(),
                    user: acting_user.to_string(),
                });
            }
        }

        debug!(campaign_id, blocks = document.blocks.len(), "Saving campaign to memory");
        campaigns.insert(
            campaign_id.to_string(),
            StoredCampaign {
                owner: acting_user.to_string(),
                document: document.clone(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_checks_owner() {
        let store = MemoryStore::new();
        store.insert("alice", CampaignDocument::new("c1", "Alice's")).await;

        assert!(store.load_campaign("c1", "alice").await.is_ok());
        assert!(matches!(
            store.load_campaign("c1", "bob").await,
            Err(LoadError::PermissionDenied { .. })
        ));
        assert_eq!(
            store.load_campaign("nope", "alice").await,
            Err(LoadError::NotFound("nope".to_string()))
        );
    }

    #[tokio::test]
    async fn test_first_save_claims_campaign() {
        let store = MemoryStore::new();
        let doc = CampaignDocument::new("c1", "New");

        store.save_campaign("c1", "alice", &doc).await.unwrap();
        assert_eq!(store.get("c1").await.unwrap().owner, "alice");

        assert!(matches!(
            store.save_campaign("c1", "bob", &doc).await,
            Err(SaveError::PermissionDenied { .. })
        ));
    }

    #[tokio::test]
    async fn test_save_rejects_mismatched_id() {
        let store = MemoryStore::new();
        let doc = CampaignDocument::new("c2", "Other");

        assert!(matches!(
            store.save_campaign("c1", "alice", &doc).await,
            Err(SaveError::Validation(_))
        ));
        assert_eq!(store.len().await, 0);
    }
}
