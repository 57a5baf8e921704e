use crate::CampaignDocument;

/// Generate a seed from the current time (hex milliseconds)
pub fn time_seed() -> String {
    format!("{:x}", chrono::Utc::now().timestamp_millis())
}

/// Sequential block id generator
///
/// Ids look like `hero1-18c3f2a9b10-4`: lowercased block type, a seed
/// fixed for the generator's lifetime, and a counter that only goes up.
#[derive(Debug, Clone)]
pub struct BlockIdGenerator {
    seed: String,
    count: u32,
}

impl BlockIdGenerator {
    /// Create a generator seeded from the current time
    pub fn new() -> Self {
        Self::from_seed(time_seed())
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate next sequential id for a block of `block_type`
    pub fn new_id(&mut self, block_type: &str) -> String {
        self.count += 1;
        format!("{}-{}-{}", block_type.to_lowercase(), self.seed, self.count)
    }

    /// Generate an id that no block in `doc` already uses
    pub fn new_id_for(&mut self, block_type: &str, doc: &CampaignDocument) -> String {
        loop {
            let id = self.new_id(block_type);
            if !doc.contains_block(&id) {
                return id;
            }
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of ids handed out so far
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Default for BlockIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PageBlock;
    use std::sync::Arc;

    #[test]
    fn test_sequential_ids() {
        let mut gen = BlockIdGenerator::from_seed("abc");

        let id1 = gen.new_id("Hero1");
        let id2 = gen.new_id("Hero1");
        let id3 = gen.new_id("Header1");

        assert_eq!(id1, "hero1-abc-1");
        assert_eq!(id2, "hero1-abc-2");
        assert_eq!(id3, "header1-abc-3");
        assert_eq!(gen.count(), 3);
    }

    #[test]
    fn test_skips_ids_already_in_document() {
        let mut doc = CampaignDocument::new("c1", "Test");
        doc.blocks.push(Arc::new(PageBlock::new("hero1-abc-1", "Hero1")));
        doc.blocks.push(Arc::new(PageBlock::new("hero1-abc-2", "Hero1")));

        let mut gen = BlockIdGenerator::from_seed("abc");
        let id = gen.new_id_for("Hero1", &doc);

        assert_eq!(id, "hero1-abc-3");
    }

    #[test]
    fn test_time_seed_is_hex() {
        let seed = time_seed();
        assert!(!seed.is_empty());
        assert!(seed.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
