use async_trait::async_trait;

use super::{KbResult, Language, Synset, SynsetId, TermQuery, UniversalPos, WordNetOffset};

/// Read-only access to the upstream lexical knowledge base.
///
/// Implementations must be safe for concurrent reads; callers share one
/// instance behind an `Arc` without any request-level serialization.
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Find synsets lexicalized by a term
    async fn lookup(&self, query: &TermQuery) -> KbResult<Vec<Synset>>;

    /// Find synsets cross-referenced from an external dictionary offset
    async fn by_wordnet_offset(&self, offset: &WordNetOffset) -> KbResult<Vec<Synset>>;

    /// Find synsets linked to an encyclopedia title
    async fn by_wikipedia_title(
        &self,
        title: &str,
        language: Language,
        pos: UniversalPos,
    ) -> KbResult<Vec<Synset>>;

    /// Get a synset by its key
    async fn get(&self, id: &SynsetId) -> KbResult<Synset>;
}
