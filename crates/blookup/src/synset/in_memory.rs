use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use super::model::normalize_term;
use super::{
    KbError, KbResult, KnowledgeBase, Language, Sense, SenseSource, Synset, SynsetId, TermQuery,
    UniversalPos, WordNetOffset,
};

/// In-memory implementation of KnowledgeBase for testing, development and
/// serving from a JSON dump
pub struct InMemoryKnowledgeBase {
    synsets: RwLock<HashMap<String, Synset>>,
}

impl InMemoryKnowledgeBase {
    pub fn new() -> Self {
        Self {
            synsets: RwLock::new(HashMap::new()),
        }
    }

    /// Load a knowledge base from a JSON array of synsets
    pub fn load_from_file(path: impl AsRef<Path>) -> KbResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let synsets: Vec<Synset> = serde_json::from_str(&content)?;
        let kb = Self::new();
        for synset in synsets {
            kb.insert(synset)?;
        }
        Ok(kb)
    }

    /// Insert a synset, replacing any previous entry with the same key
    pub fn insert(&self, synset: Synset) -> KbResult<()> {
        let mut synsets = self
            .synsets
            .write()
            .map_err(|e| KbError::Backend(format!("Failed to acquire write lock: {}", e)))?;
        synsets.insert(synset.id.to_string(), synset);
        Ok(())
    }

    /// Number of synsets loaded
    pub fn len(&self) -> usize {
        self.synsets.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn matching<F>(&self, predicate: F) -> KbResult<Vec<Synset>>
    where
        F: Fn(&Synset) -> bool,
    {
        let synsets = self
            .synsets
            .read()
            .map_err(|e| KbError::Backend(format!("Failed to acquire read lock: {}", e)))?;
        let mut matched: Vec<Synset> = synsets
            .values()
            .filter(|synset| predicate(synset))
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; keep output stable
        matched.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        Ok(matched)
    }
}

fn sense_matches_term(sense: &Sense, query: &TermQuery) -> bool {
    if sense.language != query.language {
        return false;
    }
    if let Some(pos) = query.pos {
        if sense.pos != pos {
            return false;
        }
    }
    if query.normalized {
        normalize_term(&sense.full_lemma) == normalize_term(&query.term)
    } else {
        sense.full_lemma == query.term
    }
}

impl Default for InMemoryKnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KnowledgeBase for InMemoryKnowledgeBase {
    async fn lookup(&self, query: &TermQuery) -> KbResult<Vec<Synset>> {
        self.matching(|synset| synset.senses.iter().any(|s| sense_matches_term(s, query)))
    }

    async fn by_wordnet_offset(&self, offset: &WordNetOffset) -> KbResult<Vec<Synset>> {
        self.matching(|synset| synset.wordnet_offsets.contains(offset))
    }

    async fn by_wikipedia_title(
        &self,
        title: &str,
        language: Language,
        pos: UniversalPos,
    ) -> KbResult<Vec<Synset>> {
        self.matching(|synset| {
            synset.senses.iter().any(|s| {
                s.source == SenseSource::Wiki
                    && s.language == language
                    && s.pos == pos
                    && s.full_lemma == title
            })
        })
    }

    async fn get(&self, id: &SynsetId) -> KbResult<Synset> {
        let synsets = self
            .synsets
            .read()
            .map_err(|e| KbError::Backend(format!("Failed to acquire read lock: {}", e)))?;
        synsets
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| KbError::NotFound(id.to_string()))
    }
}
