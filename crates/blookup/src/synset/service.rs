use std::sync::Arc;

use super::{
    DbpediaUri, KbResult, KnowledgeBase, Language, Relation, Sense, Synset, SynsetId, SynsetType,
    TermQuery, UniversalPos, WordNetOffset,
};

/// Service layer for knowledge-base lookups.
///
/// Owns the fallback semantics of the lookup operations; the underlying
/// `KnowledgeBase` only answers single queries.
#[derive(Clone)]
pub struct LookupService {
    kb: Arc<dyn KnowledgeBase>,
}

impl LookupService {
    pub fn new(kb: Arc<dyn KnowledgeBase>) -> Self {
        Self { kb }
    }

    /// Term lookup with an automatic fallback: exact match first, then the
    /// normalized (case/underscore-folded) variant when nothing matched.
    pub async fn lookup_term(
        &self,
        language: Language,
        term: &str,
        pos: Option<UniversalPos>,
    ) -> KbResult<Vec<Synset>> {
        let exact = self
            .kb
            .lookup(
                &TermQuery::new(term, language)
                    .maybe_pos(pos)
                    .normalized(false),
            )
            .await?;
        if !exact.is_empty() {
            return Ok(exact);
        }
        self.kb
            .lookup(&TermQuery::new(term, language).maybe_pos(pos))
            .await
    }

    /// Non-normalized term lookup, POS required, no fallback
    pub async fn lookup_term_exact(
        &self,
        language: Language,
        pos: UniversalPos,
        term: &str,
    ) -> KbResult<Vec<Synset>> {
        self.kb
            .lookup(&TermQuery::new(term, language).pos(pos).normalized(false))
            .await
    }

    /// Synsets cross-referenced from an external dictionary offset
    pub async fn by_wordnet_offset(&self, offset: &WordNetOffset) -> KbResult<Vec<Synset>> {
        self.kb.by_wordnet_offset(offset).await
    }

    /// Encyclopedia title lookup with a fallback to an English term query
    /// when no synset is linked to the title directly.
    pub async fn by_wikipedia(&self, title: &str, pos: UniversalPos) -> KbResult<Vec<Synset>> {
        let direct = self
            .kb
            .by_wikipedia_title(title, Language::En, pos)
            .await?;
        if !direct.is_empty() {
            return Ok(direct);
        }
        self.kb
            .lookup(&TermQuery::new(title, Language::En).pos(pos))
            .await
    }

    /// Category of a synset node
    pub async fn synset_type(&self, id: &SynsetId) -> KbResult<SynsetType> {
        Ok(self.kb.get(id).await?.synset_type)
    }

    /// Outgoing relations of a synset
    pub async fn relations(&self, id: &SynsetId) -> KbResult<Vec<Relation>> {
        Ok(self.kb.get(id).await?.relations)
    }

    /// Lexicalizations of a synset, optionally filtered by language
    pub async fn senses(
        &self,
        id: &SynsetId,
        language: Option<Language>,
    ) -> KbResult<Vec<Sense>> {
        let synset = self.kb.get(id).await?;
        Ok(match language {
            None => synset.senses,
            Some(lang) => synset
                .senses
                .into_iter()
                .filter(|s| s.language == lang)
                .collect(),
        })
    }

    /// Linked-data URIs of a synset, optionally filtered by language
    pub async fn dbpedia_uris(
        &self,
        id: &SynsetId,
        language: Option<Language>,
    ) -> KbResult<Vec<DbpediaUri>> {
        let synset = self.kb.get(id).await?;
        Ok(match language {
            None => synset.dbpedia_uris,
            Some(lang) => synset
                .dbpedia_uris
                .into_iter()
                .filter(|u| u.language == lang)
                .collect(),
        })
    }

    /// External dictionary cross-references of a synset
    pub async fn wordnet_offsets(&self, id: &SynsetId) -> KbResult<Vec<WordNetOffset>> {
        Ok(self.kb.get(id).await?.wordnet_offsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synset::{InMemoryKnowledgeBase, SenseSource};

    fn service_with(synsets: Vec<Synset>) -> LookupService {
        let kb = InMemoryKnowledgeBase::new();
        for synset in synsets {
            kb.insert(synset).unwrap();
        }
        LookupService::new(Arc::new(kb))
    }

    fn synset(id: &str, lemma: &str, pos: UniversalPos, language: Language) -> Synset {
        Synset {
            id: SynsetId::from_string(id),
            synset_type: SynsetType::Concept,
            senses: vec![Sense {
                full_lemma: lemma.to_string(),
                pos,
                language,
                source: SenseSource::WordNet,
            }],
            relations: vec![],
            wordnet_offsets: vec![],
            dbpedia_uris: vec![],
        }
    }

    #[tokio::test]
    async fn test_lookup_term_falls_back_to_normalized() {
        let service = service_with(vec![synset(
            "bn:00042055n",
            "The_Hague",
            UniversalPos::Noun,
            Language::En,
        )]);

        // Exact spelling differs, normalized matching still finds the node
        let found = service
            .lookup_term(Language::En, "the hague", None)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "bn:00042055n");
    }

    #[tokio::test]
    async fn test_lookup_term_without_pos_is_union_over_pos() {
        let service = service_with(vec![
            synset("bn:00008364n", "bank", UniversalPos::Noun, Language::En),
            synset("bn:00008365v", "bank", UniversalPos::Verb, Language::En),
        ]);

        let all = service.lookup_term(Language::En, "bank", None).await.unwrap();
        assert_eq!(all.len(), 2);

        let nouns = service
            .lookup_term(Language::En, "bank", Some(UniversalPos::Noun))
            .await
            .unwrap();
        assert_eq!(nouns.len(), 1);
        assert_eq!(nouns[0].id.as_str(), "bn:00008364n");
    }

    #[tokio::test]
    async fn test_lookup_term_exact_has_no_fallback() {
        let service = service_with(vec![synset(
            "bn:00008364n",
            "bank",
            UniversalPos::Noun,
            Language::En,
        )]);

        let found = service
            .lookup_term_exact(Language::En, UniversalPos::Noun, "BANK")
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_by_wikipedia_falls_back_to_term_query() {
        // No Wiki-sourced sense anywhere, so the direct title match misses
        // and the English term query takes over.
        let service = service_with(vec![synset(
            "bn:00008364n",
            "bank",
            UniversalPos::Noun,
            Language::En,
        )]);

        let found = service
            .by_wikipedia("bank", UniversalPos::Noun)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_senses_language_filter_is_subset() {
        let mut node = synset("bn:00008364n", "bank", UniversalPos::Noun, Language::En);
        node.senses.push(Sense {
            full_lemma: "Bank".to_string(),
            pos: UniversalPos::Noun,
            language: Language::De,
            source: SenseSource::WordNet,
        });
        let service = service_with(vec![node]);
        let id = SynsetId::from_string("bn:00008364n");

        let all = service.senses(&id, None).await.unwrap();
        let english = service.senses(&id, Some(Language::En)).await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(english.len(), 1);
        assert!(english.iter().all(|s| all.contains(s)));
        assert!(english.iter().all(|s| s.language == Language::En));
    }

    #[tokio::test]
    async fn test_synset_type_unknown_id_is_not_found() {
        let service = service_with(vec![]);
        let err = service
            .synset_type(&SynsetId::from_string("bn:99999999n"))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::synset::KbError::NotFound(_)));
    }
}
