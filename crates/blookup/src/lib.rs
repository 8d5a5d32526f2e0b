//! Domain crate for the blookup lexical lookup service.
//!
//! Owns the synset data model, the `KnowledgeBase` abstraction over the
//! upstream semantic knowledge base, the lookup service layer, and the
//! DBpedia/SPARQL helper utilities.

pub mod config;
pub mod linked_data;
pub mod synset;

pub use config::BlookupConfig;

// Re-export the types the API surface works with
pub use synset::{
    InMemoryKnowledgeBase, KbError, KbResult, KnowledgeBase, Language, LookupService, ParseError,
    Sense, Synset, SynsetId, SynsetType, UniversalPos, WordNetOffset,
};
