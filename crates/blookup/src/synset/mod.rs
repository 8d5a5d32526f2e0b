pub mod error;
pub mod in_memory;
pub mod knowledge_base;
pub mod model;
pub mod service;

pub use error::{KbError, KbResult};
pub use in_memory::InMemoryKnowledgeBase;
pub use knowledge_base::KnowledgeBase;
pub use model::{
    DbpediaUri, Language, ParseError, Relation, Sense, SenseSource, Synset, SynsetId, SynsetType,
    TermQuery, UniversalPos, WordNetOffset,
};
pub use service::LookupService;
