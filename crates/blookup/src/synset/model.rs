use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Errors from parsing request-scoped enum values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown language code: {0}")]
    Language(String),

    #[error("unknown part-of-speech tag: {0}")]
    Pos(String),
}

/// NewType pattern for synset keys
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SynsetId(String);

impl SynsetId {
    /// Create from existing string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType pattern for external dictionary (WordNet) offsets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordNetOffset(String);

impl WordNetOffset {
    /// Create from existing string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WordNetOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supported language codes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    En,
    De,
    Es,
    Fr,
    It,
    Nl,
    Pt,
    Ru,
    Ja,
    Zh,
}

impl Language {
    /// Parse a language code from a path segment
    pub fn parse(code: &str) -> Result<Self, ParseError> {
        code.parse()
            .map_err(|_| ParseError::Language(code.to_string()))
    }
}

/// Universal part-of-speech tags
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum UniversalPos {
    #[strum(to_string = "NOUN")]
    Noun,
    #[strum(to_string = "VERB")]
    Verb,
    #[strum(to_string = "ADJ", serialize = "ADJECTIVE")]
    Adj,
    #[strum(to_string = "ADV", serialize = "ADVERB")]
    Adv,
}

impl UniversalPos {
    /// Parse a POS tag from a path segment.
    ///
    /// Accepts both the full tag (`NOUN`, `adj`, `ADVERB`) and the
    /// one-letter WordNet code (`n`, `v`, `a`, `j`, `r`).
    pub fn parse(tag: &str) -> Result<Self, ParseError> {
        let mut chars = tag.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return Self::from_letter(letter);
        }
        tag.parse().map_err(|_| ParseError::Pos(tag.to_string()))
    }

    /// Parse a one-letter WordNet POS code
    pub fn from_letter(letter: char) -> Result<Self, ParseError> {
        match letter.to_ascii_lowercase() {
            'n' => Ok(Self::Noun),
            'v' => Ok(Self::Verb),
            'a' | 'j' => Ok(Self::Adj),
            'r' => Ok(Self::Adv),
            other => Err(ParseError::Pos(other.to_string())),
        }
    }

    /// One-letter WordNet POS code
    pub fn letter(&self) -> char {
        match self {
            Self::Noun => 'n',
            Self::Verb => 'v',
            Self::Adj => 'a',
            Self::Adv => 'r',
        }
    }
}

/// Category of a synset node
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SynsetType {
    Concept,
    NamedEntity,
    Unknown,
}

/// Provenance of a lexicalization
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum SenseSource {
    #[strum(to_string = "WN")]
    #[serde(rename = "WN")]
    WordNet,
    #[strum(to_string = "WIKI")]
    #[serde(rename = "WIKI")]
    Wiki,
    #[strum(to_string = "WIKT")]
    #[serde(rename = "WIKT")]
    Wikt,
    #[strum(to_string = "BABELNET")]
    #[serde(rename = "BABELNET")]
    BabelNet,
}

/// A lexicalization of a synset: word/phrase + language + POS + source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    pub full_lemma: String,
    pub pos: UniversalPos,
    pub language: Language,
    pub source: SenseSource,
}

/// An outgoing edge to another synset, tagged with a pointer symbol
/// (e.g. `@` for hypernym)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub symbol: String,
    pub target: SynsetId,
}

/// A linked-data URI associated with a synset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbpediaUri {
    pub uri: String,
    pub language: Language,
}

/// A concept node in the knowledge base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synset {
    pub id: SynsetId,
    #[serde(rename = "type")]
    pub synset_type: SynsetType,
    #[serde(default)]
    pub senses: Vec<Sense>,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default)]
    pub wordnet_offsets: Vec<WordNetOffset>,
    #[serde(default)]
    pub dbpedia_uris: Vec<DbpediaUri>,
}

/// A term lookup against the knowledge base
#[derive(Debug, Clone, PartialEq)]
pub struct TermQuery {
    pub term: String,
    pub language: Language,
    pub pos: Option<UniversalPos>,
    pub normalized: bool,
}

impl TermQuery {
    /// New query; normalized matching by default
    pub fn new(term: impl Into<String>, language: Language) -> Self {
        Self {
            term: term.into(),
            language,
            pos: None,
            normalized: true,
        }
    }

    /// Constrain the query to one POS
    pub fn pos(mut self, pos: UniversalPos) -> Self {
        self.pos = Some(pos);
        self
    }

    /// Constrain the query to one POS, if given
    pub fn maybe_pos(mut self, pos: Option<UniversalPos>) -> Self {
        self.pos = pos;
        self
    }

    /// Toggle normalized matching
    pub fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }
}

/// Fold case, underscores and whitespace runs for normalized term matching
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
