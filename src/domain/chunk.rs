// ============================================================
// Layer 3 - Tagged Tokens and NE Chunks
// ============================================================
// The NLP toolkit hands back its results in two shapes:
//
//   pos_tag   -> Vec<TaggedToken>   one (word, tag) per token
//   ne_chunk  -> Vec<Chunk>         plain tokens interleaved
//                                   with labelled entity spans
//
// Chunk is a two-variant enum so the anonymizer matches on
// the variant instead of inspecting the value at runtime.
//
// Example for "John Smith went to Paris ."
//   Entity { PERSON, [John/NNP, Smith/NNP] }
//   Token  went/VBD
//   Token  to/TO
//   Entity { GPE, [Paris/NNP] }
//   Token  ./.

use serde::{Deserialize, Serialize};

/// A single word with its Penn Treebank part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag:  String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag:  tag.into(),
        }
    }
}

/// One element of a named-entity chunked sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chunk {
    /// A token outside any entity
    Token(TaggedToken),

    /// A labelled entity span, e.g. PERSON over [John, Smith]
    Entity {
        label:  String,
        tokens: Vec<TaggedToken>,
    },
}

impl Chunk {
    /// Convenience constructor used by the chunker and in tests
    pub fn entity(label: impl Into<String>, tokens: Vec<TaggedToken>) -> Self {
        Chunk::Entity {
            label: label.into(),
            tokens,
        }
    }

    /// Returns true for labelled entity spans
    pub fn is_entity(&self) -> bool {
        matches!(self, Chunk::Entity { .. })
    }

    /// The words covered by this chunk, in order
    pub fn words(&self) -> Vec<&str> {
        match self {
            Chunk::Token(t)              => vec![t.word.as_str()],
            Chunk::Entity { tokens, .. } => tokens.iter().map(|t| t.word.as_str()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_of_entity_span() {
        let c = Chunk::entity(
            "PERSON",
            vec![TaggedToken::new("John", "NNP"), TaggedToken::new("Smith", "NNP")],
        );
        assert!(c.is_entity());
        assert_eq!(c.words(), vec!["John", "Smith"]);
    }

    #[test]
    fn test_plain_token_is_not_entity() {
        let c = Chunk::Token(TaggedToken::new("went", "VBD"));
        assert!(!c.is_entity());
        assert_eq!(c.words(), vec!["went"]);
    }
}
