// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The pipeline stages program against these traits rather
// than concrete types:
//
//   CorpusSource  - where the raw story lines come from
//                   (CorpusReader reads a text file)
//   NlpToolkit    - tokenization, tagging and NE chunking
//                   (RuleBasedToolkit in Layer 5)
//
// Tests plug in small stub implementations so the pairing and
// anonymization logic can be checked with hand-written chunks.

use anyhow::Result;
use crate::domain::chunk::{Chunk, TaggedToken};

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the story lines of a corpus,
/// with structural separator lines already removed.
pub trait CorpusSource {
    fn load_lines(&self) -> Result<Vec<String>>;
}

// ─── NlpToolkit ───────────────────────────────────────────────────────────────
/// The natural-language services the pipeline relies on.
///
/// Implementations:
///   - RuleBasedToolkit -> regex tokenizer, lexicon tagger,
///                         gazetteer-driven NE chunker
pub trait NlpToolkit {
    /// Split running text into sentences, in text order
    fn sent_tokenize(&self, text: &str) -> Vec<String>;

    /// Split text into word and punctuation tokens
    fn word_tokenize(&self, text: &str) -> Vec<String>;

    /// Attach a part-of-speech tag to every token
    fn pos_tag(&self, tokens: &[String]) -> Vec<TaggedToken>;

    /// Group tagged tokens into plain tokens and labelled entity spans
    fn ne_chunk(&self, tagged: Vec<TaggedToken>) -> Vec<Chunk>;
}
