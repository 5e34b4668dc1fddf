// ============================================================
// Layer 5 - RuleBasedToolkit
// ============================================================
// Implements the NlpToolkit trait on top of the rule-based
// components in this layer.

use anyhow::Result;

use crate::domain::chunk::{Chunk, TaggedToken};
use crate::domain::traits::NlpToolkit;
use crate::nlp::{
    ne_chunker::NeChunker,
    pos_tagger::PosTagger,
    sentence_splitter::SentenceSplitter,
    word_tokenizer::TreebankWordTokenizer,
};

pub struct RuleBasedToolkit {
    splitter:  SentenceSplitter,
    tokenizer: TreebankWordTokenizer,
    tagger:    PosTagger,
    chunker:   NeChunker,
}

impl RuleBasedToolkit {
    /// Build the toolkit. Fails only if a tokenizer rule does not compile.
    pub fn new() -> Result<Self> {
        let toolkit = Self {
            splitter:  SentenceSplitter::new(),
            tokenizer: TreebankWordTokenizer::new()?,
            tagger:    PosTagger::new(),
            chunker:   NeChunker::new(),
        };
        tracing::debug!("Rule-based NLP toolkit ready");
        Ok(toolkit)
    }
}

impl NlpToolkit for RuleBasedToolkit {
    fn sent_tokenize(&self, text: &str) -> Vec<String> {
        self.splitter.split(text)
    }

    /// Sentence-split first so only each sentence's final
    /// period is separated from its word
    fn word_tokenize(&self, text: &str) -> Vec<String> {
        self.splitter
            .split(text)
            .iter()
            .flat_map(|sentence| self.tokenizer.tokenize(sentence))
            .collect()
    }

    fn pos_tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        self.tagger.tag(tokens)
    }

    fn ne_chunk(&self, tagged: Vec<TaggedToken>) -> Vec<Chunk> {
        self.chunker.chunk(tagged)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenize_splits_each_sentence_period() {
        let tk = RuleBasedToolkit::new().unwrap();
        assert_eq!(
            tk.word_tokenize("The dog ran. John went home."),
            vec!["The", "dog", "ran", ".", "John", "went", "home", "."]
        );
    }

    #[test]
    fn test_full_chain_finds_person() {
        let tk     = RuleBasedToolkit::new().unwrap();
        let tokens = tk.word_tokenize("The dog ran . John went home .");
        let chunks = tk.ne_chunk(tk.pos_tag(&tokens));

        let entities: Vec<_> = chunks.iter().filter(|c| c.is_entity()).collect();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].words(), vec!["John"]);
        assert!(matches!(entities[0], Chunk::Entity { label, .. } if label == "PERSON"));
    }

    #[test]
    fn test_full_chain_keeps_multi_word_place_whole() {
        let tk     = RuleBasedToolkit::new().unwrap();
        let tokens = tk.word_tokenize("We flew to New York.");
        let chunks = tk.ne_chunk(tk.pos_tag(&tokens));

        let entities: Vec<_> = chunks.iter().filter(|c| c.is_entity()).collect();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].words(), vec!["New", "York"]);
        assert!(matches!(entities[0], Chunk::Entity { label, .. } if label == "GPE"));
    }

    #[test]
    fn test_sent_tokenize_keeps_order() {
        let tk = RuleBasedToolkit::new().unwrap();
        assert_eq!(
            tk.sent_tokenize("We ran. They hid. It ended."),
            vec!["We ran.", "They hid.", "It ended."]
        );
    }
}
