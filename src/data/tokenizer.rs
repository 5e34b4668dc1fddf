// ============================================================
// Layer 4 - Sentence Tokenizer
// ============================================================
// Word-tokenizes each sentence and rewrites brackets and
// quotes into the symbols the training corpus uses.
//
// Normalization, applied inside every token:
//   "("  -> "-LRB-"          both modes
//   ")"  -> "-RRB-"          both modes
//   "``" -> "''"             wikilarge only
//
// The word tokenizer already turns opening double quotes
// into `` and closing ones into '', so in wikilarge mode both
// directions end up as ''. In docaligned mode `` is kept.
//
// Output: one space-joined token string per sentence.
//
// Example (wikilarge):
//   He said "hi (twice)."
//   -> He said '' hi -LRB- twice -RRB- . ''

use crate::domain::mode::DatasetMode;
use crate::domain::traits::NlpToolkit;

const OPEN_QUOTE:  &str = "``";
const CLOSE_QUOTE: &str = "''";

pub struct SentenceTokenizer<'a> {
    toolkit: &'a dyn NlpToolkit,
    mode:    DatasetMode,
}

impl<'a> SentenceTokenizer<'a> {
    pub fn new(toolkit: &'a dyn NlpToolkit, mode: DatasetMode) -> Self {
        Self { toolkit, mode }
    }

    /// Tokenize and normalize every sentence
    pub fn tokenize_all(&self, sentences: &[String]) -> Vec<String> {
        tracing::info!("Tokenizing {} lines...", sentences.len());
        sentences.iter().map(|s| self.tokenize(s)).collect()
    }

    /// Tokenize and normalize one sentence
    pub fn tokenize(&self, sentence: &str) -> String {
        let tokens = self.toolkit.word_tokenize(sentence);
        normalize_tokens(tokens, self.mode).join(" ")
    }
}

/// Apply the bracket and (mode-dependent) quote rewrites
pub fn normalize_tokens(tokens: Vec<String>, mode: DatasetMode) -> Vec<String> {
    tokens
        .into_iter()
        .map(|t| {
            let t = t.replace('(', "-LRB-").replace(')', "-RRB-");
            if mode.normalizes_quotes() {
                t.replace(OPEN_QUOTE, CLOSE_QUOTE)
            } else {
                t
            }
        })
        .collect()
}
