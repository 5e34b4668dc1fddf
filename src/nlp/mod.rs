// ============================================================
// Layer 5 - NLP Toolkit
// ============================================================
// The language services the pipeline consumes through the
// NlpToolkit trait (Layer 3):
//
//   sent_tokenize  -> SentenceSplitter
//   word_tokenize  -> SentenceSplitter + TreebankWordTokenizer
//   pos_tag        -> PosTagger
//   ne_chunk       -> NeChunker
//
// RuleBasedToolkit wires the four together. Everything here
// is deterministic and rule-driven: regexes, word lists and
// a gazetteer, no trained model files.

/// Static word lists (abbreviations, lexicon, gazetteer)
pub mod lexicon;

/// Abbreviation-aware sentence boundary detection
pub mod sentence_splitter;

/// Penn Treebank style word tokenizer
pub mod word_tokenizer;

/// Lexicon and suffix driven POS tagger
pub mod pos_tagger;

/// Proper-noun span grouping and labelling
pub mod ne_chunker;

/// The NlpToolkit implementation used by the CLI
pub mod toolkit;

pub use toolkit::RuleBasedToolkit;
