// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between the raw corpus file and the training
// file, one module per step:
//
//   story_corpus.txt
//       │
//       ▼
//   CorpusReader       → reads lines, drops == / ==== markers
//       │
//       ▼
//   segmenter          → joins lines, splits into sentences
//       │
//       ▼
//   SentenceTokenizer  → word tokens, -LRB-/-RRB-, quote style
//       │
//       ▼
//   pairer             → (s0 s1) (s2 s3) ... one pair per line
//       │
//       ▼
//   EntityAnonymizer   → John → PERSON@1, per-sentence ordinals
//       │
//       ▼
//   writer             → story_corpus.pairs.ne.txt
//
// deunk sits outside this flow: it repairs <unk> tokens in a
// model's output using the file the model was given.

/// Reads the corpus file and strips separator lines
pub mod loader;

/// Sentence segmentation of the joined story text
pub mod segmenter;

/// Word tokenization plus bracket/quote normalization
pub mod tokenizer;

/// Non-overlapping pairing of consecutive sentences
pub mod pairer;

/// Named-entity placeholder substitution
pub mod anonymizer;

/// Newline-delimited output
pub mod writer;

/// <unk> repair for generated files
pub mod deunk;
