// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain structs, enums and traits that define what the
// pipeline works on. Nothing in here reads files or knows
// how tokenization or tagging is actually done.
//
// Rules for this layer:
//   - NO file I/O
//   - NO clap types
//   - NO concrete NLP implementation
//
// The pipeline stages in Layer 4 and the toolkit in Layer 5
// both speak in terms of these types, so either side can be
// swapped without touching the other.

// Dataset mode (token-normalization convention)
pub mod mode;

// Tagged tokens and NE chunks returned by the toolkit
pub mod chunk;

// Two consecutive sentences joined into one training line
pub mod sentence_pair;

// CATEGORY@N placeholders that replace named entities
pub mod placeholder;

// Core abstractions (traits) that other layers implement
pub mod traits;
