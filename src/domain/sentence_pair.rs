// ============================================================
// Layer 3 - SentencePair Domain Type
// ============================================================
// The embellishment model is trained on two consecutive
// sentences at a time. A SentencePair holds them and renders
// them as one training line:
//
//   first:  "The dog ran ."
//   second: "John went home ."
//   line:   "The dog ran . John went home ."
//
// When a story has an odd number of sentences the last one is
// paired with an empty string, so the rendered line ends with
// a single space. Nothing is ever dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    /// Sentence at the even index (0, 2, 4, ...)
    pub first: String,

    /// Sentence at the following odd index, or "" for a
    /// trailing unpaired sentence
    pub second: String,
}

impl SentencePair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first:  first.into(),
            second: second.into(),
        }
    }

    /// True when this pair carries a single trailing sentence
    pub fn is_padded(&self) -> bool {
        self.second.is_empty()
    }

    /// The training line: both sentences joined by one space
    pub fn to_line(&self) -> String {
        format!("{} {}", self.first, self.second)
    }
}

impl fmt::Display for SentencePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}
