// ============================================================
// Layer 3 - Dataset Mode
// ============================================================
// The downstream model is trained on one of two corpora, and
// each uses a slightly different token convention:
//
//   wikilarge  - brackets become -LRB- / -RRB-, and both
//                opening (``) and closing ('') quotes are
//                written as ''
//   docaligned - brackets become -LRB- / -RRB-, quotes are
//                left as the word tokenizer produced them
//
// The mode is fixed before the pipeline runs.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetMode {
    #[default]
    Wikilarge,
    Docaligned,
}

impl DatasetMode {
    /// Whether quotation tokens are collapsed to the closing-quote symbol
    pub fn normalizes_quotes(self) -> bool {
        matches!(self, DatasetMode::Wikilarge)
    }
}

impl fmt::Display for DatasetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetMode::Wikilarge  => write!(f, "wikilarge"),
            DatasetMode::Docaligned => write!(f, "docaligned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_wikilarge_normalizes_quotes() {
        assert!(DatasetMode::Wikilarge.normalizes_quotes());
        assert!(!DatasetMode::Docaligned.normalizes_quotes());
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&DatasetMode::Docaligned).unwrap();
        assert_eq!(json, "\"docaligned\"");
    }
}
