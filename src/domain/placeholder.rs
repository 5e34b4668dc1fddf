// ============================================================
// Layer 3 - Entity Placeholders
// ============================================================
// A named entity is replaced by CATEGORY@N, for example
// PERSON@1 or LOCATION@2.
//
//   CATEGORY  the chunker's label, with GPE renamed to
//             LOCATION (every other label passes through)
//   N         1-based ordinal, counted per category and
//             per sentence
//
// PlaceholderRegistry is the per-sentence accumulator. The
// anonymizer builds a fresh one for every sentence, so the
// same person can be PERSON@1 in one sentence and PERSON@2 in
// the next.

use std::collections::HashMap;
use std::fmt;

/// Label emitted by the chunker for geo-political entities
pub const GPE_LABEL: &str = "GPE";

/// Label GPE entities are written out as
pub const LOCATION_LABEL: &str = "LOCATION";

/// Map a chunker label onto the placeholder category
pub fn normalize_category(label: &str) -> &str {
    if label == GPE_LABEL {
        LOCATION_LABEL
    } else {
        label
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityPlaceholder {
    pub category: String,
    pub ordinal:  usize,
}

impl fmt::Display for EntityPlaceholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.category, self.ordinal)
    }
}

/// Ordinal bookkeeping for one sentence.
#[derive(Debug, Default)]
pub struct PlaceholderRegistry {
    /// Number of distinct entities seen so far, per category
    counts: HashMap<String, usize>,

    /// (lowercased surface, category) -> assigned ordinal
    ordinals: HashMap<(String, String), usize>,
}

impl PlaceholderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the placeholder for an entity occurrence.
    ///
    /// `surface` is compared case-insensitively and `label` is
    /// normalized first, so "Paris"/GPE and "paris"/LOCATION
    /// resolve to the same ordinal.
    pub fn placeholder(&mut self, surface: &str, label: &str) -> EntityPlaceholder {
        let category = normalize_category(label).to_string();
        let key      = (surface.to_lowercase(), category.clone());

        let ordinal = match self.ordinals.get(&key) {
            Some(&n) => n,
            None => {
                let counter = self.counts.entry(category.clone()).or_insert(0);
                *counter += 1;
                self.ordinals.insert(key, *counter);
                *counter
            }
        };

        EntityPlaceholder { category, ordinal }
    }

    /// Number of distinct entities registered in this sentence
    pub fn distinct_entities(&self) -> usize {
        self.ordinals.len()
    }
}
