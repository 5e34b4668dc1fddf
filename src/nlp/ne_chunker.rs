// ============================================================
// Layer 5 - Named-Entity Chunker
// ============================================================
// Groups POS-tagged tokens into plain tokens and labelled
// entity spans.
//
// A span is a maximal run of NNP / NNPS tokens. Leading
// honorifics ("Mr.", "Dr.") are emitted as plain tokens and
// force the rest of the run to PERSON. Any other run is
// labelled by the first rule that fires:
//
//   1. organization keyword  "Acme Corporation" -> ORGANIZATION
//   2. facility keyword      "Tower Bridge"     -> FACILITY
//   3. location keyword      "Mount Everest"    -> LOCATION
//   4. gazetteer             "New York"         -> GPE
//   5. acronym               "NASA"             -> ORGANIZATION
//   6. default                                   -> PERSON

use std::collections::HashSet;

use crate::domain::chunk::{Chunk, TaggedToken};
use crate::nlp::lexicon::{
    FACILITY_KEYWORDS, GPE_GAZETTEER, LOCATION_KEYWORDS, ORGANIZATION_KEYWORDS, TITLES,
};

pub const PERSON: &str       = "PERSON";
pub const ORGANIZATION: &str = "ORGANIZATION";
pub const GPE: &str          = "GPE";
pub const LOCATION: &str     = "LOCATION";
pub const FACILITY: &str     = "FACILITY";

pub struct NeChunker {
    titles:        HashSet<&'static str>,
    organizations: HashSet<&'static str>,
    facilities:    HashSet<&'static str>,
    locations:     HashSet<&'static str>,
    gazetteer:     HashSet<&'static str>,
}

impl NeChunker {
    pub fn new() -> Self {
        Self {
            titles:        TITLES.iter().copied().collect(),
            organizations: ORGANIZATION_KEYWORDS.iter().copied().collect(),
            facilities:    FACILITY_KEYWORDS.iter().copied().collect(),
            locations:     LOCATION_KEYWORDS.iter().copied().collect(),
            gazetteer:     GPE_GAZETTEER.iter().copied().collect(),
        }
    }

    pub fn chunk(&self, tagged: Vec<TaggedToken>) -> Vec<Chunk> {
        let mut chunks = Vec::with_capacity(tagged.len());
        let mut tokens = tagged.into_iter().peekable();

        while let Some(token) = tokens.next() {
            if !is_proper_noun(&token) {
                chunks.push(Chunk::Token(token));
                continue;
            }

            // Collect the whole proper-noun run
            let mut run = vec![token];
            while let Some(next) = tokens.next_if(is_proper_noun) {
                run.push(next);
            }

            // Honorifics stay outside the span
            let mut titled = false;
            let mut span   = Vec::with_capacity(run.len());
            for t in run {
                if span.is_empty() && self.is_title(&t.word) {
                    titled = true;
                    chunks.push(Chunk::Token(t));
                } else {
                    span.push(t);
                }
            }

            if span.is_empty() {
                continue;
            }

            let label = if titled { PERSON } else { self.classify(&span) };
            chunks.push(Chunk::entity(label, span));
        }

        chunks
    }

    fn is_title(&self, word: &str) -> bool {
        self.titles.contains(word.to_lowercase().as_str())
    }

    /// Pick the entity label for a proper-noun span
    fn classify(&self, span: &[TaggedToken]) -> &'static str {
        let words: Vec<String> = span
            .iter()
            .map(|t| t.word.trim_end_matches('.').to_lowercase())
            .collect();
        let has_keyword = |set: &HashSet<&'static str>| words.iter().any(|w| set.contains(w.as_str()));

        if has_keyword(&self.organizations) {
            return ORGANIZATION;
        }
        if has_keyword(&self.facilities) {
            return FACILITY;
        }
        if has_keyword(&self.locations) {
            return LOCATION;
        }
        if self.gazetteer.contains(words.join(" ").as_str()) {
            return GPE;
        }
        if span.iter().all(|t| is_acronym(&t.word)) {
            return ORGANIZATION;
        }

        PERSON
    }
}

impl Default for NeChunker {
    fn default() -> Self {
        Self::new()
    }
}

fn is_proper_noun(token: &TaggedToken) -> bool {
    token.tag == "NNP" || token.tag == "NNPS"
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() >= 2 && word.chars().all(|c| c.is_ascii_uppercase())
}
