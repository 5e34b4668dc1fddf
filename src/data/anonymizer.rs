// ============================================================
// Layer 4 - Entity Anonymizer
// ============================================================
// Replaces every named entity with a CATEGORY@N placeholder.
//
// Per sentence:
//   1. word_tokenize -> pos_tag -> ne_chunk via the toolkit
//   2. start a fresh PlaceholderRegistry (no memory of any
//      earlier sentence)
//   3. plain tokens pass through unchanged
//   4. an entity span is keyed by its FIRST token, lowercased,
//      plus its category (GPE written as LOCATION); a new key
//      gets the next ordinal for that category, a repeated key
//      reuses its ordinal
//   5. join the output tokens with single spaces
//
// Example:
//   "John met Mary . John left for Paris ."
//   -> "PERSON@1 met PERSON@2 . PERSON@1 left for LOCATION@1 ."
//
// An entity span with no tokens means the toolkit broke its
// contract; that aborts the run with an error.

use anyhow::{bail, Result};

use crate::domain::chunk::Chunk;
use crate::domain::placeholder::PlaceholderRegistry;
use crate::domain::traits::NlpToolkit;

/// One sentence after anonymization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymizedSentence {
    pub tokens: Vec<String>,

    /// Number of entity occurrences replaced in this sentence
    pub replaced: usize,
}

impl AnonymizedSentence {
    pub fn to_line(&self) -> String {
        self.tokens.join(" ")
    }
}

pub struct EntityAnonymizer<'a> {
    toolkit: &'a dyn NlpToolkit,
}

impl<'a> EntityAnonymizer<'a> {
    pub fn new(toolkit: &'a dyn NlpToolkit) -> Self {
        Self { toolkit }
    }

    /// Anonymize every sentence independently, in order
    pub fn anonymize_all(&self, sentences: &[String]) -> Result<Vec<AnonymizedSentence>> {
        let out = sentences
            .iter()
            .map(|s| self.anonymize(s))
            .collect::<Result<Vec<_>>>()?;

        let replaced: usize = out.iter().map(|s| s.replaced).sum();
        tracing::info!("Anonymized {} entity occurrences in {} lines", replaced, out.len());
        Ok(out)
    }

    /// Anonymize a single sentence
    pub fn anonymize(&self, sentence: &str) -> Result<AnonymizedSentence> {
        let tokens = self.toolkit.word_tokenize(sentence);
        let chunks = self.toolkit.ne_chunk(self.toolkit.pos_tag(&tokens));

        // Ordinals are scoped to this sentence only
        let mut registry = PlaceholderRegistry::new();
        let mut out      = Vec::with_capacity(chunks.len());
        let mut replaced = 0usize;

        for chunk in chunks {
            match &chunk {
                Chunk::Token(token) => out.push(token.word.clone()),

                Chunk::Entity { label, tokens } => {
                    let Some(first) = tokens.first() else {
                        bail!(
                            "Malformed '{}' entity chunk with no tokens in sentence: {}",
                            label,
                            sentence
                        );
                    };

                    let placeholder = registry.placeholder(&first.word, label);
                    tracing::trace!("'{}' -> {}", chunk.words().join(" "), placeholder);
                    out.push(placeholder.to_string());
                    replaced += 1;
                }
            }
        }

        if replaced > 0 {
            tracing::trace!(
                "{} occurrences of {} distinct entities",
                replaced,
                registry.distinct_entities()
            );
        }

        Ok(AnonymizedSentence { tokens: out, replaced })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chunk::TaggedToken;
    use crate::nlp::RuleBasedToolkit;

    /// Toolkit that ignores its input and replays fixed chunks.
    /// Each sentence text is looked up by exact match.
    struct StubToolkit {
        script: Vec<(&'static str, Vec<Chunk>)>,
    }

    impl NlpToolkit for StubToolkit {
        fn sent_tokenize(&self, text: &str) -> Vec<String> {
            vec![text.to_string()]
        }

        fn word_tokenize(&self, text: &str) -> Vec<String> {
            vec![text.to_string()]
        }

        fn pos_tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
            tokens.iter().map(|t| TaggedToken::new(t.as_str(), "KEY")).collect()
        }

        fn ne_chunk(&self, tagged: Vec<TaggedToken>) -> Vec<Chunk> {
            let key = &tagged[0].word;
            self.script
                .iter()
                .find(|(s, _)| s == key)
                .map(|(_, chunks)| chunks.clone())
                .unwrap_or_default()
        }
    }

    fn tok(w: &str) -> Chunk {
        Chunk::Token(TaggedToken::new(w, "NN"))
    }

    fn ent(label: &str, words: &[&str]) -> Chunk {
        Chunk::entity(label, words.iter().map(|w| TaggedToken::new(*w, "NNP")).collect())
    }

    #[test]
    fn test_same_entity_same_placeholder_within_sentence() {
        let stub = StubToolkit {
            script: vec![(
                "s1",
                vec![ent("PERSON", &["John"]), tok("met"), ent("PERSON", &["Mary"]),
                     tok("and"), ent("PERSON", &["JOHN"])],
            )],
        };
        let out = EntityAnonymizer::new(&stub).anonymize("s1").unwrap();
        assert_eq!(out.to_line(), "PERSON@1 met PERSON@2 and PERSON@1");
        assert_eq!(out.replaced, 3);
    }

    #[test]
    fn test_gpe_is_written_as_location() {
        let stub = StubToolkit {
            script: vec![(
                "s1",
                vec![tok("in"), ent("GPE", &["Paris"]), tok("and"),
                     ent("LOCATION", &["Alps"]), tok("with"), ent("ORGANIZATION", &["Acme"])],
            )],
        };
        let out = EntityAnonymizer::new(&stub).anonymize("s1").unwrap();
        assert_eq!(out.to_line(), "in LOCATION@1 and LOCATION@2 with ORGANIZATION@1");
    }

    #[test]
    fn test_surface_key_is_first_token_only() {
        let stub = StubToolkit {
            script: vec![(
                "s1",
                vec![ent("PERSON", &["John", "Smith"]), tok("and"), ent("PERSON", &["John", "Doe"])],
            )],
        };
        let out = EntityAnonymizer::new(&stub).anonymize("s1").unwrap();
        assert_eq!(out.to_line(), "PERSON@1 and PERSON@1");
    }

    #[test]
    fn test_ordinals_reset_between_sentences() {
        let stub = StubToolkit {
            script: vec![
                ("s1", vec![ent("PERSON", &["Mary"]), tok("ran")]),
                ("s2", vec![ent("PERSON", &["John"]), tok("and"), ent("PERSON", &["Mary"])]),
            ],
        };
        let out = EntityAnonymizer::new(&stub)
            .anonymize_all(&["s1".to_string(), "s2".to_string()])
            .unwrap();
        assert_eq!(out[0].to_line(), "PERSON@1 ran");
        assert_eq!(out[1].to_line(), "PERSON@1 and PERSON@2");
    }

    #[test]
    fn test_empty_entity_chunk_is_an_error() {
        let stub = StubToolkit {
            script: vec![("s1", vec![tok("a"), Chunk::entity("PERSON", Vec::new())])],
        };
        let err = EntityAnonymizer::new(&stub).anonymize("s1").unwrap_err();
        assert!(err.to_string().contains("Malformed"));
    }

    #[test]
    fn test_end_to_end_with_rule_based_toolkit() {
        let tk  = RuleBasedToolkit::new().unwrap();
        let out = EntityAnonymizer::new(&tk)
            .anonymize("The dog ran . John went home .")
            .unwrap();
        assert_eq!(out.to_line(), "The dog ran . PERSON@1 went home .");
        assert_eq!(out.replaced, 1);
    }

    #[test]
    fn test_rule_based_repeated_names_and_places() {
        let tk  = RuleBasedToolkit::new().unwrap();
        let out = EntityAnonymizer::new(&tk)
            .anonymize("John met Mary in Paris . John left .")
            .unwrap();
        assert_eq!(
            out.to_line(),
            "PERSON@1 met PERSON@2 in LOCATION@1 . PERSON@1 left ."
        );
    }

    #[test]
    fn test_rule_based_multi_word_place() {
        let tk = RuleBasedToolkit::new().unwrap();
        let anonymizer = EntityAnonymizer::new(&tk);

        assert_eq!(
            anonymizer.anonymize("We flew to New York .").unwrap().to_line(),
            "We flew to LOCATION@1 ."
        );
        assert_eq!(
            anonymizer
                .anonymize("Mr. Smith met Dr. Jones in New York .")
                .unwrap()
                .to_line(),
            "Mr. PERSON@1 met Dr. PERSON@2 in LOCATION@1 ."
        );
    }

    #[test]
    fn test_rule_based_sentence_initial_word_stays_outside_name() {
        let tk  = RuleBasedToolkit::new().unwrap();
        let out = EntityAnonymizer::new(&tk)
            .anonymize("Later Tom came back and Tom smiled .")
            .unwrap();
        assert_eq!(out.to_line(), "Later PERSON@1 came back and PERSON@1 smiled .");
    }

    #[test]
    fn test_rule_based_sentence_initial_common_words_untouched() {
        let tk = RuleBasedToolkit::new().unwrap();
        let anonymizer = EntityAnonymizer::new(&tk);

        for line in [
            "Everyone laughed . Nobody came .",
            "Dogs bark at night . Cats sleep all day .",
            "Yesterday it rained .",
        ] {
            let out = anonymizer.anonymize(line).unwrap();
            assert_eq!(out.to_line(), line);
            assert_eq!(out.replaced, 0);
        }
    }

    #[test]
    fn test_non_entity_tokens_untouched() {
        let tk   = RuleBasedToolkit::new().unwrap();
        let line = "the dog -LRB- old -RRB- said '' hi '' .";
        let out  = EntityAnonymizer::new(&tk).anonymize(line).unwrap();
        assert_eq!(out.to_line(), line);
        assert_eq!(out.replaced, 0);
    }
}
