// ============================================================
// Layer 5 - Sentence Splitter
// ============================================================
// Splits running text into sentences.
//
// A sentence ends at '.', '!' or '?' (a run such as "?!" or
// "..." counts as one terminator), optionally followed by
// closing quotes or brackets, when:
//
//   1. the terminator is followed by whitespace, and
//   2. the next visible character could start a sentence:
//      an uppercase letter, a digit or an opening quote, and
//   3. for a single '.', the word before it is not an
//      abbreviation ("Mr.", "etc.") or an initial ("J.")
//
// End of text always closes the current sentence.
//
// Example:
//   "Mr. Brown ran. John went home."
//   -> ["Mr. Brown ran.", "John went home."]

use std::collections::HashSet;

use crate::nlp::lexicon::ABBREVIATIONS;

/// Sentence-ending punctuation characters
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '…'];

/// Characters that may trail a terminator and still belong to the sentence
const CLOSING_PUNCTUATION: &[char] = &['"', '\'', '”', '’', ')', ']', '}', '»'];

/// Characters that may open a new sentence besides uppercase letters and digits
const OPENING_PUNCTUATION: &[char] = &['"', '\'', '“', '‘', '(', '[', '`', '«'];

pub struct SentenceSplitter {
    abbreviations: HashSet<&'static str>,
}

impl SentenceSplitter {
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Split `text` into trimmed, non-empty sentences in text order
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start     = 0usize;
        let mut i         = 0usize;

        while i < chars.len() {
            if !SENTENCE_TERMINATORS.contains(&chars[i].1) {
                i += 1;
                continue;
            }

            // Swallow the rest of the terminator run, then any closers
            let mut run_end = i + 1;
            while run_end < chars.len() && SENTENCE_TERMINATORS.contains(&chars[run_end].1) {
                run_end += 1;
            }
            let mut end = run_end;
            while end < chars.len() && CLOSING_PUNCTUATION.contains(&chars[end].1) {
                end += 1;
            }

            let single_period = chars[i].1 == '.' && run_end - i == 1;

            if self.is_boundary(text, &chars, i, end, single_period) {
                let byte_end = chars.get(end).map_or(text.len(), |&(b, _)| b);
                push_sentence(&mut sentences, &text[start..byte_end]);
                start = byte_end;
            }

            i = end;
        }

        push_sentence(&mut sentences, &text[start..]);
        sentences
    }

    fn is_boundary(
        &self,
        text:          &str,
        chars:         &[(usize, char)],
        term_idx:      usize,
        after_idx:     usize,
        single_period: bool,
    ) -> bool {
        // Terminator at the very end of the text
        if after_idx >= chars.len() {
            return true;
        }

        // "3.14", "e.g.x", "Yahoo!Mail" are not boundaries
        if !chars[after_idx].1.is_whitespace() {
            return false;
        }

        let next = chars[after_idx..]
            .iter()
            .map(|&(_, c)| c)
            .find(|c| !c.is_whitespace());

        let Some(next) = next else {
            return true;
        };

        let starts_sentence = next.is_uppercase()
            || next.is_ascii_digit()
            || OPENING_PUNCTUATION.contains(&next);
        if !starts_sentence {
            return false;
        }

        if single_period {
            let before = &text[..chars[term_idx].0];
            if self.is_abbreviation(last_word(before)) {
                return false;
            }
        }

        true
    }

    /// True when `word` (the text right before a period) should
    /// not end a sentence
    fn is_abbreviation(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        // Single-letter initial: "J. R. R. Tolkien"
        let mut letters = word.chars();
        if let (Some(c), None) = (letters.next(), letters.next()) {
            return c.is_alphabetic();
        }

        // Dotted forms such as "U.S" or "e.g"
        if word.contains('.') {
            return true;
        }

        self.abbreviations.contains(word.to_lowercase().as_str())
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// The last whitespace-separated word of `text`, without any
/// leading quotes or brackets
fn last_word(text: &str) -> &str {
    text.rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| OPENING_PUNCTUATION.contains(&c))
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        SentenceSplitter::new().split(text)
    }

    #[test]
    fn test_splits_simple_sentences() {
        assert_eq!(
            split("The dog ran. John went home."),
            vec!["The dog ran.", "John went home."]
        );
    }

    #[test]
    fn test_abbreviation_is_not_a_boundary() {
        assert_eq!(
            split("Mr. Brown met Dr. Smith. They talked."),
            vec!["Mr. Brown met Dr. Smith.", "They talked."]
        );
    }

    #[test]
    fn test_initials_are_not_boundaries() {
        assert_eq!(
            split("J. R. Tolkien wrote books. He died."),
            vec!["J. R. Tolkien wrote books.", "He died."]
        );
    }

    #[test]
    fn test_lowercase_continuation_is_not_a_boundary() {
        assert_eq!(split("It cost 3.5 dollars. ok then."), vec!["It cost 3.5 dollars. ok then."]);
    }

    #[test]
    fn test_question_and_exclamation_with_quotes() {
        assert_eq!(
            split("\"Where are you?\" she asked. \"Here!\" he said."),
            vec!["\"Where are you?\" she asked.", "\"Here!\" he said."]
        );
    }

    #[test]
    fn test_terminator_run_counts_once() {
        assert_eq!(split("Wait... What?! No."), vec!["Wait...", "What?!", "No."]);
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        assert_eq!(split("One. Two"), vec!["One.", "Two"]);
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert!(split("").is_empty());
        assert!(split("   ").is_empty());
    }

    #[test]
    fn test_already_tokenized_text() {
        assert_eq!(
            split("The dog ran . John went home ."),
            vec!["The dog ran .", "John went home ."]
        );
    }
}
