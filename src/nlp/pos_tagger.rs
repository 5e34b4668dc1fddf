// ============================================================
// Layer 5 - Part-of-Speech Tagger
// ============================================================
// Assigns Penn Treebank tags to tokens. The NE chunker only
// really cares about one distinction: is this token a proper
// noun (NNP) or not. The rest of the tag set is filled in so
// the output reads like a normal tagger's.
//
// Decision order for each token:
//   1. punctuation and symbols      "." -> .   "``" -> ``
//   2. numbers                      "1,000" -> CD
//   3. honorifics                   "Mr." -> NNP
//   4. capitalized mid-sentence     "New" in "to New York" -> NNP
//                                   ("I" and all-caps words excepted)
//   5. lexicon lookup (lowercased)  "the" -> DT, "Later" -> RB
//   6. capitalized sentence-initial, by the first rule that fires:
//        same word lowercase elsewhere     "Dogs ... the dogs" -> NNS
//        same word capitalized mid-sentence elsewhere        -> NNP
//        verb/adverb suffix                "Walking" -> VBG
//        plural noun shape                 "Cats" -> NNS
//        otherwise                         "John" -> NNP
//   7. suffix rules                 "-ing" -> VBG, "-ly" -> RB
//   8. fallback                     NN
//
// A token is sentence-initial when it is the first token, or
// follows a sentence terminator. Quotes and brackets in front
// of it keep it initial, and so does a quote opening speech
// after a comma or colon ("he said , `` Go").

use std::collections::{HashMap, HashSet};

use crate::domain::chunk::TaggedToken;
use crate::nlp::lexicon::{LEXICON, TITLES};

pub struct PosTagger {
    lexicon: HashMap<&'static str, &'static str>,
    titles:  HashSet<&'static str>,
}

/// What the rest of the token list says about a word's casing
#[derive(Default)]
struct Orthography {
    lowercase:       HashSet<String>,
    capitalized_mid: HashSet<String>,
}

impl Orthography {
    fn collect(tokens: &[String], initial: &[bool]) -> Self {
        let mut ortho = Self::default();
        for (token, &is_initial) in tokens.iter().zip(initial) {
            if token.chars().next().is_some_and(char::is_lowercase) {
                ortho.lowercase.insert(token.clone());
            } else if is_capitalized(token) && !is_initial {
                ortho.capitalized_mid.insert(token.to_lowercase());
            }
        }
        ortho
    }
}

impl PosTagger {
    pub fn new() -> Self {
        let mut lexicon = HashMap::with_capacity(LEXICON.len());
        for &(word, tag) in LEXICON {
            // first entry wins
            lexicon.entry(word).or_insert(tag);
        }

        Self {
            lexicon,
            titles: TITLES.iter().copied().collect(),
        }
    }

    /// Tag every token in order
    pub fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let initial = sentence_initial_flags(tokens);
        let ortho   = Orthography::collect(tokens, &initial);

        tokens
            .iter()
            .zip(&initial)
            .map(|(token, &is_initial)| {
                TaggedToken::new(token.as_str(), self.tag_word(token, is_initial, &ortho))
            })
            .collect()
    }

    /// True when `word` is an honorific such as "Mr." or "Sir"
    pub fn is_title(&self, word: &str) -> bool {
        self.titles.contains(word.to_lowercase().as_str())
    }

    fn tag_word(&self, word: &str, sentence_start: bool, ortho: &Orthography) -> String {
        if let Some(tag) = punctuation_tag(word) {
            return tag.to_string();
        }

        if is_number(word) {
            return "CD".to_string();
        }

        if self.is_title(word) && is_capitalized(word) {
            return "NNP".to_string();
        }

        if !sentence_start && is_capitalized(word) && word != "I" && !is_all_caps(word) {
            return "NNP".to_string();
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(lower.as_str()) {
            return tag.to_string();
        }

        if is_capitalized(word) {
            if !sentence_start {
                return "NNP".to_string();
            }
            if ortho.lowercase.contains(&lower) {
                return suffix_tag(&lower).to_string();
            }
            if ortho.capitalized_mid.contains(&lower) {
                return "NNP".to_string();
            }
            if let Some(tag) = verb_or_adverb_suffix(&lower) {
                return tag.to_string();
            }
            if is_plural_noun(&lower) {
                return "NNS".to_string();
            }
            return "NNP".to_string();
        }

        suffix_tag(&lower).to_string()
    }
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::new()
    }
}

/// One flag per token: does it open a sentence
fn sentence_initial_flags(tokens: &[String]) -> Vec<bool> {
    let mut flags = Vec::with_capacity(tokens.len());
    let mut start = true;
    let mut prev  = None;

    for token in tokens {
        flags.push(start);

        let tag = punctuation_tag(token);
        start = match tag {
            Some(".")                  => true,
            Some(t) if is_quote_tag(t) => start || matches!(prev, Some(",") | Some(":")),
            _                          => false,
        };
        prev = tag;
    }

    flags
}

fn punctuation_tag(word: &str) -> Option<&'static str> {
    let tag = match word {
        "." | "!" | "?" | "?!" | "!?"                => ".",
        ","                                          => ",",
        ":" | ";" | "--" | "-" | "..." | "…"         => ":",
        "``" | "“" | "‘" | "«"                       => "``",
        "''" | "”" | "’" | "'" | "»"                 => "''",
        "(" | "[" | "{" | "-LRB-" | "-LSB-" | "-LCB-" => "(",
        ")" | "]" | "}" | "-RRB-" | "-RSB-" | "-RCB-" => ")",
        "$"                                          => "$",
        "#"                                          => "#",
        "%" | "@" | "*"                              => "SYM",
        _ => return None,
    };
    Some(tag)
}

fn is_quote_tag(tag: &str) -> bool {
    tag == "``" || tag == "''" || tag == "("
}

fn is_number(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-' | '/' | ':'))
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_all_caps(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() > 1
        && !word.chars().any(char::is_lowercase)
}

/// "cats", "dogs", "birds", but not "james", "thomas", "chris"
fn is_plural_noun(lower: &str) -> bool {
    let mut rev = lower.chars().rev();
    lower.len() > 3
        && rev.next() == Some('s')
        && rev.next().is_some_and(|c| c.is_alphabetic() && !"aeius".contains(c))
}

fn verb_or_adverb_suffix(lower: &str) -> Option<&'static str> {
    if lower.len() > 4 && lower.ends_with("ing") {
        Some("VBG")
    } else if lower.len() > 3 && lower.ends_with("ed") {
        Some("VBD")
    } else if lower.len() > 3 && lower.ends_with("ly") {
        Some("RB")
    } else {
        None
    }
}

fn suffix_tag(lower: &str) -> &'static str {
    if let Some(tag) = verb_or_adverb_suffix(lower) {
        return tag;
    }

    if lower.len() > 4
        && ["ous", "ful", "ive", "able", "ible", "less", "ish"]
            .iter()
            .any(|s| lower.ends_with(s))
    {
        "JJ"
    } else if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
        "NNS"
    } else {
        "NN"
    }
}
