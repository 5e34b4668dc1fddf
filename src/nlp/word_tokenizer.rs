// ============================================================
// Layer 5 - Treebank Word Tokenizer
// ============================================================
// Splits one sentence into word and punctuation tokens using
// Penn Treebank conventions, which is what the downstream
// training corpora were tokenized with.
//
// The tokenizer is a fixed sequence of regex rewrites that
// pad token boundaries with spaces, followed by a whitespace
// split. Rule groups run in this order:
//
//   1. starting quotes  "Hi  -> `` Hi
//   2. punctuation      ran. -> ran .   a,b -> a , b
//   3. brackets         (x)  -> ( x )
//   4. double dashes    a--b -> a -- b
//   5. ending quotes    hi"  -> hi ''   don't -> do n't
//   6. contractions     cannot -> can not
//
// Only the final period of a sentence is split off, so
// "Mr." and "U.S." stay single tokens mid-sentence. A bare
// '' is always read as a closing quote, which keeps already
// tokenized text stable when it is tokenized again. Callers
// tokenizing running text should split it into sentences
// first (RuleBasedToolkit does this).

use anyhow::{Context, Result};
use regex::Regex;

/// A compiled pattern and its `$n` replacement template
struct Rule {
    pattern:     Regex,
    replacement: &'static str,
}

impl Rule {
    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

const STARTING_QUOTES: &[(&str, &str)] = &[
    (r"([«“‘„]|[`]+)", " ${1} "),
    (r#"^""#, "``"),
    (r"(``)", " ${1} "),
    (r#"([ (\[{<])(")"#, "${1} `` "),
];

const PUNCTUATION: &[(&str, &str)] = &[
    (r"([:,])([^\d])", " ${1} ${2}"),
    (r"([:,])$", " ${1} "),
    (r"\.{2,}", " ${0} "),
    (r"[;@#$%&]", " ${0} "),
    (r#"([^\.])(\.)([\]\)}>"']*)\s*$"#, "${1} ${2}${3} "),
    (r"[?!]", " ${0} "),
    (r"([^'])' ", "${1} ' "),
    (r"[*]", " ${0} "),
];

const BRACKETS: &[(&str, &str)] = &[
    (r"[\]\[\(\)\{\}<>]", " ${0} "),
    (r"--", " -- "),
];

const ENDING_QUOTES: &[(&str, &str)] = &[
    (r"([»”’])", " ${1} "),
    (r"''", " '' "),
    (r#"""#, " '' "),
    (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
    (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
];

const CONTRACTIONS: &[(&str, &str)] = &[
    (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
    (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
    (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
    (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
    (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
    (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
    (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
    (r"(?i)\b(wan)(na)\s", " ${1} ${2} "),
    (r"(?i) ('t)(is)\b", " ${1} ${2} "),
    (r"(?i) ('t)(was)\b", " ${1} ${2} "),
];

pub struct TreebankWordTokenizer {
    starting_quotes: Vec<Rule>,
    punctuation:     Vec<Rule>,
    brackets:        Vec<Rule>,
    ending_quotes:   Vec<Rule>,
    contractions:    Vec<Rule>,
}

impl TreebankWordTokenizer {
    /// Compile all rewrite rules
    pub fn new() -> Result<Self> {
        Ok(Self {
            starting_quotes: compile(STARTING_QUOTES)?,
            punctuation:     compile(PUNCTUATION)?,
            brackets:        compile(BRACKETS)?,
            ending_quotes:   compile(ENDING_QUOTES)?,
            contractions:    compile(CONTRACTIONS)?,
        })
    }

    /// Tokenize a single sentence
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let mut text = sentence.to_string();

        for rule in self.starting_quotes.iter().chain(&self.punctuation).chain(&self.brackets) {
            text = rule.apply(&text);
        }

        // Ending-quote and clitic rules look for a following space
        text = format!(" {text} ");

        for rule in self.ending_quotes.iter().chain(&self.contractions) {
            text = rule.apply(&text);
        }

        text.split_whitespace().map(str::to_string).collect()
    }
}

fn compile(rules: &[(&str, &'static str)]) -> Result<Vec<Rule>> {
    rules
        .iter()
        .map(|&(pattern, replacement)| {
            let pattern = Regex::new(pattern)
                .with_context(|| format!("Invalid tokenizer pattern '{pattern}'"))?;
            Ok(Rule { pattern, replacement })
        })
        .collect()
}
