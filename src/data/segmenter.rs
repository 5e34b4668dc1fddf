// ============================================================
// Layer 4 - Sentence Segmenter
// ============================================================
// Joins the story lines into one blob and lets the toolkit's
// sentence tokenizer split it again. Sentence boundaries do
// not have to line up with the original line breaks: a line
// may hold several sentences and a sentence may span lines.

use crate::domain::traits::NlpToolkit;

/// Join `lines` with single spaces and split into sentences
pub fn split_in_sentences(lines: &[String], toolkit: &dyn NlpToolkit) -> Vec<String> {
    let text      = lines.join(" ");
    let sentences = toolkit.sent_tokenize(&text);

    tracing::debug!("Segmented {} lines into {} sentences", lines.len(), sentences.len());
    sentences
}
