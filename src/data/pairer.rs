// ============================================================
// Layer 4 - Sentence Pairer
// ============================================================
// Groups consecutive sentences into non-overlapping pairs:
//
//   [s0, s1, s2, s3, s4]
//     -> (s0, s1), (s2, s3), (s4, "")
//
// Odd indices never start a pair. With an odd count the last
// sentence is paired with an empty string instead of being
// dropped, so every sentence lands in exactly one pair and
// the result always has ceil(L / 2) entries.

use crate::domain::sentence_pair::SentencePair;

/// Pair sentences 0+1, 2+3, ... padding a trailing one with ""
pub fn create_sent_pairs(sentences: &[String]) -> Vec<SentencePair> {
    let pairs: Vec<SentencePair> = sentences
        .chunks(2)
        .map(|window| {
            let second = window.get(1).map_or("", String::as_str);
            SentencePair::new(window[0].as_str(), second)
        })
        .collect();

    if pairs.last().is_some_and(SentencePair::is_padded) {
        tracing::debug!("Odd sentence count; last pair padded with an empty sentence");
    }
    tracing::debug!("Built {} sentence pairs from {} sentences", pairs.len(), sentences.len());
    pairs
}

/// Render pairs as training lines ("first second")
pub fn pair_lines(pairs: &[SentencePair]) -> Vec<String> {
    pairs.iter().map(SentencePair::to_line).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("s{i}")).collect()
    }

    #[test]
    fn test_even_count_pairs_everything() {
        let pairs = create_sent_pairs(&sentences(4));
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], SentencePair::new("s0", "s1"));
        assert_eq!(pairs[1], SentencePair::new("s2", "s3"));
        assert!(pairs.iter().all(|p| !p.is_padded()));
    }

    #[test]
    fn test_odd_count_pads_last_sentence() {
        let pairs = create_sent_pairs(&sentences(5));
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], SentencePair::new("s4", ""));
        assert_eq!(pairs.iter().filter(|p| p.is_padded()).count(), 1);
    }

    #[test]
    fn test_pair_count_is_ceiling_of_half() {
        for n in 0..12 {
            assert_eq!(create_sent_pairs(&sentences(n)).len(), (n + 1) / 2);
        }
    }

    #[test]
    fn test_every_sentence_used_exactly_once() {
        let input = sentences(7);
        let flat: Vec<String> = create_sent_pairs(&input)
            .into_iter()
            .flat_map(|p| [p.first, p.second])
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(flat, input);
    }

    #[test]
    fn test_pair_lines_join_with_space() {
        let lines = pair_lines(&create_sent_pairs(&sentences(3)));
        assert_eq!(lines, vec!["s0 s1".to_string(), "s2 ".to_string()]);
    }

    #[test]
    fn test_empty_input() {
        assert!(create_sent_pairs(&[]).is_empty());
    }
}
