// ============================================================
// Layer 4 - Deunk
// ============================================================
// The embellishment model writes <unk> for words outside its
// vocabulary. Its input file still has the real words, and the
// two files are aligned line by line and token by token, so
// each <unk> can be put back from the same position:
//
//   original:  "PERSON@1 saw a quokka ."
//   generated: "PERSON@1 saw a <unk> today ."
//                              ^ position 3
//   repaired:  "PERSON@1 saw a quokka today ."
//
// Both lines are split on single spaces, exactly as they were
// joined upstream. Alignment is checked before any
// substitution: the files must have the same number of lines,
// and every <unk> position must exist in the original line.
// A mismatch is an error naming the line, never a panic.
//
// After repair, each line is compared byte-for-byte with its
// original. The share of identical lines shows how often the
// model just reproduced its input.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder the generation model emits for unknown words
pub const UNK_TOKEN: &str = "<unk>";

/// Outcome of a deunk pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeunkReport {
    /// Number of generated lines processed
    pub lines: usize,

    /// Repaired lines that are byte-identical to their original
    pub identical: usize,

    /// Number of <unk> tokens replaced
    pub substitutions: usize,
}

impl DeunkReport {
    /// identical / lines, or 0.0 for an empty file.
    /// Displayed with a decimal point even when whole ("1.0").
    pub fn reproduction_rate(&self) -> f64 {
        if self.lines == 0 {
            0.0
        } else {
            self.identical as f64 / self.lines as f64
        }
    }
}

impl fmt::Display for DeunkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Correct reproduction: {}/{} = {:?}",
            self.identical,
            self.lines,
            self.reproduction_rate()
        )
    }
}

/// Replace <unk> tokens in `generated` with the token at the
/// same position in `original`. Returns the repaired line and
/// the number of substitutions. `line_no` is 1-based and only
/// used in error messages.
pub fn repair_line(generated: &str, original: &str, line_no: usize) -> Result<(String, usize)> {
    let source: Vec<&str> = original.split(' ').collect();
    let mut out           = Vec::new();
    let mut substitutions = 0usize;

    for (pos, word) in generated.split(' ').enumerate() {
        if word != UNK_TOKEN {
            out.push(word);
            continue;
        }

        let Some(&replacement) = source.get(pos) else {
            bail!(
                "Line {}: {} at token {} but the original line has only {} tokens",
                line_no,
                UNK_TOKEN,
                pos + 1,
                source.len()
            );
        };
        out.push(replacement);
        substitutions += 1;
    }

    Ok((out.join(" "), substitutions))
}

/// Repair every generated line against its original.
/// Fails before touching anything if the line counts differ.
pub fn deunk_lines(original: &[String], generated: &[String]) -> Result<(Vec<String>, DeunkReport)> {
    if original.len() != generated.len() {
        bail!(
            "Line count mismatch: original has {} lines, generated has {}",
            original.len(),
            generated.len()
        );
    }

    let mut repaired = Vec::with_capacity(generated.len());
    let mut report   = DeunkReport {
        lines:         generated.len(),
        identical:     0,
        substitutions: 0,
    };

    for (i, (line, orig)) in generated.iter().zip(original).enumerate() {
        let (line, n) = repair_line(line, orig, i + 1)?;

        if line == *orig {
            report.identical += 1;
        }
        report.substitutions += n;
        repaired.push(line);
    }

    Ok((repaired, report))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_replaces_unk_from_same_position() {
        let (line, n) = repair_line("the <unk> sat on <unk>", "the cat sat on mats", 1).unwrap();
        assert_eq!(line, "the cat sat on mats");
        assert_eq!(n, 2);
    }

    #[test]
    fn test_unk_must_match_exactly() {
        let (line, n) = repair_line("<unk>. <UNK> x<unk>", "a b c", 1).unwrap();
        assert_eq!(line, "<unk>. <UNK> x<unk>");
        assert_eq!(n, 0);
    }

    #[test]
    fn test_unk_past_original_length_is_an_error() {
        let err = repair_line("a b <unk>", "a b", 7).unwrap_err();
        assert!(err.to_string().contains("Line 7"));
    }

    #[test]
    fn test_line_count_mismatch_is_an_error() {
        let err = deunk_lines(&owned(&["a", "b"]), &owned(&["a"])).unwrap_err();
        assert!(err.to_string().contains("mismatch"));
    }

    #[test]
    fn test_report_counts_identical_lines() {
        let orig = owned(&["a b c", "d e f", "g h"]);
        let generated = owned(&["a <unk> c", "d x f", "g h"]);

        let (lines, report) = deunk_lines(&orig, &generated).unwrap();
        assert_eq!(lines, owned(&["a b c", "d x f", "g h"]));
        assert_eq!(report.identical, 2);
        assert_eq!(report.substitutions, 1);
        assert!((report.reproduction_rate() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_without_unk_output_equals_generated() {
        let orig = owned(&["a b", "c d", "e f", "g h"]);
        let generated = owned(&["a b", "c x", "e f", "y h z"]);

        let (lines, report) = deunk_lines(&orig, &generated).unwrap();
        assert_eq!(lines, generated);
        assert_eq!(report.substitutions, 0);
        assert_eq!(report.reproduction_rate(), 0.5);
    }

    #[test]
    fn test_empty_files_give_zero_rate() {
        let (lines, report) = deunk_lines(&[], &[]).unwrap();
        assert!(lines.is_empty());
        assert_eq!(report.reproduction_rate(), 0.0);
        assert_eq!(report.to_string(), "Correct reproduction: 0/0 = 0.0");
    }

    #[test]
    fn test_report_display() {
        let report = DeunkReport { lines: 4, identical: 1, substitutions: 3 };
        assert_eq!(report.to_string(), "Correct reproduction: 1/4 = 0.25");
    }

    #[test]
    fn test_report_display_keeps_decimal_point() {
        let all  = DeunkReport { lines: 3, identical: 3, substitutions: 0 };
        let none = DeunkReport { lines: 3, identical: 0, substitutions: 2 };
        assert_eq!(all.to_string(), "Correct reproduction: 3/3 = 1.0");
        assert_eq!(none.to_string(), "Correct reproduction: 0/3 = 0.0");
    }
}
