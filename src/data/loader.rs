// ============================================================
// Layer 4 - Corpus Reader
// ============================================================
// Reads the raw story corpus from a plain-text file.
//
// The corpus interleaves story text with marker lines:
//
//   == The Fox and the Crow ==      <- story separator
//   A fox saw a crow in a tree.
//   She wanted its cheese.
//   ====                            <- system separator
//
// Any line starting with "==" or "====" is structural and is
// dropped; every other line is story text and is kept in its
// original order. A missing or unreadable file is an error
// that carries the path, and nothing is retried.

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::data::writer::LineLayout;
use crate::domain::traits::CorpusSource;

/// Prefix of lines that separate stories
pub const STORY_SEPARATOR: &str = "==";

/// Prefix of lines that separate system sections
pub const SYSTEM_SEPARATOR: &str = "====";

/// Reads a newline-delimited corpus file and strips separators.
/// Implements the CorpusSource trait from Layer 3.
pub struct CorpusReader {
    path: PathBuf,
}

impl CorpusReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for CorpusReader {
    fn load_lines(&self) -> Result<Vec<String>> {
        tracing::info!("Reading in: {}", self.path.display());

        let raw   = read_lines(&self.path)?;
        let total = raw.len();
        let kept  = strip_separators(raw);

        tracing::debug!(
            "Kept {} of {} lines ({} separators dropped)",
            kept.len(),
            total,
            total - kept.len()
        );
        Ok(kept)
    }
}

/// True for story and system separator lines
pub fn is_separator(line: &str) -> bool {
    line.starts_with(STORY_SEPARATOR) || line.starts_with(SYSTEM_SEPARATOR)
}

/// Drop separator lines, keeping the rest in order
pub fn strip_separators(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|l| !is_separator(l)).collect()
}

/// Read every line of a text file, without line terminators
/// and without dropping separators. Shared with deunk.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    read_lines_with_layout(path).map(|(lines, _)| lines)
}

/// `read_lines`, plus how the file terminated its lines
pub fn read_lines_with_layout(path: &Path) -> Result<(Vec<String>, LineLayout)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let lines = text.lines().map(str::to_string).collect();
    Ok((lines, LineLayout::detect(&text)))
}
