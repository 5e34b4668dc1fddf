// ============================================================
// Layer 4 - Writer
// ============================================================
// Writes the final lines to disk, one per line. The pipeline
// output always ends every line in '\n'. Deunk instead mirrors
// the layout of the file it repairs (CRLF or LF, with or
// without a final newline), so an untouched file comes back
// byte for byte.
//
// The whole output is built in memory and written in one
// call, replacing any existing file at that path. An
// unwritable path is an error; parent directories are not
// created.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// How the lines of a text file are terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLayout {
    pub crlf:          bool,
    pub final_newline: bool,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self { crlf: false, final_newline: true }
    }
}

impl LineLayout {
    /// Layout of `text`, judged by its first line break
    pub fn detect(text: &str) -> Self {
        let crlf = text
            .find('\n')
            .is_some_and(|end| text[..end].ends_with('\r'));

        Self {
            crlf,
            final_newline: text.is_empty() || text.ends_with('\n'),
        }
    }

    fn terminator(self) -> &'static str {
        if self.crlf { "\r\n" } else { "\n" }
    }
}

/// Write `lines` to `path`, newline-terminated, overwriting it
pub fn save_lines<S: AsRef<str>>(lines: &[S], path: &Path) -> Result<()> {
    save_lines_as(lines, path, LineLayout::default())
}

/// Write `lines` to `path` using the given line layout
pub fn save_lines_as<S: AsRef<str>>(lines: &[S], path: &Path, layout: LineLayout) -> Result<()> {
    let terminator = layout.terminator();
    let mut out    = lines
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<&str>>()
        .join(terminator);

    if layout.final_newline && !lines.is_empty() {
        out.push_str(terminator);
    }

    fs::write(path, out)
        .with_context(|| format!("Cannot write '{}'", path.display()))?;

    tracing::info!("Wrote {} lines to '{}'", lines.len(), path.display());
    Ok(())
}
