// ============================================================
// Layer 2 - PrepareUseCase
// ============================================================
// Runs the full corpus pipeline in order:
//
//   Step 1: Read corpus, strip separators   (Layer 4 - loader)
//   Step 2: Split into sentences            (Layer 4 - segmenter)
//   Step 3: Tokenize + normalize            (Layer 4 - tokenizer)
//   Step 4: Pair consecutive sentences      (Layer 4 - pairer)
//   Step 5: Anonymize named entities        (Layer 4 - anonymizer)
//   Step 6: Write output                    (Layer 4 - writer)
//   Step 7: Save run report, if asked       (Layer 6 - report)
//
// Any failure stops the run; no partial output is written.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{
    anonymizer::EntityAnonymizer,
    loader::CorpusReader,
    pairer::{create_sent_pairs, pair_lines},
    segmenter::split_in_sentences,
    tokenizer::SentenceTokenizer,
    writer::save_lines,
};
use crate::domain::mode::DatasetMode;
use crate::domain::traits::{CorpusSource, NlpToolkit};
use crate::infra::report::RunReport;
use crate::nlp::RuleBasedToolkit;

// ─── Configuration ───────────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub input:  String,
    pub output: String,
    pub mode:   DatasetMode,
    pub report: Option<String>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            input:  "story_corpus.txt".to_string(),
            output: "story_corpus.pairs.ne.txt".to_string(),
            mode:   DatasetMode::Wikilarge,
            report: None,
        }
    }
}

/// Counts collected along the way, logged and optionally saved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    pub story_lines: usize,
    pub sentences:   usize,
    pub pairs:       usize,
    pub entities:    usize,
}

// ─── PrepareUseCase ──────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Execute the whole pipeline end to end
    pub fn execute(&self) -> Result<PipelineStats> {
        let cfg = &self.config;
        tracing::info!("Preparing '{}' in {} mode", cfg.input, cfg.mode);

        let reader  = CorpusReader::new(&cfg.input);
        let toolkit = RuleBasedToolkit::new()?;

        let (lines, stats) = run_pipeline(&reader, &toolkit, cfg.mode)?;
        save_lines(&lines, Path::new(&cfg.output))?;

        if let Some(report) = &cfg.report {
            RunReport::new(cfg, &stats).save(Path::new(report))?;
        }

        tracing::info!(
            "Done: {} story lines, {} sentences, {} pairs, {} entities replaced",
            stats.story_lines,
            stats.sentences,
            stats.pairs,
            stats.entities
        );
        Ok(stats)
    }
}

/// Steps 1 to 5: everything except writing. Returns the
/// output lines in order together with the run's counts.
pub fn run_pipeline(
    source:  &dyn CorpusSource,
    toolkit: &dyn NlpToolkit,
    mode:    DatasetMode,
) -> Result<(Vec<String>, PipelineStats)> {
    // ── Step 1: Read corpus ──────────────────────────────────────────────────
    let lines = source.load_lines()?;

    // ── Step 2: Sentence segmentation ────────────────────────────────────────
    let sentences = split_in_sentences(&lines, toolkit);

    // ── Step 3: Tokenize and normalize brackets / quotes ─────────────────────
    let tokenized = SentenceTokenizer::new(toolkit, mode).tokenize_all(&sentences);

    // ── Step 4: Pair consecutive sentences ───────────────────────────────────
    let pairs = pair_lines(&create_sent_pairs(&tokenized));

    // ── Step 5: Anonymize named entities per pair ────────────────────────────
    let anonymized = EntityAnonymizer::new(toolkit).anonymize_all(&pairs)?;

    let stats = PipelineStats {
        story_lines: lines.len(),
        sentences:   sentences.len(),
        pairs:       pairs.len(),
        entities:    anonymized.iter().map(|s| s.replaced).sum(),
    };

    let output = anonymized.iter().map(|s| s.to_line()).collect();
    Ok((output, stats))
}
