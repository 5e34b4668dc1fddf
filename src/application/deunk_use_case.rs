// ============================================================
// Layer 2 - DeunkUseCase
// ============================================================
// Puts real words back in place of <unk> in generated output.
//
//   Step 1: Read original and generated files  (Layer 4 - loader)
//   Step 2: Repair line by line                (Layer 4 - deunk)
//   Step 3: Write repaired file in the generated
//           file's line layout                 (Layer 4 - writer)
//   Step 4: Save run report, if asked          (Layer 6 - report)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{
    deunk::{deunk_lines, DeunkReport},
    loader::{read_lines, read_lines_with_layout},
    writer::save_lines_as,
};
use crate::infra::report::RunReport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeunkConfig {
    /// Model input, one anonymized pair per line
    pub original:  String,
    /// Model output, aligned line by line with `original`
    pub generated: String,
    pub output:    String,
    pub report:    Option<String>,
}

pub struct DeunkUseCase {
    config: DeunkConfig,
}

impl DeunkUseCase {
    pub fn new(config: DeunkConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<DeunkReport> {
        let cfg = &self.config;

        let original  = read_lines(Path::new(&cfg.original))?;
        let (generated, layout) = read_lines_with_layout(Path::new(&cfg.generated))?;
        tracing::info!(
            "Deunking {} generated lines against '{}'",
            generated.len(),
            cfg.original
        );

        let (repaired, report) = deunk_lines(&original, &generated)?;
        save_lines_as(&repaired, Path::new(&cfg.output), layout)?;

        if let Some(path) = &cfg.report {
            RunReport::new(cfg, &report).save(Path::new(path))?;
        }

        tracing::info!("{} <unk> tokens replaced", report.substitutions);
        Ok(report)
    }
}
