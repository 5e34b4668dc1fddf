// ============================================================
// Layer 6 - Run Reports
// ============================================================
// Writes a small JSON document describing a finished run:
//
//   {
//     "config": { "input": "story_corpus.txt", "mode": "wikilarge", ... },
//     "result": { "sentences": 1204, "pairs": 602, ... }
//   }
//
// Reports are only written when a --report path is given.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// A run's configuration together with what it produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport<C, R> {
    pub config: C,
    pub result: R,
}

impl<C: Serialize, R: Serialize> RunReport<C, R> {
    pub fn new(config: C, result: R) -> Self {
        Self { config, result }
    }

    /// Serialise as pretty-printed JSON to `path`, overwriting it
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        fs::write(path, json)
            .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

        tracing::debug!("Saved run report to '{}'", path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;
    use tempfile::tempdir;

    fn load_report<C: DeserializeOwned, R: DeserializeOwned>(path: &Path) -> RunReport<C, R> {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Cfg {
        input: String,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Counts {
        pairs: usize,
    }

    #[test]
    fn test_save_and_load_report() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("report.json");

        RunReport::new(Cfg { input: "in.txt".into() }, Counts { pairs: 3 })
            .save(&path)
            .unwrap();

        let loaded: RunReport<Cfg, Counts> = load_report(&path);
        assert_eq!(loaded.config, Cfg { input: "in.txt".into() });
        assert_eq!(loaded.result, Counts { pairs: 3 });
    }

    #[test]
    fn test_report_json_layout() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("report.json");
        RunReport::new(Cfg { input: "a".into() }, Counts { pairs: 1 }).save(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["config"]["input"], "a");
        assert_eq!(value["result"]["pairs"], 1);
    }

    #[test]
    fn test_unwritable_report_path_is_an_error() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("report.json");
        assert!(RunReport::new(1u8, 2u8).save(&path).is_err());
    }
}
