// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the `prepare` and `deunk` subcommands and their
// flags. Each Args struct converts into the matching Layer 2
// config, so the application layer never sees clap types.

use clap::{Args, Subcommand, ValueEnum};

use crate::application::deunk_use_case::DeunkConfig;
use crate::application::prepare_use_case::PrepareConfig;
use crate::domain::mode::DatasetMode;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build anonymized sentence pairs from a story corpus
    Prepare(PrepareArgs),

    /// Replace <unk> tokens in generated text with the original words
    Deunk(DeunkArgs),
}

/// Target dataset style; picks the quote normalization
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Opening quotes written as '' like the closing ones
    Wikilarge,
    /// Opening quotes kept as ``
    Docaligned,
}

impl From<ModeArg> for DatasetMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Wikilarge  => DatasetMode::Wikilarge,
            ModeArg::Docaligned => DatasetMode::Docaligned,
        }
    }
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Story corpus with "==" / "====" separator lines
    #[arg(long, default_value = "story_corpus.txt")]
    pub input: String,

    /// Where the anonymized sentence pairs are written
    #[arg(long, default_value = "story_corpus.pairs.ne.txt")]
    pub output: String,

    #[arg(long, value_enum, default_value_t = ModeArg::Wikilarge)]
    pub mode: ModeArg,

    /// Optional JSON file with the config and pipeline counts
    #[arg(long)]
    pub report: Option<String>,
}

impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            input:  a.input,
            output: a.output,
            mode:   a.mode.into(),
            report: a.report,
        }
    }
}

#[derive(Args, Debug)]
pub struct DeunkArgs {
    /// File that was fed to the generation model
    #[arg(long)]
    pub original: String,

    /// Model output containing <unk> tokens
    #[arg(long)]
    pub generated: String,

    /// Where the repaired lines are written
    #[arg(long)]
    pub output: String,

    /// Optional JSON file with the config and reproduction counts
    #[arg(long)]
    pub report: Option<String>,
}

impl From<DeunkArgs> for DeunkConfig {
    fn from(a: DeunkArgs) -> Self {
        DeunkConfig {
            original:  a.original,
            generated: a.generated,
            output:    a.output,
            report:    a.report,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_arg_maps_to_dataset_mode() {
        assert_eq!(DatasetMode::from(ModeArg::Wikilarge), DatasetMode::Wikilarge);
        assert_eq!(DatasetMode::from(ModeArg::Docaligned), DatasetMode::Docaligned);
    }

    #[test]
    fn test_prepare_args_into_config() {
        let config: PrepareConfig = PrepareArgs {
            input:  "in.txt".into(),
            output: "out.txt".into(),
            mode:   ModeArg::Docaligned,
            report: Some("r.json".into()),
        }
        .into();
        assert_eq!(config.mode, DatasetMode::Docaligned);
        assert_eq!(config.report.as_deref(), Some("r.json"));
    }
}
