// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and hands off to
// Layer 2. Nothing here touches the corpus directly.
//
// Two commands are supported:
//   1. `prepare` - story corpus -> anonymized sentence pairs
//   2. `deunk`   - restore <unk> tokens in generated output

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DeunkArgs, PrepareArgs};

#[derive(Parser, Debug)]
#[command(
    name = "story-corpus-prep",
    version = "0.1.0",
    about = "Turn a story corpus into anonymized sentence pairs, and repair <unk> tokens in model output."
)]
pub struct Cli {
    /// The subcommand to run (prepare or deunk)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route to the matching use case; the CLI layer never computes
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Deunk(args)   => run_deunk(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    let output = args.output.clone();
    let stats  = PrepareUseCase::new(args.into()).execute()?;

    println!("Wrote {} sentence pairs to {}", stats.pairs, output);
    Ok(())
}

fn run_deunk(args: DeunkArgs) -> Result<()> {
    use crate::application::deunk_use_case::DeunkUseCase;

    let report = DeunkUseCase::new(args.into()).execute()?;

    println!("{}", report);
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_prepare_defaults() {
        let cli = Cli::try_parse_from(["story-corpus-prep", "prepare"]).unwrap();
        let Commands::Prepare(args) = cli.command else {
            panic!("expected prepare");
        };
        assert_eq!(args.input, "story_corpus.txt");
        assert_eq!(args.output, "story_corpus.pairs.ne.txt");
        assert!(args.report.is_none());
    }

    #[test]
    fn test_deunk_requires_paths() {
        assert!(Cli::try_parse_from(["story-corpus-prep", "deunk"]).is_err());
        assert!(Cli::try_parse_from([
            "story-corpus-prep", "deunk",
            "--original", "a.txt", "--generated", "b.txt", "--output", "c.txt",
        ])
        .is_ok());
    }
}
