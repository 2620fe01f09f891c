// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

use crate::verifier::{DEFAULT_MIN_FRAMES, DEFAULT_MOVE_THRESHOLD, DEFAULT_SCORE_CAP};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Verify Options:
    --reference, -r <FILE>  Pose-data JSON of a prior move; repeat in chain order
    --submission, -s <FILE> Pose-data JSON of the submitted performance
    --threshold <T>         Per-move similarity threshold [default: 0.6]
    --cap <C>               Aggregate score cap [default: 0.95]
    --min-frames <N>        Minimum usable submission frames [default: 10]
    --verbose               Show verbose output

Examples:
    dancechain-verify verify -r move1.json -s submission.json
    dancechain-verify verify -r move1.json -r move2.json -s submission.json --verbose
    dancechain-verify verify -r move1.json -s submission.json --threshold 0.7"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify a submission against the prior moves of a chain
    Verify(VerifyArgs),
}

/// Arguments for the verify command.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Pose-data JSON of a prior move; repeat once per move, in chain order
    #[arg(short, long = "reference", value_name = "FILE")]
    pub references: Vec<String>,

    /// Pose-data JSON of the submitted performance
    #[arg(short, long, value_name = "FILE")]
    pub submission: String,

    /// Minimum per-move similarity for a prior move to count as reproduced
    #[arg(long, default_value_t = DEFAULT_MOVE_THRESHOLD)]
    pub threshold: f32,

    /// Cap applied to the aggregate score of a passing submission
    #[arg(long, default_value_t = DEFAULT_SCORE_CAP)]
    pub cap: f32,

    /// Minimum frames the submission must retain after normalization
    #[arg(long, default_value_t = DEFAULT_MIN_FRAMES)]
    pub min_frames: usize,

    /// Show verbose output
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
