// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::fs;

use crate::cli::args::VerifyArgs;
use crate::error::Result;
use crate::pose::{PoseSequence, RawPoseData};
use crate::verifier::{ChainVerifier, ReferenceMove, VerifyConfig};
use crate::{info, success, verbose, warn};

/// Run chain verification against pose-data files.
///
/// Returns whether the submission was verified. IO, parse, and contract
/// failures surface as errors; a failed verification does not.
///
/// # Errors
///
/// Returns an error when a pose-data file cannot be read or parsed, when the
/// configured thresholds are invalid, or when a reference move holds no
/// usable frames.
pub fn run_verify(args: &VerifyArgs) -> Result<bool> {
    crate::cli::logging::set_verbose(args.verbose);

    let config = VerifyConfig::new()
        .with_move_threshold(args.threshold)
        .with_score_cap(args.cap)
        .with_min_frames(args.min_frames);
    config.validate()?;

    let mut references = Vec::with_capacity(args.references.len());
    for (i, path) in args.references.iter().enumerate() {
        let sequence = load_pose_sequence(path)?;
        #[allow(clippy::cast_possible_truncation)]
        let move_number = (i + 1) as u32;
        let reference = ReferenceMove::from_pose(move_number, &sequence);
        verbose!(
            "move {}: {} raw frames, {} usable ({})",
            move_number,
            sequence.len(),
            reference.normalized().len(),
            path
        );
        references.push(reference);
    }

    let submission = load_pose_sequence(&args.submission)?;
    verbose!("submission: {} raw frames ({})", submission.len(), args.submission);

    let verifier = ChainVerifier::new(config);
    let result = verifier.verify(&references, &submission)?;

    for (reference, score) in references.iter().zip(&result.per_move_scores) {
        let status = if *score >= args.threshold {
            "found"
        } else {
            "missing"
        };
        info!(
            "move {:>2}: similarity {:.3} ({status})",
            reference.move_number, score
        );
    }

    if result.verified {
        success!("verified, overall score {:.3}", result.overall_score);
    } else {
        warn!(
            "rejected, overall score {:.3}. All prior moves must be performed with sufficient accuracy.",
            result.overall_score
        );
    }

    Ok(result.verified)
}

/// Load a pose sequence from the extractor's JSON wire format.
fn load_pose_sequence(path: &str) -> Result<PoseSequence> {
    let text = fs::read_to_string(path)?;
    let raw: RawPoseData = serde_json::from_str(&text)?;
    Ok(raw.into_sequence())
}
