// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Chain verification: does a submission reproduce every prior move?
//!
//! The verifier normalizes the submitted sequence once, searches it for each
//! reference move independently, then applies an all-or-nothing threshold
//! gate. Partial credit is not given; a chain extension must demonstrate
//! every prior move.

use crate::error::{Result, VerifyError};
use crate::matching::find_best_match;
use crate::normalizer::{normalize_sequence, NormalizedSequence};
use crate::pose::PoseSequence;

/// Default per-move minimum similarity for a prior move to count as found.
pub const DEFAULT_MOVE_THRESHOLD: f32 = 0.6;

/// Default cap on the aggregate score of a passing submission.
///
/// Reserves headroom so a perfect historical replay never outscores the
/// novelty of the newly added move, which is itself never re-verified.
pub const DEFAULT_SCORE_CAP: f32 = 0.95;

/// Default minimum normalized frame count for a submission to be scored.
pub const DEFAULT_MIN_FRAMES: usize = 10;

/// Configuration for chain verification.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use dancechain_verify::VerifyConfig;
///
/// let config = VerifyConfig::new()
///     .with_move_threshold(0.7)
///     .with_score_cap(0.9)
///     .with_min_frames(20);
/// ```
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Minimum similarity for a prior move to count as reproduced (0.0 to 1.0).
    pub move_threshold: f32,
    /// Upper bound on the aggregate score of a passing submission (0.0 to 1.0).
    pub score_cap: f32,
    /// Minimum frames the submission must retain after normalization.
    pub min_frames: usize,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            move_threshold: DEFAULT_MOVE_THRESHOLD,
            score_cap: DEFAULT_SCORE_CAP,
            min_frames: DEFAULT_MIN_FRAMES,
        }
    }
}

impl VerifyConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-move similarity threshold.
    #[must_use]
    pub const fn with_move_threshold(mut self, threshold: f32) -> Self {
        self.move_threshold = threshold;
        self
    }

    /// Set the aggregate score cap.
    #[must_use]
    pub const fn with_score_cap(mut self, cap: f32) -> Self {
        self.score_cap = cap;
        self
    }

    /// Set the minimum normalized frame count for a scorable submission.
    #[must_use]
    pub const fn with_min_frames(mut self, frames: usize) -> Self {
        self.min_frames = frames;
        self
    }

    /// Check that the configured policy values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::ConfigError`] if either threshold lies outside
    /// [0, 1].
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.move_threshold) {
            return Err(VerifyError::ConfigError(format!(
                "move_threshold {} is outside [0, 1]",
                self.move_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.score_cap) {
            return Err(VerifyError::ConfigError(format!(
                "score_cap {} is outside [0, 1]",
                self.score_cap
            )));
        }
        Ok(())
    }
}

/// The normalized pose sequence of a previously accepted chain move.
///
/// Immutable historical ground truth: built once when a move is accepted and
/// never mutated afterward.
#[derive(Debug, Clone)]
pub struct ReferenceMove {
    /// 1-based position of the move in its chain.
    pub move_number: u32,
    normalized: NormalizedSequence,
}

impl ReferenceMove {
    /// Create a reference from an already-normalized sequence.
    #[must_use]
    pub fn new(move_number: u32, normalized: NormalizedSequence) -> Self {
        Self {
            move_number,
            normalized,
        }
    }

    /// Create a reference from raw landmarks, as persisted by storage.
    ///
    /// Normalization is idempotent and cheap, so storing raw landmarks and
    /// re-normalizing on read is a valid persistence strategy.
    #[must_use]
    pub fn from_pose(move_number: u32, sequence: &PoseSequence) -> Self {
        Self {
            move_number,
            normalized: normalize_sequence(sequence),
        }
    }

    /// The move's normalized sequence.
    #[must_use]
    pub fn normalized(&self) -> &NormalizedSequence {
        &self.normalized
    }
}

/// Outcome of one verification call.
///
/// Created fresh per call and not persisted here. The per-move breakdown is
/// kept even on failure so the caller can tell the user which prior move was
/// not reproduced, not just that verification failed.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    /// Aggregate score in [0, 1].
    pub overall_score: f32,
    /// Best-match similarity per prior move, aligned with chain order.
    pub per_move_scores: Vec<f32>,
    /// Whether the submission reproduced every prior move.
    pub verified: bool,
}

impl VerificationResult {
    fn rejected(per_move_scores: Vec<f32>) -> Self {
        Self {
            overall_score: 0.0,
            per_move_scores,
            verified: false,
        }
    }
}

/// Verifies that a submitted pose sequence reproduces every prior move of a
/// chain.
///
/// Stateless apart from its configuration; construct explicitly and pass
/// config rather than reading process-wide state.
#[derive(Debug, Clone, Default)]
pub struct ChainVerifier {
    config: VerifyConfig,
}

impl ChainVerifier {
    /// Create a verifier with the given policy configuration.
    #[must_use]
    pub fn new(config: VerifyConfig) -> Self {
        Self { config }
    }

    /// The verifier's configuration.
    #[must_use]
    pub const fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Verify a submission against the chain's existing moves.
    ///
    /// The first move of a chain has nothing to reproduce and is trivially
    /// verified with score 1.0. A submission whose normalized sequence is
    /// shorter than the configured minimum is rejected with score 0.0.
    /// Otherwise each reference move is searched for independently and the
    /// all-or-nothing gate in [`ChainVerifier::aggregate`] decides the
    /// outcome.
    ///
    /// Invalid or insufficient *performance* data never raises; it degrades
    /// to a zero score.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::ContractViolation`] when a reference move holds
    /// no usable frames: accepted moves always have pose data, so an empty
    /// reference means the storage collaborator handed over corrupt ground
    /// truth.
    pub fn verify(
        &self,
        existing_moves: &[ReferenceMove],
        new_sequence: &PoseSequence,
    ) -> Result<VerificationResult> {
        if existing_moves.is_empty() {
            return Ok(VerificationResult {
                overall_score: 1.0,
                per_move_scores: Vec::new(),
                verified: true,
            });
        }

        for reference in existing_moves {
            if reference.normalized.is_empty() {
                return Err(VerifyError::ContractViolation(format!(
                    "reference move {} has no usable pose frames",
                    reference.move_number
                )));
            }
        }

        let submission = normalize_sequence(new_sequence);
        if submission.len() < self.config.min_frames {
            return Ok(VerificationResult::rejected(vec![
                0.0;
                existing_moves.len()
            ]));
        }

        let per_move_scores = match_all_moves(existing_moves, &submission);
        let (overall_score, verified) = self.aggregate(&per_move_scores);
        Ok(VerificationResult {
            overall_score,
            per_move_scores,
            verified,
        })
    }

    /// Apply the threshold gate and aggregate cap to per-move scores.
    ///
    /// Any move below the threshold fails the whole verification with score
    /// 0.0. When every move passes, the aggregate is the mean similarity,
    /// capped at the configured maximum.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aggregate(&self, per_move_scores: &[f32]) -> (f32, bool) {
        if per_move_scores.is_empty() {
            return (1.0, true);
        }

        let all_found = per_move_scores
            .iter()
            .all(|&score| score >= self.config.move_threshold);
        if !all_found {
            return (0.0, false);
        }

        let mean = per_move_scores.iter().sum::<f32>() / per_move_scores.len() as f32;
        (mean.min(self.config.score_cap), true)
    }
}

/// Search the submission for every reference move.
///
/// The searches are independent, so they fan out across rayon's worker pool
/// for chains with many moves. Output ordering stays aligned with the
/// chain's move order regardless of completion order.
fn match_all_moves(moves: &[ReferenceMove], submission: &NormalizedSequence) -> Vec<f32> {
    use rayon::prelude::*;

    moves
        .par_iter()
        .map(|reference| find_best_match(submission, &reference.normalized))
        .collect()
}
