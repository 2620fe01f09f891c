// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Dance Chain Verification Library
//!
//! Pose-sequence verification for collaborative dance chains, written in
//! Rust. A chain grows one move at a time; a submission is accepted only if
//! it demonstrably reproduces every prior move before adding a new one. This
//! crate turns two sequences of noisy per-frame body-landmark measurements
//! into the single confidence score that gates acceptance.
//!
//! ## Features
//!
//! - **Body-centric normalization** - landmark positions become offsets from
//!   the shoulder/hip center, so framing and camera distance stop mattering
//! - **Cosine similarity scoring** - pose shape comparison that is invariant
//!   to dancer scale
//! - **Sliding-window matching** - finds where a reference move occurs inside
//!   a longer performance, with a coarse stride and an exhaustive fallback
//!   for short recordings
//! - **All-or-nothing chain gating** - every prior move must clear the
//!   per-move threshold or the submission is rejected with a per-move
//!   breakdown
//!
//! The core is a pure, stateless function library: no I/O, no persistence,
//! no process-wide state. Video decoding, the pose model, storage, and the
//! web layer are external collaborators.
//!
//! ## Quick Start (Library)
//!
//! ```
//! use dancechain_verify::{ChainVerifier, PoseSequence, VerifyConfig};
//!
//! fn main() -> Result<(), dancechain_verify::VerifyError> {
//!     let verifier = ChainVerifier::new(VerifyConfig::new().with_move_threshold(0.6));
//!
//!     // The first move of a chain has nothing to reproduce.
//!     let result = verifier.verify(&[], &PoseSequence::default())?;
//!     assert!(result.verified);
//!     assert_eq!(result.overall_score, 1.0);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Verify a submission against two prior moves
//! dancechain-verify verify -r move1.json -r move2.json -s submission.json
//!
//! # With a stricter per-move threshold and verbose breakdown
//! dancechain-verify verify -r move1.json -s submission.json --threshold 0.7 --verbose
//! ```
//!
//! Pose-data files use the extractor's wire format:
//! `{ "landmarks": [[x, y, z, visibility, ...]], "frame_count": n }`.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`landmarks`] | Named landmark table and feature dimensions |
//! | [`pose`] | Raw pose data model ([`PoseFrame`], [`PoseSequence`]) |
//! | [`normalizer`] | Body-centric normalization ([`NormalizedSequence`]) |
//! | [`similarity`] | Cosine frame/sequence similarity |
//! | [`matching`] | Sliding-window best-match search |
//! | [`verifier`] | Chain verification ([`ChainVerifier`], [`VerifyConfig`]) |
//! | [`error`] | Error types ([`VerifyError`], [`Result`]) |
//!
//! ## Design Notes
//!
//! The matcher is a windowed max-similarity search, not Dynamic Time
//! Warping: it tolerates timing offset but not timing stretch within a move.
//! Per-move matching fans out across a rayon worker pool; output ordering is
//! always aligned with the chain's move order.
//!
//! ## License
//!
//! This project is licensed under
//! [AGPL-3.0](https://www.gnu.org/licenses/agpl-3.0.html) for open-source
//! use or the [Ultralytics Enterprise License](https://ultralytics.com/license)
//! for commercial applications.

// Modules
pub mod cli;
pub mod error;
pub mod landmarks;
pub mod matching;
pub mod normalizer;
pub mod pose;
pub mod similarity;
pub mod verifier;

// Re-export main types for convenience
pub use error::{Result, VerifyError};
pub use landmarks::{Landmark, FEATURE_DIM, TRACKED_LANDMARKS};
pub use matching::find_best_match;
pub use normalizer::{normalize_frame, normalize_sequence, NormalizedSequence};
pub use pose::{LandmarkPoint, PoseFrame, PoseSequence, RawPoseData};
pub use similarity::{frame_similarity, sequence_similarity};
pub use verifier::{ChainVerifier, ReferenceMove, VerificationResult, VerifyConfig};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
