// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Sliding-window search for a reference move inside a longer performance.
//!
//! The search is a windowed max-similarity scan, not a Dynamic-Time-Warping
//! alignment: it tolerates timing offset (where in the performance the move
//! occurs) but not timing stretch within the move itself. That is a known
//! limitation of the design, accepted for its simplicity and throughput.

use crate::normalizer::NormalizedSequence;
use crate::similarity::sequence_similarity;

/// The coarse scan stride is the needle length divided by this.
const COARSE_STRIDE_DIVISOR: usize = 4;

/// Fraction of the haystack at each end treated as a truncation-prone edge.
const EDGE_FRACTION: f32 = 0.1;

/// Score multiplier for windows starting inside an edge region.
const EDGE_PENALTY: f32 = 0.8;

/// Haystacks up to this many frames also get an exhaustive unit-stride scan.
const FINE_SCAN_MAX_FRAMES: usize = 100;

/// Find the sub-window of `haystack` that best matches `needle`.
///
/// Returns the maximum penalized window similarity in [0, 1]. Scores 0.0
/// immediately when either sequence is empty or the haystack is shorter than
/// the needle: the move cannot be contained in a shorter recording.
///
/// The coarse scan strides by a quarter of the needle length, trading
/// exhaustiveness for throughput on long recordings. Short haystacks (at
/// most [`FINE_SCAN_MAX_FRAMES`] frames) are cheap enough to also search at
/// every start index, which recovers exact alignments the stride would skip.
#[must_use]
pub fn find_best_match(haystack: &NormalizedSequence, needle: &NormalizedSequence) -> f32 {
    let hay_len = haystack.len();
    let needle_len = needle.len();
    if hay_len == 0 || needle_len == 0 || hay_len < needle_len {
        return 0.0;
    }

    let stride = (needle_len / COARSE_STRIDE_DIVISOR).max(1);
    let last_start = hay_len - needle_len;
    let mut best = 0.0f32;

    let mut start = 0;
    while start <= last_start {
        best = best.max(window_score(haystack, needle, start));
        start += stride;
    }

    if hay_len <= FINE_SCAN_MAX_FRAMES && stride > 1 {
        for start in 0..=last_start {
            best = best.max(window_score(haystack, needle, start));
        }
    }

    best
}

/// Score one window, down-weighting starts near either end of the haystack.
///
/// A window starting in the first or last 10% of the recording is likely a
/// truncated capture of the move rather than a full performance.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn window_score(haystack: &NormalizedSequence, needle: &NormalizedSequence, start: usize) -> f32 {
    let similarity = sequence_similarity(haystack.window(start, needle.len()), needle.data());

    let margin = (haystack.len() as f32 * EDGE_FRACTION) as usize;
    if start < margin || start >= haystack.len() - margin {
        similarity * EDGE_PENALTY
    } else {
        similarity
    }
}
