// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Cosine similarity between normalized pose sequences.
//!
//! Cosine similarity is scale-invariant, so dancers of different sizes or
//! distances from the camera are compared on pose shape rather than absolute
//! magnitude. This is more robust than a fixed-tolerance Euclidean
//! threshold.

use ndarray::{ArrayView1, ArrayView2};

/// Similarity between two feature vectors, rescaled from cosine's [-1, 1]
/// into [0, 1] via `(cos + 1) / 2`.
///
/// A zero-magnitude vector on either side scores 0.0: a degenerate, flat
/// pose cannot be judged similar to anything. A length mismatch also scores
/// 0.0 rather than raising, since it is a matching failure rather than a
/// programming error.
#[must_use]
pub fn frame_similarity(a: ArrayView1<'_, f32>, b: ArrayView1<'_, f32>) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot = a.dot(&b);
    let mag_a = a.dot(&a).sqrt();
    let mag_b = b.dot(&b).sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    let cos = (dot / (mag_a * mag_b)).clamp(-1.0, 1.0);
    (cos + 1.0) / 2.0
}

/// Similarity between two equal-length normalized frame sequences: the
/// arithmetic mean of per-frame similarities.
///
/// Returns 0.0 when the sequences differ in frame count, when their feature
/// dimensionalities differ (no frame pair is comparable), or when either is
/// empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sequence_similarity(a: ArrayView2<'_, f32>, b: ArrayView2<'_, f32>) -> f32 {
    if a.nrows() != b.nrows() || a.nrows() == 0 {
        return 0.0;
    }
    if a.ncols() != b.ncols() {
        return 0.0;
    }

    let total: f32 = a
        .outer_iter()
        .zip(b.outer_iter())
        .map(|(row_a, row_b)| frame_similarity(row_a, row_b))
        .sum();
    total / a.nrows() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_identical_vectors_score_one() {
        let v = arr1(&[0.1, -0.2, 0.3]);
        let similarity = frame_similarity(v.view(), v.view());
        assert!((similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_opposite_vectors_score_zero() {
        let a = arr1(&[0.2, -0.1]);
        let b = arr1(&[-0.2, 0.1]);
        assert!(frame_similarity(a.view(), b.view()) < 1e-6);
    }

    #[test]
    fn test_orthogonal_vectors_score_half() {
        let a = arr1(&[1.0, 0.0]);
        let b = arr1(&[0.0, 1.0]);
        let similarity = frame_similarity(a.view(), b.view());
        assert!((similarity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_magnitude_scores_zero() {
        let zero = arr1(&[0.0, 0.0]);
        let v = arr1(&[0.5, 0.5]);
        assert_eq!(frame_similarity(zero.view(), v.view()), 0.0);
        assert_eq!(frame_similarity(v.view(), zero.view()), 0.0);
    }

    #[test]
    fn test_scale_invariance() {
        // Same pose shape at double magnitude scores as identical.
        let a = arr1(&[0.1, 0.2, -0.3]);
        let b = arr1(&[0.2, 0.4, -0.6]);
        let similarity = frame_similarity(a.view(), b.view());
        assert!((similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sequence_self_similarity() {
        let seq = arr2(&[[0.1, 0.2], [0.3, -0.4], [-0.5, 0.6]]);
        let similarity = sequence_similarity(seq.view(), seq.view());
        assert!(similarity > 0.99);
    }

    #[test]
    fn test_sequence_length_mismatch_scores_zero() {
        let a = arr2(&[[0.1, 0.2], [0.3, 0.4]]);
        let b = arr2(&[[0.1, 0.2]]);
        assert_eq!(sequence_similarity(a.view(), b.view()), 0.0);
    }

    #[test]
    fn test_sequence_dimensionality_mismatch_scores_zero() {
        let a = arr2(&[[0.1, 0.2], [0.3, 0.4]]);
        let b = arr2(&[[0.1, 0.2, 0.3], [0.3, 0.4, 0.5]]);
        assert_eq!(sequence_similarity(a.view(), b.view()), 0.0);
    }

    #[test]
    fn test_empty_sequences_score_zero() {
        let a = arr2(&[[0.0f32; 2]; 0]);
        assert_eq!(sequence_similarity(a.view(), a.view()), 0.0);
    }
}
