// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Body-centric pose normalization.
//!
//! Raw landmark positions depend on where the dancer stands in frame and how
//! far they are from the camera. Normalization re-expresses each tracked
//! landmark as an (x, y) offset from the body center (the mean of the
//! shoulder and hip positions), so downstream scoring compares pose shape,
//! not framing.

use ndarray::{s, Array2, ArrayView1, ArrayView2};

use crate::landmarks::{Landmark, FEATURE_DIM, TRACKED_LANDMARKS};
use crate::pose::{PoseFrame, PoseSequence};

/// A normalized pose sequence.
///
/// One row per surviving source frame, [`FEATURE_DIM`] columns of
/// body-center-relative offsets. Every row produced by one normalizer run has
/// identical dimensionality; malformed source frames are skipped rather than
/// zero-filled, so a normalized sequence may be shorter than its source.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSequence {
    data: Array2<f32>,
}

impl NormalizedSequence {
    /// An empty sequence with the standard feature width.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data: Array2::zeros((0, FEATURE_DIM)),
        }
    }

    /// Build a sequence from pre-computed feature rows.
    ///
    /// The first non-empty row fixes the width; rows of any other length are
    /// skipped, mirroring how malformed frames are dropped upstream.
    #[must_use]
    pub fn from_rows(rows: &[Vec<f32>]) -> Self {
        let width = rows.iter().map(Vec::len).find(|&len| len > 0).unwrap_or(0);
        if width == 0 {
            return Self {
                data: Array2::zeros((0, 0)),
            };
        }

        let kept: Vec<&Vec<f32>> = rows.iter().filter(|row| row.len() == width).collect();
        let mut data = Array2::zeros((kept.len(), width));
        for (i, row) in kept.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                data[[i, j]] = value;
            }
        }
        Self { data }
    }

    /// Number of normalized frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// Whether no frames survived normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Feature dimensionality of each frame.
    #[must_use]
    pub fn feature_dim(&self) -> usize {
        self.data.ncols()
    }

    /// One frame's feature vector.
    #[must_use]
    pub fn frame(&self, index: usize) -> ArrayView1<'_, f32> {
        self.data.row(index)
    }

    /// A contiguous window of frames, as a view.
    #[must_use]
    pub fn window(&self, start: usize, len: usize) -> ArrayView2<'_, f32> {
        self.data.slice(s![start..start + len, ..])
    }

    /// The full frame matrix, as a view.
    #[must_use]
    pub fn data(&self) -> ArrayView2<'_, f32> {
        self.data.view()
    }
}

/// Normalize a full pose sequence.
///
/// Malformed frames are skipped silently; an empty input (or one with no
/// well-formed frame) yields an empty sequence, which is itself meaningful
/// downstream. Pure function, no side effects.
#[must_use]
pub fn normalize_sequence(sequence: &PoseSequence) -> NormalizedSequence {
    let rows: Vec<[f32; FEATURE_DIM]> = sequence
        .frames
        .iter()
        .filter_map(normalize_frame)
        .collect();

    let data = Array2::from_shape_vec((rows.len(), FEATURE_DIM), rows.concat())
        .unwrap_or_else(|_| Array2::zeros((0, FEATURE_DIM)));
    NormalizedSequence { data }
}

/// Normalize one frame into body-center-relative offsets.
///
/// Returns `None` for a malformed frame. The body center is the arithmetic
/// mean of the left/right shoulder and left/right hip positions; the feature
/// vector holds (x - center_x, y - center_y) per tracked landmark, in
/// [`TRACKED_LANDMARKS`] order. Depth and visibility are not part of the
/// feature; position shape only.
#[must_use]
pub fn normalize_frame(frame: &PoseFrame) -> Option<[f32; FEATURE_DIM]> {
    if !frame.is_well_formed() {
        return None;
    }

    let left_shoulder = frame.point(Landmark::LeftShoulder)?;
    let right_shoulder = frame.point(Landmark::RightShoulder)?;
    let left_hip = frame.point(Landmark::LeftHip)?;
    let right_hip = frame.point(Landmark::RightHip)?;

    let center_x = (left_shoulder.x + right_shoulder.x + left_hip.x + right_hip.x) / 4.0;
    let center_y = (left_shoulder.y + right_shoulder.y + left_hip.y + right_hip.y) / 4.0;

    let mut features = [0.0f32; FEATURE_DIM];
    for (i, landmark) in TRACKED_LANDMARKS.iter().enumerate() {
        let point = frame.point(*landmark)?;
        features[2 * i] = point.x - center_x;
        features[2 * i + 1] = point.y - center_y;
    }
    Some(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{FRAME_VALUES, LANDMARKS_PER_FRAME, VALUES_PER_LANDMARK};

    /// Build a well-formed frame with every landmark at (x, y), then place
    /// the torso landmarks so the body center is known.
    fn torso_frame(nose: (f32, f32)) -> PoseFrame {
        let mut values = vec![0.0f32; FRAME_VALUES];
        let mut set = |landmark: Landmark, x: f32, y: f32| {
            let base = landmark.index() * VALUES_PER_LANDMARK;
            values[base] = x;
            values[base + 1] = y;
            values[base + 3] = 0.9;
        };
        set(Landmark::Nose, nose.0, nose.1);
        set(Landmark::LeftShoulder, 0.2, 0.6);
        set(Landmark::RightShoulder, 0.8, 0.6);
        set(Landmark::LeftHip, 0.2, 0.8);
        set(Landmark::RightHip, 0.8, 0.8);
        PoseFrame::from_flat(&values)
    }

    #[test]
    fn test_normalize_frame_offsets() {
        // Body center is (0.5, 0.7) for the torso above.
        let frame = torso_frame((0.5, 0.2));
        let features = normalize_frame(&frame).unwrap();

        // Nose is the first tracked landmark.
        assert!((features[0] - 0.0).abs() < 1e-6);
        assert!((features[1] - (-0.5)).abs() < 1e-6);

        // Left shoulder is the fourth tracked landmark.
        assert!((features[6] - (-0.3)).abs() < 1e-6);
        assert!((features[7] - (-0.1)).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_frame_rejects_malformed() {
        let frame = PoseFrame::from_flat(&[0.5; 12]);
        assert!(normalize_frame(&frame).is_none());
    }

    #[test]
    fn test_normalize_sequence_skips_malformed() {
        let sequence = PoseSequence::from_frames(vec![
            torso_frame((0.5, 0.2)),
            PoseFrame::from_flat(&[0.5; 8]), // malformed, skipped
            torso_frame((0.4, 0.3)),
        ]);
        let normalized = normalize_sequence(&sequence);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized.feature_dim(), FEATURE_DIM);
    }

    #[test]
    fn test_normalize_empty_sequence() {
        let normalized = normalize_sequence(&PoseSequence::default());
        assert!(normalized.is_empty());
    }

    #[test]
    fn test_normalize_all_malformed() {
        let sequence =
            PoseSequence::from_frames(vec![PoseFrame::from_flat(&[0.0; 4]); 5]);
        assert!(normalize_sequence(&sequence).is_empty());
    }

    #[test]
    fn test_placeholder_frame_normalizes_to_zero() {
        // The extractor emits all-zero frames when no pose is detected; they
        // are well-formed but normalize to a zero vector.
        let frame = PoseFrame::from_flat(&vec![0.0; FRAME_VALUES]);
        assert_eq!(frame.len(), LANDMARKS_PER_FRAME);
        let features = normalize_frame(&frame).unwrap();
        assert!(features.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_rows_skips_mismatched_widths() {
        let rows = vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]];
        let sequence = NormalizedSequence::from_rows(&rows);
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.feature_dim(), 2);
        assert_eq!(sequence.frame(1)[0], 4.0);
    }
}
