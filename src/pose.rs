// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Raw pose data model.
//!
//! These types are the canonical in-memory representation of one video's
//! extracted landmarks, as handed over by the pose-extraction collaborator.
//! They carry no behavior beyond construction and access; normalization and
//! scoring live in their own modules.

use serde::{Deserialize, Serialize};

use crate::landmarks::{Landmark, LANDMARKS_PER_FRAME, VALUES_PER_LANDMARK};

/// One tracked anatomical point: position plus detection confidence.
///
/// Positions are unitless and relative to the video frame. Visibility is the
/// extractor's confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LandmarkPoint {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Depth relative to the body midpoint.
    pub z: f32,
    /// Detection confidence (0 to 1).
    pub visibility: f32,
}

/// All landmarks detected in a single video frame.
///
/// A frame is well-formed when it holds exactly [`LANDMARKS_PER_FRAME`]
/// points. Anything else is dropped during normalization, never partially
/// trusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    points: Vec<LandmarkPoint>,
}

impl PoseFrame {
    /// Create a frame from landmark points.
    #[must_use]
    pub fn new(points: Vec<LandmarkPoint>) -> Self {
        Self { points }
    }

    /// Create a frame from the extractor's flat value layout
    /// (x, y, z, visibility per landmark).
    ///
    /// A trailing partial landmark is discarded; well-formedness is checked
    /// separately via [`PoseFrame::is_well_formed`].
    #[must_use]
    pub fn from_flat(values: &[f32]) -> Self {
        let points = values
            .chunks_exact(VALUES_PER_LANDMARK)
            .map(|v| LandmarkPoint {
                x: v[0],
                y: v[1],
                z: v[2],
                visibility: v[3],
            })
            .collect();
        Self { points }
    }

    /// Number of landmark points in this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the frame holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the frame holds the full landmark set the extractor promises.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.points.len() == LANDMARKS_PER_FRAME
    }

    /// Get a named landmark, if present.
    #[must_use]
    pub fn point(&self, landmark: Landmark) -> Option<&LandmarkPoint> {
        self.points.get(landmark.index())
    }
}

/// An ordered sequence of pose frames extracted from one video.
///
/// Ordering is temporal and significant. The sequence may be empty: that
/// signals missing or failed extraction, not an error. Callers decide what
/// emptiness means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseSequence {
    /// Frames in temporal order.
    pub frames: Vec<PoseFrame>,
    /// Frames per second of the sampled video, when known.
    pub sample_rate: Option<f32>,
    /// Frame count of the source video before sampling, when known.
    pub original_frame_count: Option<usize>,
}

impl PoseSequence {
    /// Create a sequence from frames in temporal order.
    #[must_use]
    pub fn from_frames(frames: Vec<PoseFrame>) -> Self {
        Self {
            frames,
            sample_rate: None,
            original_frame_count: None,
        }
    }

    /// Number of frames in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Pose data in the extraction collaborator's wire format.
///
/// One flat value array per frame, plus the frame count, exactly as the
/// extractor persists it. Frames where no pose was detected appear as
/// all-zero placeholders; they survive conversion and score zero against
/// everything downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPoseData {
    /// One flat landmark array per frame.
    pub landmarks: Vec<Vec<f32>>,
    /// Number of frames, as reported by the extractor.
    pub frame_count: usize,
}

impl RawPoseData {
    /// Convert into the in-memory sequence representation.
    #[must_use]
    pub fn into_sequence(self) -> PoseSequence {
        let frames = self
            .landmarks
            .iter()
            .map(|flat| PoseFrame::from_flat(flat))
            .collect();
        PoseSequence {
            frames,
            sample_rate: None,
            original_frame_count: Some(self.frame_count),
        }
    }
}

impl From<RawPoseData> for PoseSequence {
    fn from(raw: RawPoseData) -> Self {
        raw.into_sequence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::FRAME_VALUES;

    #[test]
    fn test_frame_from_flat() {
        let values: Vec<f32> = (0..FRAME_VALUES).map(|i| i as f32).collect();
        let frame = PoseFrame::from_flat(&values);

        assert!(frame.is_well_formed());
        let nose = frame.point(Landmark::Nose).unwrap();
        assert_eq!(nose.x, 0.0);
        assert_eq!(nose.visibility, 3.0);

        let left_shoulder = frame.point(Landmark::LeftShoulder).unwrap();
        assert_eq!(left_shoulder.x, 44.0); // 11 * 4
    }

    #[test]
    fn test_frame_from_flat_truncated() {
        // 10 values = 2 whole landmarks and a partial third, which is dropped.
        let frame = PoseFrame::from_flat(&[0.0; 10]);
        assert_eq!(frame.len(), 2);
        assert!(!frame.is_well_formed());
    }

    #[test]
    fn test_point_out_of_range() {
        let frame = PoseFrame::from_flat(&[0.0; 12]);
        assert!(frame.point(Landmark::LeftShoulder).is_none());
    }

    #[test]
    fn test_raw_pose_data_conversion() {
        let raw = RawPoseData {
            landmarks: vec![vec![0.5; FRAME_VALUES]; 3],
            frame_count: 3,
        };
        let sequence: PoseSequence = raw.into();
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.original_frame_count, Some(3));
        assert!(sequence.frames[0].is_well_formed());
    }

    #[test]
    fn test_raw_pose_data_json() {
        let json = r#"{"landmarks": [[0.1, 0.2, 0.3, 0.9]], "frame_count": 1}"#;
        let raw: RawPoseData = serde_json::from_str(json).unwrap();
        assert_eq!(raw.frame_count, 1);
        assert_eq!(raw.landmarks[0].len(), 4);

        // A single landmark is not a full frame, but it still parses; the
        // normalizer is the layer that rejects it.
        let sequence = raw.into_sequence();
        assert!(!sequence.frames[0].is_well_formed());
    }
}
