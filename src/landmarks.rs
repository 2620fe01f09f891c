// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Named landmark table for the upstream pose model.
//!
//! The pose-extraction collaborator emits 33 body landmarks per frame in the
//! BlazePose ordering, four values each (x, y, z, visibility). Every landmark
//! access in this crate goes through this table, so a change in the upstream
//! ordering is a one-file fix instead of a silent misindex.

/// Number of landmarks the pose model emits per frame.
pub const LANDMARKS_PER_FRAME: usize = 33;

/// Values stored per landmark: x, y, z, visibility.
pub const VALUES_PER_LANDMARK: usize = 4;

/// Length of one flat landmark frame as produced by the extractor.
pub const FRAME_VALUES: usize = LANDMARKS_PER_FRAME * VALUES_PER_LANDMARK;

/// One tracked anatomical landmark.
///
/// The discriminant is the landmark's index in the upstream pose model's
/// output ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Landmark {
    /// Tip of the nose.
    Nose = 0,
    /// Left eye center.
    LeftEye = 2,
    /// Right eye center.
    RightEye = 5,
    /// Left shoulder joint.
    LeftShoulder = 11,
    /// Right shoulder joint.
    RightShoulder = 12,
    /// Left elbow joint.
    LeftElbow = 13,
    /// Right elbow joint.
    RightElbow = 14,
    /// Left wrist joint.
    LeftWrist = 15,
    /// Right wrist joint.
    RightWrist = 16,
    /// Left hip joint.
    LeftHip = 23,
    /// Right hip joint.
    RightHip = 24,
    /// Left knee joint.
    LeftKnee = 25,
    /// Right knee joint.
    RightKnee = 26,
    /// Left ankle joint.
    LeftAnkle = 27,
    /// Right ankle joint.
    RightAnkle = 28,
}

impl Landmark {
    /// Index of this landmark in the upstream model's per-frame ordering.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Landmarks used for normalized pose features, in feature-vector order.
///
/// The order here defines the layout of a normalized feature vector: two
/// values (x offset, y offset) per entry, in sequence.
pub const TRACKED_LANDMARKS: [Landmark; 15] = [
    Landmark::Nose,
    Landmark::LeftEye,
    Landmark::RightEye,
    Landmark::LeftShoulder,
    Landmark::RightShoulder,
    Landmark::LeftElbow,
    Landmark::RightElbow,
    Landmark::LeftWrist,
    Landmark::RightWrist,
    Landmark::LeftHip,
    Landmark::RightHip,
    Landmark::LeftKnee,
    Landmark::RightKnee,
    Landmark::LeftAnkle,
    Landmark::RightAnkle,
];

/// Dimensionality of a normalized feature vector: one (x, y) offset pair per
/// tracked landmark.
pub const FEATURE_DIM: usize = TRACKED_LANDMARKS.len() * 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_upstream_ordering() {
        // Spot-check against the published BlazePose landmark indices.
        assert_eq!(Landmark::Nose.index(), 0);
        assert_eq!(Landmark::LeftShoulder.index(), 11);
        assert_eq!(Landmark::RightShoulder.index(), 12);
        assert_eq!(Landmark::LeftHip.index(), 23);
        assert_eq!(Landmark::RightHip.index(), 24);
        assert_eq!(Landmark::RightAnkle.index(), 28);
    }

    #[test]
    fn test_tracked_landmarks_fit_in_frame() {
        for landmark in TRACKED_LANDMARKS {
            assert!(landmark.index() < LANDMARKS_PER_FRAME);
        }
    }

    #[test]
    fn test_feature_dim() {
        assert_eq!(FEATURE_DIM, 30);
        assert_eq!(FRAME_VALUES, 132);
    }
}
