use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 3D point in pose-landmark space.
///
/// Coordinates are metric-scaled and centered near the body's hip midpoint,
/// as produced by world-landmark pose models.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Midpoint between this point and another.
    pub fn midpoint(&self, other: &Point3) -> Point3 {
        Point3::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }
}

/// A single detected anatomical point: 3D position plus the detector's
/// visibility confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub visibility: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }

    pub fn position(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    /// Whether the visibility confidence meets the threshold.
    pub fn is_visible(&self, threshold: f32) -> bool {
        self.visibility >= threshold
    }
}

/// The fixed 33-point anatomical index mapping used by full-body pose models.
///
/// Index-to-anatomy assignment is part of the detector contract and is never
/// reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkIndex {
    pub const COUNT: usize = 33;
}

/// One full-body detection: exactly 33 landmarks in the fixed anatomical
/// order of [`LandmarkIndex`].
///
/// Frames are the input contract from the external pose detector; shorter
/// (or longer) landmark lists are rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    landmarks: Vec<Landmark>,
}

impl LandmarkFrame {
    /// Validate and wrap a detector's landmark list.
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self> {
        if landmarks.len() != LandmarkIndex::COUNT {
            return Err(Error::InsufficientLandmarks {
                expected: LandmarkIndex::COUNT,
                found: landmarks.len(),
            });
        }
        Ok(Self { landmarks })
    }

    /// Get a landmark by its anatomical index.
    pub fn get(&self, index: LandmarkIndex) -> &Landmark {
        &self.landmarks[index as usize]
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }
}

/// A single computed measurement with its confidence and provenance.
///
/// `value` and `confidence` move together: a measurement that could not be
/// computed always carries `value: None` with `confidence: 0.0`, never one
/// without the other. The constructors enforce this pairing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementValue {
    pub value: Option<f32>,
    pub unit: &'static str,
    pub confidence: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MeasurementValue {
    /// A computed value in centimeters.
    pub fn cm(value: f32, confidence: f32) -> Self {
        Self {
            value: Some(value),
            unit: "cm",
            confidence,
            notes: None,
            error: None,
        }
    }

    /// A computed value in inches.
    pub fn inches(value: f32, confidence: f32) -> Self {
        Self {
            value: Some(value),
            unit: "inches",
            confidence,
            notes: None,
            error: None,
        }
    }

    /// Attach a provenance note (estimation basis, ease rationale).
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// A centimeter slot that could not be computed, with the reason.
    pub fn missing_cm(error: impl Into<String>) -> Self {
        Self {
            value: None,
            unit: "cm",
            confidence: 0.0,
            notes: None,
            error: Some(error.into()),
        }
    }

    /// An inch field whose underlying body measurement was unavailable.
    pub fn missing_inches() -> Self {
        Self {
            value: None,
            unit: "inches",
            confidence: 0.0,
            notes: None,
            error: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }
}
