//! Engine entry point: boundary validation, pipeline orchestration, and
//! result classification.
//!
//! Pose detection itself is an external collaborator behind the
//! [`PoseDetector`] trait; the engine is a pure function of a landmark frame
//! and the user's stated height, safe to share across concurrent requests.

use serde::Serialize;

use crate::calibrate::calibrate;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::garment::GarmentMeasurements;
use crate::measure::BodyMeasurements;
use crate::types::{Landmark, LandmarkFrame};

/// Accepted range for the user-stated height, in centimeters.
pub const MIN_HEIGHT_CM: f32 = 50.0;
pub const MAX_HEIGHT_CM: f32 = 250.0;

/// External pose-detection collaborator.
///
/// Implementations run a pose model over an encoded photo and return its 33
/// world landmarks. `Ok(None)` means the photo contained no detectable body.
pub trait PoseDetector {
    fn detect(&self, photo: &[u8]) -> Result<Option<LandmarkFrame>>;
}

/// A [`PoseDetector`] that replays one pre-recorded landmark frame.
///
/// Used when the pose model runs elsewhere (a capture app, a batch job) and
/// its landmarks arrive serialized; also convenient as a test double.
pub struct ReplayDetector {
    frame: LandmarkFrame,
}

impl ReplayDetector {
    pub fn new(frame: LandmarkFrame) -> Self {
        Self { frame }
    }

    /// Parse a frame from a JSON array of `{x, y, z, visibility}` objects.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let landmarks: Vec<Landmark> = serde_json::from_slice(bytes)?;
        Ok(Self::new(LandmarkFrame::new(landmarks)?))
    }

    pub fn frame(&self) -> &LandmarkFrame {
        &self.frame
    }
}

impl PoseDetector for ReplayDetector {
    fn detect(&self, _photo: &[u8]) -> Result<Option<LandmarkFrame>> {
        Ok(Some(self.frame.clone()))
    }
}

/// Overall outcome of a measurement request, a function of how many body
/// slots resolved to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    FullSuccess,
    PartialSuccess,
    Failed,
}

/// Complete result of one measurement request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementReport {
    pub status: ResultStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    pub body_measurements: BodyMeasurements,
    pub garment_measurements: GarmentMeasurements,
    pub calibration_factor: f32,
}

/// The measurement computation engine.
///
/// Stateless apart from its configuration; every invocation builds a fresh
/// report from its inputs.
#[derive(Debug, Clone)]
pub struct MeasurementEngine {
    config: EngineConfig,
}

impl MeasurementEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline on a landmark frame.
    ///
    /// `weight_kg` is accepted for future body-composition estimates; no
    /// current calculation uses it.
    ///
    /// Landmark-visibility and dependency failures degrade individual fields
    /// rather than failing the call: for a valid height the result is always
    /// a complete report, down to [`ResultStatus::Failed`] with every field
    /// null.
    pub fn compute(
        &self,
        frame: &LandmarkFrame,
        height_cm: f32,
        weight_kg: Option<f32>,
    ) -> Result<MeasurementReport> {
        let _ = weight_kg;

        if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm) {
            return Err(Error::InvalidHeight { height_cm });
        }

        let calibration = calibrate(frame, height_cm, &self.config);
        let body = BodyMeasurements::from_frame(frame, calibration.factor, &self.config);
        let garments = GarmentMeasurements::from_body(&body, &self.config);
        let (status, message, warnings) = classify(&body);

        Ok(MeasurementReport {
            status,
            message,
            warnings,
            body_measurements: body,
            garment_measurements: garments,
            calibration_factor: calibration.factor,
        })
    }

    /// Detect a body in the photo via the injected collaborator, then
    /// compute measurements from the resulting frame.
    pub fn measure_photo(
        &self,
        detector: &dyn PoseDetector,
        photo: &[u8],
        height_cm: f32,
        weight_kg: Option<f32>,
    ) -> Result<MeasurementReport> {
        // Reject a bad height before spending time on detection.
        if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm) {
            return Err(Error::InvalidHeight { height_cm });
        }

        let frame = detector.detect(photo)?.ok_or(Error::NoBodyDetected)?;
        self.compute(&frame, height_cm, weight_kg)
    }
}

impl Default for MeasurementEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify the outcome from slot availability alone; confidence magnitudes
/// only ever affect the accompanying text.
fn classify(body: &BodyMeasurements) -> (ResultStatus, String, Option<Vec<String>>) {
    let available = body.available_count();
    let total = body.slots().len();

    if available == total {
        (
            ResultStatus::FullSuccess,
            "Measurements calculated successfully".to_string(),
            None,
        )
    } else if available > 0 {
        let warnings = vec![
            format!("Missing measurements: {}", body.missing_slots().join(", ")),
            "Please upload another photo for best results".to_string(),
        ];
        (
            ResultStatus::PartialSuccess,
            "Some body landmarks not detected. Partial measurements returned.".to_string(),
            Some(warnings),
        )
    } else {
        (
            ResultStatus::Failed,
            "Could not calculate measurements".to_string(),
            Some(vec![
                "No body landmarks detected with sufficient confidence".to_string(),
            ]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MeasurementValue;

    fn body_with_available(count: usize) -> BodyMeasurements {
        let available = MeasurementValue::cm(50.0, 0.9);
        let missing = MeasurementValue::missing_cm("not visible");
        let pick = |i: usize| {
            if i < count {
                available.clone()
            } else {
                missing.clone()
            }
        };
        BodyMeasurements {
            shoulder_width: pick(0),
            chest_circumference: pick(1),
            waist_circumference: pick(2),
            hip_width: pick(3),
            arm_length: pick(4),
            torso_length: pick(5),
            inseam_length: pick(6),
            leg_opening: pick(7),
        }
    }

    #[test]
    fn classify_full_success() {
        let (status, message, warnings) = classify(&body_with_available(8));
        assert_eq!(status, ResultStatus::FullSuccess);
        assert_eq!(message, "Measurements calculated successfully");
        assert!(warnings.is_none());
    }

    #[test]
    fn classify_partial_success_lists_missing() {
        let (status, _, warnings) = classify(&body_with_available(7));
        assert_eq!(status, ResultStatus::PartialSuccess);
        let warnings = warnings.unwrap();
        assert_eq!(warnings[0], "Missing measurements: leg_opening");
        assert_eq!(warnings[1], "Please upload another photo for best results");

        let (status, _, _) = classify(&body_with_available(1));
        assert_eq!(status, ResultStatus::PartialSuccess);
    }

    #[test]
    fn classify_failed_when_nothing_available() {
        let (status, message, warnings) = classify(&body_with_available(0));
        assert_eq!(status, ResultStatus::Failed);
        assert_eq!(message, "Could not calculate measurements");
        assert_eq!(
            warnings.unwrap(),
            vec!["No body landmarks detected with sufficient confidence".to_string()]
        );
    }

    #[test]
    fn status_serialization() {
        assert_eq!(
            serde_json::to_string(&ResultStatus::FullSuccess).unwrap(),
            "\"full_success\""
        );
        assert_eq!(
            serde_json::to_string(&ResultStatus::PartialSuccess).unwrap(),
            "\"partial_success\""
        );
        assert_eq!(
            serde_json::to_string(&ResultStatus::Failed).unwrap(),
            "\"failed\""
        );
    }

    #[test]
    fn replay_detector_round_trip() {
        let json = serde_json::to_vec(
            &(0..33)
                .map(|i| Landmark::new(0.0, i as f32 * 0.05, 0.0, 1.0))
                .collect::<Vec<_>>(),
        )
        .unwrap();

        let detector = ReplayDetector::from_json(&json).unwrap();
        let frame = detector.detect(&[]).unwrap().unwrap();
        assert_eq!(frame.landmarks().len(), 33);
        assert_eq!(frame, *detector.frame());
    }

    #[test]
    fn replay_detector_rejects_short_frame() {
        let json = serde_json::to_vec(&vec![Landmark::default(); 12]).unwrap();
        match ReplayDetector::from_json(&json) {
            Err(Error::InsufficientLandmarks { found, .. }) => assert_eq!(found, 12),
            other => panic!("expected InsufficientLandmarks, got {:?}", other.err()),
        }
    }
}
