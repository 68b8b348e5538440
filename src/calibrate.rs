//! Height calibration: deriving the landmark-space-to-centimeters factor
//! from the user's known standing height.

use serde::Serialize;

use crate::config::EngineConfig;
use crate::types::{LandmarkFrame, LandmarkIndex};

/// Scaling factor converting landmark-space distances into real-world
/// centimeters, with a plausibility score for the detected span.
///
/// Produced once per frame and applied multiplicatively to every raw
/// landmark distance before it is meaningful in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationResult {
    pub factor: f32,
    pub confidence: f32,
    pub detected_height_cm: f32,
}

/// Derive the calibration factor from the nose-to-heel span.
///
/// The span between the nose and the lower heel, corrected by
/// `config.height_correction` for the nose-to-crown gap, approximates the
/// detected standing height. The factor is the ratio of the user's actual
/// height to that detection.
///
/// The confidence reflects how plausible the detected height is against the
/// stated one; a low score flags an unreliable calibration but never stops
/// the computation.
pub fn calibrate(
    frame: &LandmarkFrame,
    actual_height_cm: f32,
    config: &EngineConfig,
) -> CalibrationResult {
    let nose = frame.get(LandmarkIndex::Nose);
    let left_heel = frame.get(LandmarkIndex::LeftHeel);
    let right_heel = frame.get(LandmarkIndex::RightHeel);

    let heel = if left_heel.y < right_heel.y {
        left_heel
    } else {
        right_heel
    };

    let nose_to_heel = (heel.y - nose.y).abs();
    let detected_height_m = nose_to_heel * config.height_correction;

    let actual_height_m = actual_height_cm / 100.0;
    let factor = actual_height_m / detected_height_m;

    let height_ratio = detected_height_m / actual_height_m;
    let confidence = if (0.8..=1.2).contains(&height_ratio) {
        0.95
    } else if (0.6..=1.4).contains(&height_ratio) {
        0.80
    } else {
        0.60
    };

    CalibrationResult {
        factor,
        confidence,
        detected_height_cm: detected_height_m * 100.0,
    }
}
