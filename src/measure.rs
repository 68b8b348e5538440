//! Body measurements computed from a calibrated landmark frame.
//!
//! Each of the eight slots resolves independently to a [`MeasurementValue`]:
//! direct slots from landmark distances, derived slots from anthropometric
//! ratios on previously computed slots. A slot whose landmarks are hidden or
//! whose dependency is missing reports the reason inline instead of failing
//! the computation.

use serde::Serialize;

use crate::config::EngineConfig;
use crate::types::{LandmarkFrame, LandmarkIndex, MeasurementValue, Point3};

// Confidence ceilings for distance-based slots (the landmark visibility
// average is capped at these) and fixed scores for estimated slots.
const SHOULDER_CONFIDENCE_CAP: f32 = 0.98;
const HIP_CONFIDENCE_CAP: f32 = 0.92;
const TORSO_CONFIDENCE: f32 = 0.90;
const TWO_ARM_CONFIDENCE: f32 = 0.93;
const ONE_ARM_CONFIDENCE: f32 = 0.80;
const TWO_LEG_CONFIDENCE: f32 = 0.88;
const ONE_LEG_CONFIDENCE: f32 = 0.75;
const CHEST_CONFIDENCE: f32 = 0.75;
const WAIST_CONFIDENCE: f32 = 0.70;
const LEG_OPENING_CONFIDENCE: f32 = 0.75;
const LEG_OPENING_FALLBACK_CONFIDENCE: f32 = 0.50;

/// The eight body measurement slots, all in centimeters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyMeasurements {
    pub shoulder_width: MeasurementValue,
    pub chest_circumference: MeasurementValue,
    pub waist_circumference: MeasurementValue,
    pub hip_width: MeasurementValue,
    pub arm_length: MeasurementValue,
    pub torso_length: MeasurementValue,
    pub inseam_length: MeasurementValue,
    pub leg_opening: MeasurementValue,
}

impl BodyMeasurements {
    /// Compute all slots in dependency order: the direct width slots first,
    /// then the ratio-derived slots that need them.
    pub fn from_frame(frame: &LandmarkFrame, factor: f32, config: &EngineConfig) -> Self {
        let shoulder_width = shoulder_width(frame, factor, config);
        let hip_width = hip_width(frame, factor, config);

        let chest_circumference = chest_circumference(shoulder_width.value, config);
        let waist_circumference = waist_circumference(hip_width.value, config);
        let leg_opening = leg_opening(frame, hip_width.value, config);

        Self {
            shoulder_width,
            chest_circumference,
            waist_circumference,
            hip_width,
            arm_length: arm_length(frame, factor, config),
            torso_length: torso_length(frame, factor, config),
            inseam_length: inseam_length(frame, factor, config),
            leg_opening,
        }
    }

    /// All slots with their field names, in declaration order.
    pub fn slots(&self) -> [(&'static str, &MeasurementValue); 8] {
        [
            ("shoulder_width", &self.shoulder_width),
            ("chest_circumference", &self.chest_circumference),
            ("waist_circumference", &self.waist_circumference),
            ("hip_width", &self.hip_width),
            ("arm_length", &self.arm_length),
            ("torso_length", &self.torso_length),
            ("inseam_length", &self.inseam_length),
            ("leg_opening", &self.leg_opening),
        ]
    }

    /// Number of slots that resolved to a value.
    pub fn available_count(&self) -> usize {
        self.slots().iter().filter(|(_, v)| v.is_available()).count()
    }

    /// Names of the slots that could not be computed.
    pub fn missing_slots(&self) -> Vec<&'static str> {
        self.slots()
            .iter()
            .filter(|(_, v)| !v.is_available())
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Scale a landmark-space distance to centimeters.
fn to_cm(distance: f32, factor: f32) -> f32 {
    distance * 100.0 * factor
}

/// Round to one decimal centimeter.
fn round_cm(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Round a confidence score to two decimals.
fn round_confidence(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

fn shoulder_width(frame: &LandmarkFrame, factor: f32, config: &EngineConfig) -> MeasurementValue {
    let threshold = config.visibility_threshold;
    let left = frame.get(LandmarkIndex::LeftShoulder);
    let right = frame.get(LandmarkIndex::RightShoulder);

    if !left.is_visible(threshold) || !right.is_visible(threshold) {
        return MeasurementValue::missing_cm("Shoulders not visible");
    }

    let width_cm = to_cm(left.position().distance(&right.position()), factor);
    let visibility_avg = (left.visibility + right.visibility) / 2.0;
    let confidence = visibility_avg.min(SHOULDER_CONFIDENCE_CAP);

    MeasurementValue::cm(round_cm(width_cm), round_confidence(confidence))
}

fn hip_width(frame: &LandmarkFrame, factor: f32, config: &EngineConfig) -> MeasurementValue {
    let threshold = config.visibility_threshold;
    let left = frame.get(LandmarkIndex::LeftHip);
    let right = frame.get(LandmarkIndex::RightHip);

    if !left.is_visible(threshold) || !right.is_visible(threshold) {
        return MeasurementValue::missing_cm("Hips not visible");
    }

    let width_cm = to_cm(left.position().distance(&right.position()), factor);
    let visibility_avg = (left.visibility + right.visibility) / 2.0;
    let confidence = visibility_avg.min(HIP_CONFIDENCE_CAP);

    MeasurementValue::cm(round_cm(width_cm), round_confidence(confidence))
}

/// Chest circumference estimated from shoulder width.
fn chest_circumference(shoulder_width_cm: Option<f32>, config: &EngineConfig) -> MeasurementValue {
    let Some(shoulder_cm) = shoulder_width_cm else {
        return MeasurementValue::missing_cm("Cannot calculate without shoulder reference");
    };

    MeasurementValue::cm(round_cm(shoulder_cm * config.chest_to_shoulder), CHEST_CONFIDENCE)
        .with_notes("Estimated from shoulder width")
}

/// Waist circumference estimated from hip width: the width is doubled to
/// approximate the hip circumference, then scaled by the waist-to-hip ratio.
fn waist_circumference(hip_width_cm: Option<f32>, config: &EngineConfig) -> MeasurementValue {
    let Some(hip_cm) = hip_width_cm else {
        return MeasurementValue::missing_cm("Cannot calculate without hip reference");
    };

    MeasurementValue::cm(round_cm(hip_cm * 2.0 * config.waist_to_hip), WAIST_CONFIDENCE)
        .with_notes("Estimated from hip width")
}

/// Shoulder-midpoint-to-wrist length, averaged over the visible wrists.
fn arm_length(frame: &LandmarkFrame, factor: f32, config: &EngineConfig) -> MeasurementValue {
    let shoulder_mid = shoulder_midpoint(frame);
    let wrists = [
        frame.get(LandmarkIndex::LeftWrist),
        frame.get(LandmarkIndex::RightWrist),
    ];

    let mut arms_measured = 0;
    let mut total_length = 0.0;
    for wrist in wrists {
        if wrist.is_visible(config.visibility_threshold) {
            total_length += shoulder_mid.distance(&wrist.position());
            arms_measured += 1;
        }
    }

    if arms_measured == 0 {
        return MeasurementValue::missing_cm("Arms not visible");
    }

    let avg_cm = to_cm(total_length / arms_measured as f32, factor);
    let confidence = if arms_measured == 2 {
        TWO_ARM_CONFIDENCE
    } else {
        ONE_ARM_CONFIDENCE
    };

    MeasurementValue::cm(round_cm(avg_cm), confidence)
        .with_notes(format!("Average of {arms_measured} arm(s)"))
}

/// Shoulder midpoint to hip midpoint.
fn torso_length(frame: &LandmarkFrame, factor: f32, config: &EngineConfig) -> MeasurementValue {
    let threshold = config.visibility_threshold;
    let shoulders_visible = frame.get(LandmarkIndex::LeftShoulder).is_visible(threshold)
        && frame.get(LandmarkIndex::RightShoulder).is_visible(threshold);
    let hips_visible = frame.get(LandmarkIndex::LeftHip).is_visible(threshold)
        && frame.get(LandmarkIndex::RightHip).is_visible(threshold);

    if !shoulders_visible || !hips_visible {
        return MeasurementValue::missing_cm("Shoulders or hips not visible");
    }

    let length_cm = to_cm(shoulder_midpoint(frame).distance(&hip_midpoint(frame)), factor);
    MeasurementValue::cm(round_cm(length_cm), TORSO_CONFIDENCE)
}

/// Hip-midpoint-to-ankle length, averaged over the visible ankles.
fn inseam_length(frame: &LandmarkFrame, factor: f32, config: &EngineConfig) -> MeasurementValue {
    let hip_mid = hip_midpoint(frame);
    let ankles = [
        frame.get(LandmarkIndex::LeftAnkle),
        frame.get(LandmarkIndex::RightAnkle),
    ];

    let mut legs_measured = 0;
    let mut total_length = 0.0;
    for ankle in ankles {
        if ankle.is_visible(config.visibility_threshold) {
            total_length += hip_mid.distance(&ankle.position());
            legs_measured += 1;
        }
    }

    if legs_measured == 0 {
        return MeasurementValue::missing_cm("Ankles not visible");
    }

    let avg_cm = to_cm(total_length / legs_measured as f32, factor);
    let confidence = if legs_measured == 2 {
        TWO_LEG_CONFIDENCE
    } else {
        ONE_LEG_CONFIDENCE
    };

    MeasurementValue::cm(round_cm(avg_cm), confidence)
        .with_notes(format!("Average of {legs_measured} leg(s)"))
}

/// Leg opening at the ankle, proportional to hip width with a fixed-size
/// fallback when the hips were not measurable.
fn leg_opening(
    frame: &LandmarkFrame,
    hip_width_cm: Option<f32>,
    config: &EngineConfig,
) -> MeasurementValue {
    let threshold = config.visibility_threshold;
    let left = frame.get(LandmarkIndex::LeftAnkle);
    let right = frame.get(LandmarkIndex::RightAnkle);

    if !left.is_visible(threshold) || !right.is_visible(threshold) {
        return MeasurementValue::missing_cm("Ankles not visible");
    }

    let (opening_cm, confidence) = match hip_width_cm {
        Some(hip_cm) => (hip_cm * config.leg_to_hip, LEG_OPENING_CONFIDENCE),
        None => (config.leg_opening_fallback_cm, LEG_OPENING_FALLBACK_CONFIDENCE),
    };

    MeasurementValue::cm(round_cm(opening_cm), confidence)
        .with_notes("Estimated from hip proportions")
}

fn shoulder_midpoint(frame: &LandmarkFrame) -> Point3 {
    frame
        .get(LandmarkIndex::LeftShoulder)
        .position()
        .midpoint(&frame.get(LandmarkIndex::RightShoulder).position())
}

fn hip_midpoint(frame: &LandmarkFrame) -> Point3 {
    frame
        .get(LandmarkIndex::LeftHip)
        .position()
        .midpoint(&frame.get(LandmarkIndex::RightHip).position())
}
