//! Garment sizing derived from body measurements.
//!
//! Garment fields are reported in inches, rounded to the nearest half inch,
//! with ease and allowance rationale recorded in each field's notes. A null
//! body measurement propagates as a null garment field with zero confidence;
//! ease is never applied to a missing base.

use serde::Serialize;

use crate::config::EngineConfig;
use crate::measure::BodyMeasurements;
use crate::types::MeasurementValue;

/// Pants rise is a proportion estimate, not a landmark distance, so its
/// confidence is fixed rather than inherited.
const RISE_CONFIDENCE: f32 = 0.70;

pub const CM_PER_INCH: f32 = 2.54;

pub fn cm_to_inches(cm: f32) -> f32 {
    cm / CM_PER_INCH
}

pub fn inches_to_cm(inches: f32) -> f32 {
    inches * CM_PER_INCH
}

/// Round to the nearest 0.5 inch, the granularity of garment sizing.
pub fn round_to_half_inch(inches: f32) -> f32 {
    (inches * 2.0).round() / 2.0
}

/// Recommended shirt measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShirtMeasurements {
    pub shoulder: MeasurementValue,
    pub chest: MeasurementValue,
    pub sleeves: MeasurementValue,
    pub length: MeasurementValue,
}

impl ShirtMeasurements {
    pub fn from_body(body: &BodyMeasurements, config: &EngineConfig) -> Self {
        let shoulder = match body.shoulder_width.value {
            Some(cm) => MeasurementValue::inches(
                round_to_half_inch(cm_to_inches(cm)),
                body.shoulder_width.confidence,
            )
            .with_notes("Direct body measurement"),
            None => MeasurementValue::missing_inches(),
        };

        let chest = match body.chest_circumference.value {
            Some(cm) => {
                let with_ease_cm = cm + inches_to_cm(config.shirt_chest_ease_in);
                MeasurementValue::inches(
                    round_to_half_inch(cm_to_inches(with_ease_cm)),
                    body.chest_circumference.confidence,
                )
                .with_notes(format!(
                    "Includes {:.0}-inch ease for regular fit",
                    config.shirt_chest_ease_in
                ))
            }
            None => MeasurementValue::missing_inches(),
        };

        let sleeves = match body.arm_length.value {
            Some(arm_cm) => {
                let shoulder_cm = body
                    .shoulder_width
                    .value
                    .unwrap_or(config.shoulder_fallback_cm);
                let sleeve_cm = arm_cm + shoulder_cm / 2.0;
                MeasurementValue::inches(
                    round_to_half_inch(cm_to_inches(sleeve_cm)),
                    body.arm_length.confidence,
                )
                .with_notes("Measured from center back to wrist")
            }
            None => MeasurementValue::missing_inches(),
        };

        let length = match body.torso_length.value {
            Some(torso_cm) => MeasurementValue::inches(
                round_to_half_inch(cm_to_inches(torso_cm + config.shirt_length_allowance_cm)),
                body.torso_length.confidence,
            )
            .with_notes("Measured from high point shoulder to hem"),
            None => MeasurementValue::missing_inches(),
        };

        Self {
            shoulder,
            chest,
            sleeves,
            length,
        }
    }
}

/// Recommended pants measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PantsMeasurements {
    pub waist: MeasurementValue,
    pub inseam: MeasurementValue,
    pub rise: MeasurementValue,
    pub leg: MeasurementValue,
}

impl PantsMeasurements {
    pub fn from_body(body: &BodyMeasurements, config: &EngineConfig) -> Self {
        let waist = match body.waist_circumference.value {
            Some(cm) => MeasurementValue::inches(
                round_to_half_inch(cm_to_inches(cm)),
                body.waist_circumference.confidence,
            )
            .with_notes("Natural waist measurement"),
            None => MeasurementValue::missing_inches(),
        };

        let inseam = match body.inseam_length.value {
            Some(cm) => MeasurementValue::inches(
                round_to_half_inch(cm_to_inches(cm)),
                body.inseam_length.confidence,
            )
            .with_notes("Crotch to ankle measurement"),
            None => MeasurementValue::missing_inches(),
        };

        let rise = match body.torso_length.value {
            Some(torso_cm) => MeasurementValue::inches(
                round_to_half_inch(cm_to_inches(torso_cm * config.rise_to_torso)),
                RISE_CONFIDENCE,
            )
            .with_notes("Estimated from torso proportions"),
            None => MeasurementValue::missing_inches(),
        };

        let leg = match body.leg_opening.value {
            Some(cm) => MeasurementValue::inches(
                round_to_half_inch(cm_to_inches(cm)),
                body.leg_opening.confidence,
            )
            .with_notes("Leg opening diameter"),
            None => MeasurementValue::missing_inches(),
        };

        Self {
            waist,
            inseam,
            rise,
            leg,
        }
    }
}

/// Recommended jacket measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JacketMeasurements {
    pub shoulder: MeasurementValue,
    pub chest: MeasurementValue,
    pub sleeves: MeasurementValue,
    pub length: MeasurementValue,
}

impl JacketMeasurements {
    pub fn from_body(body: &BodyMeasurements, config: &EngineConfig) -> Self {
        let shoulder = match body.shoulder_width.value {
            Some(cm) => MeasurementValue::inches(
                round_to_half_inch(cm_to_inches(cm + config.jacket_shoulder_allowance_cm)),
                body.shoulder_width.confidence,
            )
            .with_notes("Slightly wider than shirt for layering"),
            None => MeasurementValue::missing_inches(),
        };

        let chest = match body.chest_circumference.value {
            Some(cm) => {
                let with_ease_cm = cm + inches_to_cm(config.jacket_chest_ease_in);
                MeasurementValue::inches(
                    round_to_half_inch(cm_to_inches(with_ease_cm)),
                    body.chest_circumference.confidence,
                )
                .with_notes(format!(
                    "Includes {:.0}-inch ease for jacket fit",
                    config.jacket_chest_ease_in
                ))
            }
            None => MeasurementValue::missing_inches(),
        };

        let sleeves = match body.arm_length.value {
            Some(arm_cm) => {
                let shoulder_cm = body
                    .shoulder_width
                    .value
                    .unwrap_or(config.shoulder_fallback_cm);
                let sleeve_cm = arm_cm + shoulder_cm / 2.0 + config.jacket_sleeve_allowance_cm;
                MeasurementValue::inches(
                    round_to_half_inch(cm_to_inches(sleeve_cm)),
                    body.arm_length.confidence,
                )
                .with_notes("Slightly longer than shirt sleeve")
            }
            None => MeasurementValue::missing_inches(),
        };

        let length = match body.torso_length.value {
            Some(torso_cm) => MeasurementValue::inches(
                round_to_half_inch(cm_to_inches(torso_cm + config.jacket_length_allowance_cm)),
                body.torso_length.confidence,
            )
            .with_notes("Standard jacket length"),
            None => MeasurementValue::missing_inches(),
        };

        Self {
            shoulder,
            chest,
            sleeves,
            length,
        }
    }
}

/// Sizing recommendations for every supported garment type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GarmentMeasurements {
    pub shirt: ShirtMeasurements,
    pub pants: PantsMeasurements,
    pub jacket: JacketMeasurements,
}

impl GarmentMeasurements {
    pub fn from_body(body: &BodyMeasurements, config: &EngineConfig) -> Self {
        Self {
            shirt: ShirtMeasurements::from_body(body, config),
            pants: PantsMeasurements::from_body(body, config),
            jacket: JacketMeasurements::from_body(body, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Body measurements for a medium build, every slot available.
    fn full_body() -> BodyMeasurements {
        BodyMeasurements {
            shoulder_width: MeasurementValue::cm(45.0, 0.98),
            chest_circumference: MeasurementValue::cm(99.0, 0.75)
                .with_notes("Estimated from shoulder width"),
            waist_circumference: MeasurementValue::cm(81.0, 0.70)
                .with_notes("Estimated from hip width"),
            hip_width: MeasurementValue::cm(45.0, 0.92),
            arm_length: MeasurementValue::cm(58.0, 0.93).with_notes("Average of 2 arm(s)"),
            torso_length: MeasurementValue::cm(48.0, 0.90),
            inseam_length: MeasurementValue::cm(78.0, 0.88).with_notes("Average of 2 leg(s)"),
            leg_opening: MeasurementValue::cm(21.2, 0.75)
                .with_notes("Estimated from hip proportions"),
        }
    }

    fn without_slot(mut body: BodyMeasurements, slot: &str) -> BodyMeasurements {
        let missing = MeasurementValue::missing_cm("not visible");
        match slot {
            "shoulder_width" => body.shoulder_width = missing,
            "chest_circumference" => body.chest_circumference = missing,
            "waist_circumference" => body.waist_circumference = missing,
            "arm_length" => body.arm_length = missing,
            "torso_length" => body.torso_length = missing,
            "inseam_length" => body.inseam_length = missing,
            "leg_opening" => body.leg_opening = missing,
            other => panic!("unknown slot {other}"),
        }
        body
    }

    #[test]
    fn unit_conversion_round_trip() {
        for cm in [2.54, 45.0, 99.2, 180.0] {
            let back = inches_to_cm(cm_to_inches(cm));
            assert!((back - cm).abs() < 0.05, "round trip drifted for {cm}");
        }
    }

    #[test]
    fn half_inch_rounding() {
        assert_eq!(round_to_half_inch(17.7), 17.5);
        assert_eq!(round_to_half_inch(17.8), 18.0);
        assert_eq!(round_to_half_inch(17.25), 17.5);
        assert_eq!(round_to_half_inch(17.0), 17.0);
    }

    #[test]
    fn shirt_shoulder_is_direct_conversion() {
        let shirt = ShirtMeasurements::from_body(&full_body(), &EngineConfig::default());
        // 45.0cm = 17.7in -> 17.5
        assert_eq!(shirt.shoulder.value, Some(17.5));
        assert_eq!(shirt.shoulder.confidence, 0.98);
        assert_eq!(shirt.shoulder.unit, "inches");
    }

    #[test]
    fn shirt_chest_adds_two_inch_ease() {
        let shirt = ShirtMeasurements::from_body(&full_body(), &EngineConfig::default());
        // 99.0cm + 5.08cm ease = 104.08cm = 40.97in -> 41.0
        assert_eq!(shirt.chest.value, Some(41.0));
        assert_eq!(
            shirt.chest.notes.as_deref(),
            Some("Includes 2-inch ease for regular fit")
        );
    }

    #[test]
    fn shirt_sleeve_spans_center_back_to_wrist() {
        let shirt = ShirtMeasurements::from_body(&full_body(), &EngineConfig::default());
        // 58.0 + 45.0/2 = 80.5cm = 31.69in -> 31.5
        assert_eq!(shirt.sleeves.value, Some(31.5));
    }

    #[test]
    fn shirt_sleeve_uses_fallback_shoulder() {
        let body = without_slot(full_body(), "shoulder_width");
        let shirt = ShirtMeasurements::from_body(&body, &EngineConfig::default());
        // 58.0 + 45.0/2 with the configured default shoulder
        assert_eq!(shirt.sleeves.value, Some(31.5));
        // The shoulder field itself propagates as missing.
        assert_eq!(shirt.shoulder.value, None);
        assert_eq!(shirt.shoulder.confidence, 0.0);
    }

    #[test]
    fn shirt_length_adds_coverage_allowance() {
        let shirt = ShirtMeasurements::from_body(&full_body(), &EngineConfig::default());
        // 48.0 + 15.0 = 63.0cm = 24.8in -> 25.0
        assert_eq!(shirt.length.value, Some(25.0));
    }

    #[test]
    fn jacket_adds_structure_over_shirt() {
        let config = EngineConfig::default();
        let body = full_body();
        let shirt = ShirtMeasurements::from_body(&body, &config);
        let jacket = JacketMeasurements::from_body(&body, &config);

        // 46.0cm = 18.11in -> 18.0
        assert_eq!(jacket.shoulder.value, Some(18.0));
        // 99.0 + 10.16 = 109.16cm = 42.98in -> 43.0
        assert_eq!(jacket.chest.value, Some(43.0));
        // 58.0 + 22.5 + 2.5 = 83.0cm = 32.68in -> 32.5
        assert_eq!(jacket.sleeves.value, Some(32.5));
        // 48.0 + 18.0 = 66.0cm = 25.98in -> 26.0
        assert_eq!(jacket.length.value, Some(26.0));

        assert!(jacket.chest.value > shirt.chest.value);
        assert!(jacket.sleeves.value > shirt.sleeves.value);
        assert!(jacket.length.value > shirt.length.value);
    }

    #[test]
    fn pants_from_body() {
        let pants = PantsMeasurements::from_body(&full_body(), &EngineConfig::default());
        // 81.0cm = 31.89in -> 32.0, no ease
        assert_eq!(pants.waist.value, Some(32.0));
        // 78.0cm = 30.7in -> 30.5
        assert_eq!(pants.inseam.value, Some(30.5));
        // 48.0 * 0.28 = 13.44cm = 5.29in -> 5.5
        assert_eq!(pants.rise.value, Some(5.5));
        assert_eq!(pants.rise.confidence, RISE_CONFIDENCE);
        // 21.2cm = 8.35in -> 8.5
        assert_eq!(pants.leg.value, Some(8.5));
    }

    #[test]
    fn null_base_propagates_without_notes() {
        let config = EngineConfig::default();
        let body = without_slot(full_body(), "chest_circumference");
        let shirt = ShirtMeasurements::from_body(&body, &config);

        assert_eq!(shirt.chest.value, None);
        assert_eq!(shirt.chest.confidence, 0.0);
        assert!(shirt.chest.notes.is_none());
        assert!(shirt.chest.error.is_none());

        let body = without_slot(full_body(), "torso_length");
        let pants = PantsMeasurements::from_body(&body, &config);
        assert_eq!(pants.rise.value, None);
        assert_eq!(pants.rise.confidence, 0.0);
    }

    #[test]
    fn arm_missing_nulls_sleeves_for_both_garments() {
        let config = EngineConfig::default();
        let body = without_slot(full_body(), "arm_length");
        let shirt = ShirtMeasurements::from_body(&body, &config);
        let jacket = JacketMeasurements::from_body(&body, &config);
        assert_eq!(shirt.sleeves.value, None);
        assert_eq!(jacket.sleeves.value, None);
    }
}
