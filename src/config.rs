//! Tunable constants for the measurement pipeline.
//!
//! The anthropometric ratios and the nose-to-heel height correction are
//! empirical estimates without per-population calibration data, so they are
//! exposed as configuration rather than hard-coded. The defaults reproduce
//! the reference behavior.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum landmark visibility for a point to participate in a
    /// measurement.
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f32,
    /// Multiplier from the nose-to-heel span to full standing height; the
    /// nose sits ~13-15% of body height below the head crown.
    #[serde(default = "default_height_correction")]
    pub height_correction: f32,
    /// Chest circumference as a multiple of shoulder width.
    #[serde(default = "default_chest_to_shoulder")]
    pub chest_to_shoulder: f32,
    /// Waist-to-hip circumference ratio.
    #[serde(default = "default_waist_to_hip")]
    pub waist_to_hip: f32,
    /// Leg opening as a fraction of hip width.
    #[serde(default = "default_leg_to_hip")]
    pub leg_to_hip: f32,
    /// Pants rise as a fraction of torso length.
    #[serde(default = "default_rise_to_torso")]
    pub rise_to_torso: f32,
    /// Leg opening used when hip width is unavailable (cm).
    #[serde(default = "default_leg_opening_fallback_cm")]
    pub leg_opening_fallback_cm: f32,
    /// Shoulder width assumed for sleeve estimation when the measured value
    /// is unavailable (cm).
    #[serde(default = "default_shoulder_fallback_cm")]
    pub shoulder_fallback_cm: f32,
    /// Chest ease for a regular-fit shirt (inches).
    #[serde(default = "default_shirt_chest_ease_in")]
    pub shirt_chest_ease_in: f32,
    /// Chest ease for a jacket worn over layers (inches).
    #[serde(default = "default_jacket_chest_ease_in")]
    pub jacket_chest_ease_in: f32,
    /// Extra shoulder width for jacket structure (cm).
    #[serde(default = "default_jacket_shoulder_allowance_cm")]
    pub jacket_shoulder_allowance_cm: f32,
    /// Extra sleeve length for a jacket over a shirt cuff (cm).
    #[serde(default = "default_jacket_sleeve_allowance_cm")]
    pub jacket_sleeve_allowance_cm: f32,
    /// Shirt length beyond torso length, shoulder to hem (cm).
    #[serde(default = "default_shirt_length_allowance_cm")]
    pub shirt_length_allowance_cm: f32,
    /// Jacket length beyond torso length (cm).
    #[serde(default = "default_jacket_length_allowance_cm")]
    pub jacket_length_allowance_cm: f32,
}

fn default_visibility_threshold() -> f32 { 0.5 }
fn default_height_correction() -> f32 { 1.15 }
fn default_chest_to_shoulder() -> f32 { 2.2 }
fn default_waist_to_hip() -> f32 { 0.90 }
fn default_leg_to_hip() -> f32 { 0.47 }
fn default_rise_to_torso() -> f32 { 0.28 }
fn default_leg_opening_fallback_cm() -> f32 { 18.0 }
fn default_shoulder_fallback_cm() -> f32 { 45.0 }
fn default_shirt_chest_ease_in() -> f32 { 2.0 }
fn default_jacket_chest_ease_in() -> f32 { 4.0 }
fn default_jacket_shoulder_allowance_cm() -> f32 { 1.0 }
fn default_jacket_sleeve_allowance_cm() -> f32 { 2.5 }
fn default_shirt_length_allowance_cm() -> f32 { 15.0 }
fn default_jacket_length_allowance_cm() -> f32 { 18.0 }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: default_visibility_threshold(),
            height_correction: default_height_correction(),
            chest_to_shoulder: default_chest_to_shoulder(),
            waist_to_hip: default_waist_to_hip(),
            leg_to_hip: default_leg_to_hip(),
            rise_to_torso: default_rise_to_torso(),
            leg_opening_fallback_cm: default_leg_opening_fallback_cm(),
            shoulder_fallback_cm: default_shoulder_fallback_cm(),
            shirt_chest_ease_in: default_shirt_chest_ease_in(),
            jacket_chest_ease_in: default_jacket_chest_ease_in(),
            jacket_shoulder_allowance_cm: default_jacket_shoulder_allowance_cm(),
            jacket_sleeve_allowance_cm: default_jacket_sleeve_allowance_cm(),
            shirt_length_allowance_cm: default_shirt_length_allowance_cm(),
            jacket_length_allowance_cm: default_jacket_length_allowance_cm(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.visibility_threshold, 0.5);
        assert_eq!(config.height_correction, 1.15);
        assert_eq!(config.chest_to_shoulder, 2.2);
        assert_eq!(config.waist_to_hip, 0.90);
        assert_eq!(config.leg_to_hip, 0.47);
        assert_eq!(config.rise_to_torso, 0.28);
        assert_eq!(config.leg_opening_fallback_cm, 18.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"visibility_threshold": 0.6}"#).unwrap();
        assert_eq!(config.visibility_threshold, 0.6);
        assert_eq!(config.height_correction, 1.15);
        assert_eq!(config.shirt_chest_ease_in, 2.0);
    }
}
