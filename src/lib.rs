//! # silhouette-fit
//!
//! Calibrated body measurements and garment sizing from full-body pose
//! landmarks.
//!
//! This crate provides:
//! - **Calibration**: a landmark-space-to-centimeters factor derived from the
//!   user's known height
//! - **Body Measurements**: eight named measurements (widths, lengths,
//!   circumferences), each with a confidence score
//! - **Garment Sizing**: shirt, pants, and jacket recommendations with ease
//!   allowances, in inches
//!
//! The input is a frame of 33 world landmarks from an external pose detector
//! (MediaPipe-style index order), plus the subject's stated height.
//!
//! ## Pipeline Overview
//!
//! 1. Calibrate: nose-to-heel span vs. stated height gives the scale factor
//! 2. Measure: direct slots from landmark distances, derived slots from
//!    anthropometric ratios, in dependency order
//! 3. Derive garments: apply ease/allowance constants and convert to inches
//! 4. Classify: full / partial / failed from slot availability, with
//!    warnings naming whatever is missing
//!
//! Hidden landmarks never fail the computation: the affected fields carry
//! `value: None` with `confidence: 0.0` and an inline reason instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use silhouette_fit::{Landmark, LandmarkFrame, MeasurementEngine, ResultStatus};
//!
//! // 33 landmarks from the external pose detector, in fixed anatomical order.
//! let landmarks: Vec<Landmark> = (0..33)
//!     .map(|i| Landmark::new(0.0, i as f32 * 0.05 - 0.6, 0.0, 1.0))
//!     .collect();
//! let frame = LandmarkFrame::new(landmarks).unwrap();
//!
//! let engine = MeasurementEngine::new();
//! let report = engine.compute(&frame, 175.0, None).unwrap();
//!
//! assert_eq!(report.status, ResultStatus::FullSuccess);
//! println!("shoulder: {:?}", report.body_measurements.shoulder_width.value);
//! ```
//!
//! ## Custom Detectors
//!
//! Implement the [`PoseDetector`] trait to plug in a real pose model:
//!
//! ```rust
//! use silhouette_fit::{LandmarkFrame, PoseDetector, Result};
//!
//! struct MyDetector { /* ... */ }
//!
//! impl PoseDetector for MyDetector {
//!     fn detect(&self, photo: &[u8]) -> Result<Option<LandmarkFrame>> {
//!         // Run the pose model; return Ok(None) when no body is found.
//!         let _ = photo;
//!         Ok(None)
//!     }
//! }
//! ```

mod calibrate;
mod config;
mod engine;
mod error;
mod garment;
mod measure;
mod types;

pub use calibrate::{calibrate, CalibrationResult};
pub use config::EngineConfig;
pub use engine::{
    MeasurementEngine, MeasurementReport, PoseDetector, ReplayDetector, ResultStatus,
    MAX_HEIGHT_CM, MIN_HEIGHT_CM,
};
pub use error::{Error, Result};
pub use garment::{
    cm_to_inches, inches_to_cm, round_to_half_inch, GarmentMeasurements, JacketMeasurements,
    PantsMeasurements, ShirtMeasurements, CM_PER_INCH,
};
pub use measure::BodyMeasurements;
pub use types::{Landmark, LandmarkFrame, LandmarkIndex, MeasurementValue, Point3};
