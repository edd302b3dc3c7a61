//! Detection Module
//!
//! The target-detection / risk-scoring engine: evaluates the observed
//! browser signals against every catalog profile and produces a ranked,
//! explainable risk assessment.
//!
//! ## Structure
//! - `types`: inputs (SignalBundle, PageContext), signals, results
//! - `rules`: scoring weights, thresholds, sensitivity presets
//! - `evaluators`: the four per-category evidence extractors
//! - `scorer`: per-profile weighted scoring
//! - `recommendations`: advisory text generation
//! - `aggregator`: full-catalog run, ranking, overall verdict
//!
//! ## Usage
//! ```ignore
//! use privacy_audit_core::logic::detection::{detect_all, PageContext, SignalBundle};
//!
//! let bundle = SignalBundle::new().with_canvas(true).with_webgl(true);
//! let report = detect_all(&bundle, None);
//! println!("overall risk: {}", report.overall_risk);
//! ```

pub mod aggregator;
pub mod evaluators;
pub mod recommendations;
pub mod rules;
pub mod scorer;
pub mod types;


// Re-export main types for convenience
pub use types::{
    DetectionSignal, DetectionSummary, FullDetectionResult, PageContext, Severity, SignalBundle,
    SignalType, TargetDetectionResult,
};

pub use rules::{
    DetectionThresholds, DETECTION_THRESHOLD, DOMAIN_SIGNAL_WEIGHT, FINGERPRINT_SIGNAL_WEIGHT,
    SCRIPT_SIGNAL_WEIGHT, STORAGE_SIGNAL_WEIGHT, SURFACE_CONFIDENCE_MIN,
};

pub use aggregator::{detect_all, detect_all_in, detect_one};
pub use scorer::{score_profile, score_profile_with_thresholds};
