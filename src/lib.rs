//! Privacy Audit Core - Target Detection Engine
//!
//! Takes the browser signal bundle produced by the collector pipeline plus
//! an optional page context and evaluates them against a static catalog of
//! known tracking platforms, producing a ranked, explainable risk report.
//!
//! The engine is synchronous and pure: the catalog is read-only after first
//! use, every run is a function of its inputs only, and results are
//! byte-identical across repeated calls with the same inputs.
//!
//! ## Usage
//! ```
//! use privacy_audit_core::{detect_all, PageContext, SignalBundle};
//!
//! let bundle = SignalBundle::new().with_canvas(true).with_webgl(true);
//! let ctx = PageContext::new()
//!     .with_domains(vec!["g.alicdn.com".to_string()]);
//!
//! let report = detect_all(&bundle, Some(&ctx));
//! for result in &report.results {
//!     println!("{}: score {} ({}%)", result.profile.name, result.risk_score, result.confidence);
//! }
//! ```

pub mod logic;

// Flat re-exports for embedding hosts
pub use logic::detection::{
    detect_all, detect_all_in, detect_one, score_profile, score_profile_with_thresholds,
    DetectionSignal, DetectionSummary, DetectionThresholds, FullDetectionResult, PageContext,
    Severity, SignalBundle, SignalType, TargetDetectionResult,
};
pub use logic::profiles::{
    catalog, catalog_stats, find_profile, profiles_by_category, profiles_by_risk,
    AdversaryProfile, CatalogStats, Countermeasures, FingerprintMethods, KnownVulnerability,
    RegionScope, RiskLevel, TrackingInfra, VulnerabilityStatus,
};
