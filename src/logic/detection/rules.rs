//! Detection Rules & Thresholds
//!
//! Product constants for scoring and aggregation.
//! No detection logic here - only constants and config.

use serde::{Deserialize, Serialize};

// ============================================================================
// SCORING WEIGHTS (points per found signal, by evidence category)
// ============================================================================

/// Points per found domain signal (primary or tracker)
pub const DOMAIN_SIGNAL_WEIGHT: u32 = 10;

/// Points per found script signal
pub const SCRIPT_SIGNAL_WEIGHT: u32 = 15;

/// Points per found fingerprint-method signal
pub const FINGERPRINT_SIGNAL_WEIGHT: u32 = 5;

/// Points per found storage signal
pub const STORAGE_SIGNAL_WEIGHT: u32 = 8;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Risk score ceiling for a single profile and for the aggregated total
pub const MAX_RISK_SCORE: u32 = 100;

/// At or above this risk score, a profile counts as detected
pub const DETECTION_THRESHOLD: u32 = 30;

/// A non-detected profile is still surfaced when confidence is strictly
/// above this - a deliberately low bar so borderline evidence stays visible
pub const SURFACE_CONFIDENCE_MIN: u8 = 20;

/// Risk score at which a surfaced profile counts as high-scoring
pub const HIGH_SCORE_THRESHOLD: u32 = 50;

/// Aggregated total at or above which the verdict is Critical
pub const CRITICAL_TOTAL_THRESHOLD: u32 = 80;

/// Aggregated total at or above which the verdict is at least High
pub const HIGH_TOTAL_THRESHOLD: u32 = 50;

/// Aggregated total at or above which the verdict is at least Medium
pub const MEDIUM_TOTAL_THRESHOLD: u32 = 30;

// ============================================================================
// OUTPUT CAPS
// ============================================================================

/// Storage-key signals emitted per profile (first N declared keys)
pub const MAX_STORAGE_KEY_SIGNALS: usize = 10;

/// Recommendations kept per profile (first N in generation order)
pub const MAX_RECOMMENDATIONS: usize = 5;

// ============================================================================
// CONFIGURABLE THRESHOLDS (for runtime tuning)
// ============================================================================

/// Thresholds for detection and aggregation (configurable).
///
/// Scoring weights are intentionally not part of this struct - they are
/// fixed product constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionThresholds {
    /// Risk score at or above which a profile is detected
    pub detection_min: u32,
    /// Confidence strictly above this surfaces a non-detected profile
    pub surface_confidence_min: u8,
    /// Risk score counting as high-scoring in the verdict ladder
    pub high_score_min: u32,
    /// Aggregated total for a Critical verdict
    pub critical_total_min: u32,
    /// Aggregated total for a High verdict
    pub high_total_min: u32,
    /// Aggregated total for a Medium verdict
    pub medium_total_min: u32,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            detection_min: DETECTION_THRESHOLD,
            surface_confidence_min: SURFACE_CONFIDENCE_MIN,
            high_score_min: HIGH_SCORE_THRESHOLD,
            critical_total_min: CRITICAL_TOTAL_THRESHOLD,
            high_total_min: HIGH_TOTAL_THRESHOLD,
            medium_total_min: MEDIUM_TOTAL_THRESHOLD,
        }
    }
}

impl DetectionThresholds {
    /// High sensitivity - lower bars, more surfaced profiles
    pub fn high_sensitivity() -> Self {
        Self {
            detection_min: 20,
            surface_confidence_min: 10,
            high_score_min: 40,
            ..Default::default()
        }
    }

    /// Low sensitivity - higher bars, fewer surfaced profiles
    pub fn low_sensitivity() -> Self {
        Self {
            detection_min: 40,
            surface_confidence_min: 35,
            high_score_min: 60,
            ..Default::default()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let t = DetectionThresholds::default();
        assert_eq!(t.detection_min, DETECTION_THRESHOLD);
        assert_eq!(t.surface_confidence_min, SURFACE_CONFIDENCE_MIN);
        assert_eq!(t.high_score_min, HIGH_SCORE_THRESHOLD);
        assert_eq!(t.critical_total_min, CRITICAL_TOTAL_THRESHOLD);
    }

    #[test]
    fn test_sensitivity_presets() {
        let high = DetectionThresholds::high_sensitivity();
        let low = DetectionThresholds::low_sensitivity();
        assert!(high.detection_min < DETECTION_THRESHOLD);
        assert!(low.detection_min > DETECTION_THRESHOLD);
        assert!(high.surface_confidence_min < low.surface_confidence_min);
    }
}
