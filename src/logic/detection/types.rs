//! Detection Types
//!
//! Inputs, evidence signals, and result records for the detection engine.
//! No logic here - only data structures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::logic::profiles::{AdversaryProfile, RiskLevel};

// ============================================================================
// SIGNAL CLASSIFICATION
// ============================================================================

/// Category of evidence a signal belongs to.
///
/// `Cookie` and `Api` are part of the contract for downstream consumers but
/// are not produced by the current evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalType {
    Domain,
    Script,
    Cookie,
    Api,
    Fingerprint,
    Storage,
}

impl SignalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Domain => "domain",
            SignalType::Script => "script",
            SignalType::Cookie => "cookie",
            SignalType::Api => "api",
            SignalType::Fingerprint => "fingerprint",
            SignalType::Storage => "storage",
        }
    }
}

impl std::fmt::Display for SignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How strongly one signal, if found, implicates the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DETECTION SIGNAL
// ============================================================================

/// One unit of evidence that a specific tracking indicator is present.
///
/// Ephemeral - produced per evaluation call and discarded with the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSignal {
    pub signal_type: SignalType,
    pub name: String,
    pub found: bool,
    pub severity: Severity,
    pub description: String,
}

impl DetectionSignal {
    pub fn new(
        signal_type: SignalType,
        name: impl Into<String>,
        found: bool,
        severity: Severity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            signal_type,
            name: name.into(),
            found,
            severity,
            description: description.into(),
        }
    }
}

// ============================================================================
// SIGNAL BUNDLE (collector output, read-only to this engine)
// ============================================================================

/// Flat record of what the collector pipeline observed about the browser.
///
/// Only the fields below are consumed by the detection engine; the engine
/// never mutates a bundle. Defaults are all-false, meaning "capability not
/// observed", which degrades every evaluator to not-found.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SignalBundle {
    pub canvas_supported: bool,
    pub webgl_supported: bool,
    pub audio_supported: bool,
    pub sensors_supported: bool,
    pub battery_supported: bool,
    pub webrtc_supported: bool,
    pub local_storage_available: bool,
}

impl SignalBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canvas(mut self, supported: bool) -> Self {
        self.canvas_supported = supported;
        self
    }

    pub fn with_webgl(mut self, supported: bool) -> Self {
        self.webgl_supported = supported;
        self
    }

    pub fn with_audio(mut self, supported: bool) -> Self {
        self.audio_supported = supported;
        self
    }

    pub fn with_sensors(mut self, supported: bool) -> Self {
        self.sensors_supported = supported;
        self
    }

    pub fn with_battery(mut self, supported: bool) -> Self {
        self.battery_supported = supported;
        self
    }

    pub fn with_webrtc(mut self, supported: bool) -> Self {
        self.webrtc_supported = supported;
        self
    }

    pub fn with_local_storage(mut self, available: bool) -> Self {
        self.local_storage_available = available;
        self
    }
}

// ============================================================================
// PAGE CONTEXT (optional observation input)
// ============================================================================

/// What was observed on the current page.
///
/// Optional everywhere it is consumed - absence means "nothing observed",
/// never an error. `cookies` and `local_storage` are part of the collector
/// contract but unused by the current evaluators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContext {
    pub domains: Vec<String>,
    pub scripts: Vec<String>,
    pub cookies: Vec<String>,
    pub local_storage: Vec<String>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domains(mut self, domains: Vec<String>) -> Self {
        self.domains = domains;
        self
    }

    pub fn with_scripts(mut self, scripts: Vec<String>) -> Self {
        self.scripts = scripts;
        self
    }

    pub fn with_cookies(mut self, cookies: Vec<String>) -> Self {
        self.cookies = cookies;
        self
    }

    pub fn with_local_storage(mut self, keys: Vec<String>) -> Self {
        self.local_storage = keys;
        self
    }
}

// ============================================================================
// RESULTS
// ============================================================================

/// Outcome of scoring one profile against one observation set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetDetectionResult {
    pub profile: AdversaryProfile,
    pub detected: bool,
    /// Percentage of the profile's possible signals that were found (0-100)
    pub confidence: u8,
    /// Found-only subset, in canonical evaluator order
    pub signals: Vec<DetectionSignal>,
    /// Weighted found-signal score, clamped to 0-100
    pub risk_score: u32,
    /// At most 5 advisories, in generation order
    pub recommendations: Vec<String>,
}

/// Outcome of a full catalog run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullDetectionResult {
    /// Surfaced results, descending by risk score (stable on ties)
    pub results: Vec<TargetDetectionResult>,
    pub overall_risk: RiskLevel,
    /// Sum of surfaced risk scores, capped at 100
    pub total_risk_score: u32,
    /// Profiles scoring >= 50 or rated Critical in the catalog
    pub critical_targets: Vec<AdversaryProfile>,
    /// Every surfaced result's found signals, in result order
    pub all_signals: Vec<DetectionSignal>,
}

/// Compact rollup for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct DetectionSummary {
    pub surfaced: usize,
    pub detected: usize,
    pub found_signals: usize,
    pub by_severity: HashMap<String, usize>,
}

impl FullDetectionResult {
    pub fn summary(&self) -> DetectionSummary {
        let mut by_severity = HashMap::new();
        for signal in &self.all_signals {
            *by_severity
                .entry(signal.severity.as_str().to_string())
                .or_insert(0) += 1;
        }

        DetectionSummary {
            surfaced: self.results.len(),
            detected: self.results.iter().filter(|r| r.detected).count(),
            found_signals: self.all_signals.len(),
            by_severity,
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
    fn test_bundle_builder() {
        let bundle = SignalBundle::new()
            .with_canvas(true)
            .with_webgl(true)
            .with_local_storage(true);

        assert!(bundle.canvas_supported);
        assert!(bundle.webgl_supported);
        assert!(!bundle.audio_supported);
        assert!(bundle.local_storage_available);
    }

    #[test]
    fn test_context_builder() {
        let ctx = PageContext::new()
            .with_domains(vec!["tracker.example".to_string()])
            .with_scripts(vec!["https://cdn.example/tag.js".to_string()]);

        assert_eq!(ctx.domains.len(), 1);
        assert_eq!(ctx.scripts.len(), 1);
        assert!(ctx.cookies.is_empty());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_signal_type_display() {
        assert_eq!(SignalType::Fingerprint.to_string(), "fingerprint");
        assert_eq!(SignalType::Domain.as_str(), "domain");
    }
}
