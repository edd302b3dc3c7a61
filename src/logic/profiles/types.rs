//! Adversary Profile Types
//!
//! Schema for the static tracking-platform catalog.
//! No logic here - only data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Risk tier for a platform or an aggregated detection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Little to no tracking expected
    Low,
    /// Standard commercial tracking
    Medium,
    /// Aggressive cross-site tracking
    High,
    /// Full fingerprinting stack, cross-border data flows
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
            RiskLevel::Critical => 3,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#10b981",      // Green
            RiskLevel::Medium => "#f59e0b",   // Yellow
            RiskLevel::High => "#f97316",     // Orange
            RiskLevel::Critical => "#ef4444", // Red
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TRACKING INFRASTRUCTURE
// ============================================================================

/// Known network footprint of one platform.
///
/// All lists are ordered and may be empty. Entries are matched as
/// case-sensitive substrings against observed page data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackingInfra {
    /// First-party domains operated by the platform itself
    pub primary_domains: Vec<String>,
    /// Third-party tracker domain fragments the platform embeds
    pub tracker_domains: Vec<String>,
    /// Script file names / URL fragments of the platform's tracking libraries
    pub script_indicators: Vec<String>,
}

// ============================================================================
// FINGERPRINT METHODS
// ============================================================================

/// Which fingerprinting techniques the platform is known to use
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FingerprintMethods {
    pub canvas: bool,
    pub webgl: bool,
    pub audio: bool,
    pub fonts: bool,
    pub sensors: bool,
    pub battery: bool,
    pub webrtc: bool,
    pub behavioral: bool,
}

// ============================================================================
// COUNTERMEASURES
// ============================================================================

/// Recommended mitigations for one platform
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Countermeasures {
    pub block_domains: bool,
    pub spoof_fingerprint: bool,
    pub clear_cookies: bool,
    pub use_container: bool,
}

// ============================================================================
// OPTIONAL METADATA
// ============================================================================

/// Patch status of a known vulnerability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VulnerabilityStatus {
    Unpatched,
    Mitigated,
    Patched,
}

/// Publicly documented privacy vulnerability tied to a platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownVulnerability {
    pub id: String,
    pub description: String,
    pub status: VulnerabilityStatus,
}

/// Jurisdiction the platform operates under and where collected data flows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionScope {
    pub region: String,
    pub data_transfer_destinations: Vec<String>,
}

// ============================================================================
// ADVERSARY PROFILE
// ============================================================================

/// Static description of one tracking platform.
///
/// Loaded once at startup and never mutated. Identity = `id`.
/// Every list may be empty; only `vulnerabilities` and `region` are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdversaryProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub risk_level: RiskLevel,
    pub category: String,
    pub tracking_infra: TrackingInfra,
    pub fingerprint_methods: FingerprintMethods,
    pub storage_keys: Vec<String>,
    pub countermeasures: Countermeasures,
    pub vulnerabilities: Option<Vec<KnownVulnerability>>,
    pub region: Option<RegionScope>,
}

// ============================================================================
// TESTS
// ============================================================================
