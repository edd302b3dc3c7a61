//! Profiles Module
//!
//! Static catalog of known tracking platforms and its schema.
//!
//! ## Structure
//! - `types`: AdversaryProfile schema (pure data)
//! - `catalog`: built-in registry, lookups, statistics
//!
//! ## Usage
//! ```ignore
//! use privacy_audit_core::logic::profiles::{catalog, find_profile};
//!
//! for profile in catalog() {
//!     println!("{} ({})", profile.name, profile.risk_level);
//! }
//! ```

pub mod catalog;
pub mod types;

// Re-export main types for convenience
pub use types::{
    AdversaryProfile, Countermeasures, FingerprintMethods, KnownVulnerability, RegionScope,
    RiskLevel, TrackingInfra, VulnerabilityStatus,
};

pub use catalog::{
    catalog, catalog_stats, find_profile, profiles_by_category, profiles_by_risk, CatalogStats,
};
