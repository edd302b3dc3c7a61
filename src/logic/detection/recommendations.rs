//! Recommendation Generator
//!
//! Turns a profile's countermeasure flags and the found-signal evidence into
//! short advisory strings. Generation order is fixed; the final list keeps
//! the first entries, with no re-sorting by importance.

use crate::logic::profiles::AdversaryProfile;

use super::rules::MAX_RECOMMENDATIONS;
use super::types::{DetectionSignal, Severity};

// ============================================================================
// PLATFORM-SPECIFIC ADVISORIES
// ============================================================================

/// Extra advisory per built-in catalog id
const PLATFORM_ADVISORIES: &[(&str, &str)] = &[
    (
        "aliexpress",
        "AliExpress shares device identifiers across the whole Alibaba ecosystem; \
         use a dedicated browser profile for all Alibaba-group sites",
    ),
    (
        "temu",
        "Temu's bundled fingerprint library runs at page load; disable JavaScript \
         sensor access or shop through the mobile web instead of the app",
    ),
    (
        "shein",
        "SHEIN embeds session-replay tooling; avoid typing personal data outside \
         the checkout flow",
    ),
    (
        "tiktok",
        "Avoid opening external links inside the TikTok in-app browser; its \
         instrumentation can observe input on third-party pages",
    ),
    (
        "wish",
        "Wish relies on standard ad-tech identifiers; a content blocker covers \
         most of its tracking",
    ),
];

// ============================================================================
// GENERATION
// ============================================================================

/// Build the advisory list for one profile.
///
/// Order: countermeasure advisories (container, domain-block, cookie-clear,
/// fingerprint-spoof), then a critical-signal summary when applicable, then
/// the platform-specific advisory. Truncated to the first 5.
pub fn generate(profile: &AdversaryProfile, signals: &[DetectionSignal]) -> Vec<String> {
    let mut recommendations = Vec::new();
    let cm = &profile.countermeasures;

    if cm.use_container {
        recommendations.push(format!(
            "Open {} in an isolated browser container to keep its cookies away from \
             your main session",
            profile.name
        ));
    }
    if cm.block_domains {
        recommendations.push(format!(
            "Block the tracking domains of {} with a DNS filter or content blocker",
            profile.name
        ));
    }
    if cm.clear_cookies {
        recommendations.push(format!(
            "Clear cookies and site data for {} after each visit",
            profile.name
        ));
    }
    if cm.spoof_fingerprint {
        recommendations.push(format!(
            "Enable canvas/WebGL fingerprint randomization before visiting {} properties",
            profile.name
        ));
    }

    let critical_found = signals
        .iter()
        .filter(|s| s.found && s.severity == Severity::Critical)
        .count();
    if critical_found > 0 {
        recommendations.push(format!(
            "{} critical tracking signal(s) observed on this page - review the signal \
             list before continuing",
            critical_found
        ));
    }

    if let Some((_, advisory)) = PLATFORM_ADVISORIES.iter().find(|(id, _)| *id == profile.id) {
        recommendations.push(advisory.to_string());
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

// ============================================================================
// TESTS
// ============================================================================
