//! Aggregator
//!
//! Runs the per-profile scorer over the whole catalog, filters and ranks the
//! results, and rolls them up into an overall risk verdict.
//!
//! Synchronous and pure: the catalog is read-only, every run allocates only
//! its own result objects, and parallel runs need no coordination.

use crate::logic::profiles::{catalog, find_profile, AdversaryProfile, RiskLevel};

use super::rules::{DetectionThresholds, MAX_RISK_SCORE};
use super::scorer::score_profile_with_thresholds;
use super::types::{FullDetectionResult, PageContext, SignalBundle, TargetDetectionResult};

// ============================================================================
// FULL CATALOG RUN
// ============================================================================

/// Detect all built-in catalog targets against the observed signals
pub fn detect_all(bundle: &SignalBundle, context: Option<&PageContext>) -> FullDetectionResult {
    detect_all_in(catalog(), bundle, context, &DetectionThresholds::default())
}

/// Full run over an explicit catalog with custom thresholds.
///
/// The engine iterates whatever catalog it is given, in the order given, so
/// adding or removing a profile never requires code changes here.
pub fn detect_all_in(
    profiles: &[AdversaryProfile],
    bundle: &SignalBundle,
    context: Option<&PageContext>,
    thresholds: &DetectionThresholds,
) -> FullDetectionResult {
    let mut results: Vec<TargetDetectionResult> = profiles
        .iter()
        .map(|profile| score_profile_with_thresholds(profile, bundle, context, thresholds))
        .filter(|r| r.detected || r.confidence > thresholds.surface_confidence_min)
        .collect();

    // Stable sort: ties keep catalog registration order
    results.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));

    let total_risk_score = results
        .iter()
        .map(|r| r.risk_score)
        .sum::<u32>()
        .min(MAX_RISK_SCORE);

    let overall_risk = overall_risk(&results, total_risk_score, thresholds);

    let critical_targets: Vec<AdversaryProfile> = results
        .iter()
        .filter(|r| {
            r.risk_score >= thresholds.high_score_min
                || r.profile.risk_level == RiskLevel::Critical
        })
        .map(|r| r.profile.clone())
        .collect();

    let all_signals = results
        .iter()
        .flat_map(|r| r.signals.iter().cloned())
        .collect();

    log::debug!(
        "detection run: {}/{} profiles surfaced, total={}, verdict={}",
        results.len(),
        profiles.len(),
        total_risk_score,
        overall_risk
    );

    FullDetectionResult {
        results,
        overall_risk,
        total_risk_score,
        critical_targets,
        all_signals,
    }
}

// ============================================================================
// OVERALL VERDICT
// ============================================================================

/// Fixed-priority verdict ladder; first match wins
fn overall_risk(
    results: &[TargetDetectionResult],
    total_risk_score: u32,
    thresholds: &DetectionThresholds,
) -> RiskLevel {
    let critical_count = results
        .iter()
        .filter(|r| r.profile.risk_level == RiskLevel::Critical)
        .count();
    let high_score_count = results
        .iter()
        .filter(|r| r.risk_score >= thresholds.high_score_min)
        .count();

    if critical_count >= 2 || total_risk_score >= thresholds.critical_total_min {
        RiskLevel::Critical
    } else if critical_count >= 1
        || high_score_count >= 2
        || total_risk_score >= thresholds.high_total_min
    {
        RiskLevel::High
    } else if total_risk_score >= thresholds.medium_total_min {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

// ============================================================================
// SINGLE-PROFILE LOOKUP
// ============================================================================

/// Re-check one catalog target by id, without page context.
///
/// Domain and script evaluators report all-false in this mode; the result
/// reflects fingerprint and storage evidence only. Unknown id is `None`.
pub fn detect_one(bundle: &SignalBundle, profile_id: &str) -> Option<TargetDetectionResult> {
    let profile = find_profile(profile_id)?;
    Some(score_profile_with_thresholds(
        profile,
        bundle,
        None,
        &DetectionThresholds::default(),
    ))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::detection::types::SignalType;

    fn full_bundle() -> SignalBundle {
        SignalBundle {
            canvas_supported: true,
            webgl_supported: true,
            audio_supported: true,
            sensors_supported: true,
            battery_supported: true,
            webrtc_supported: true,
            local_storage_available: true,
        }
    }

    #[test]
    fn test_empty_catalog_is_safe() {
        let result = detect_all_in(
            &[],
            &full_bundle(),
            None,
            &DetectionThresholds::default(),
        );

        assert!(result.results.is_empty());
        assert_eq!(result.overall_risk, RiskLevel::Low);
        assert_eq!(result.total_risk_score, 0);
        assert!(result.critical_targets.is_empty());
        assert!(result.all_signals.is_empty());
    }

    #[test]
    fn test_quiet_page_quiet_bundle_is_low() {
        let result = detect_all(&SignalBundle::default(), None);

        // Nothing is detected; only profiles whose ungated fingerprint
        // methods push confidence past the bar could surface
        assert!(result.results.iter().all(|r| !r.detected));
        assert!(result.total_risk_score < 30);
        assert_eq!(result.overall_risk, RiskLevel::Low);
    }

    #[test]
    fn test_results_sorted_descending() {
        let ctx = PageContext::new().with_domains(vec![
            "g.alicdn.com".to_string(),
            "criteo.com".to_string(),
            "doubleclick.net".to_string(),
            "analytics.tiktok.com".to_string(),
        ]);

        let result = detect_all(&full_bundle(), Some(&ctx));
        for pair in result.results.windows(2) {
            assert!(pair[0].risk_score >= pair[1].risk_score);
        }
    }

    #[test]
    fn test_total_risk_score_consistency() {
        let ctx = PageContext::new().with_domains(vec![
            "g.alicdn.com".to_string(),
            "criteo.com".to_string(),
        ]);

        let result = detect_all(&full_bundle(), Some(&ctx));
        let raw: u32 = result.results.iter().map(|r| r.risk_score).sum();
        assert_eq!(result.total_risk_score, raw.min(100));
    }

    #[test]
    fn test_all_signals_found_only_in_result_order() {
        let ctx = PageContext::new().with_domains(vec!["criteo.com".to_string()]);
        let result = detect_all(&full_bundle(), Some(&ctx));

        assert!(result.all_signals.iter().all(|s| s.found));
        let concatenated: usize = result.results.iter().map(|r| r.signals.len()).sum();
        assert_eq!(result.all_signals.len(), concatenated);
    }

    #[test]
    fn test_critical_targets_union_rule() {
        let ctx = PageContext::new().with_domains(vec![
            "g.alicdn.com".to_string(),
            "criteo.com".to_string(),
        ]);

        let result = detect_all(&full_bundle(), Some(&ctx));
        for target in &result.critical_targets {
            let r = result
                .results
                .iter()
                .find(|r| r.profile.id == target.id)
                .unwrap();
            assert!(r.risk_score >= 50 || target.risk_level == RiskLevel::Critical);
        }
    }

    #[test]
    fn test_two_critical_profiles_escalate_verdict() {
        // Hit both Critical-rated platforms (aliexpress + temu) hard enough
        // to surface both
        let ctx = PageContext::new().with_domains(vec![
            "aliexpress.com".to_string(),
            "taobao.com".to_string(),
            "alicdn.com".to_string(),
            "temu.com".to_string(),
            "kwcdn.com".to_string(),
            "pinduoduo.com".to_string(),
        ]);

        let result = detect_all(&SignalBundle::default(), Some(&ctx));
        let surfaced_critical = result
            .results
            .iter()
            .filter(|r| r.profile.risk_level == RiskLevel::Critical)
            .count();
        assert!(surfaced_critical >= 2);
        assert_eq!(result.overall_risk, RiskLevel::Critical);
    }

    #[test]
    fn test_detect_one_known_and_unknown() {
        let result = detect_one(&full_bundle(), "aliexpress").unwrap();
        assert_eq!(result.profile.id, "aliexpress");
        // No page context: no domain or script evidence possible
        assert!(result
            .signals
            .iter()
            .all(|s| s.signal_type != SignalType::Domain));

        assert!(detect_one(&full_bundle(), "unknown-platform").is_none());
    }

    #[test]
    fn test_determinism() {
        let ctx = PageContext::new().with_domains(vec![
            "g.alicdn.com".to_string(),
            "criteo.com".to_string(),
        ]);
        let bundle = full_bundle();

        let a = serde_json::to_string(&detect_all(&bundle, Some(&ctx))).unwrap();
        let b = serde_json::to_string(&detect_all(&bundle, Some(&ctx))).unwrap();
        assert_eq!(a, b);
    }
}
