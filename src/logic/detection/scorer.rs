//! Per-Profile Scorer
//!
//! Combines the four evaluators' outputs into one weighted risk score, a
//! detection flag, a confidence percentage, and the advisory list for a
//! single profile.
//!
//! Deterministic and explainable: same inputs, same result, every time.

use crate::logic::profiles::AdversaryProfile;

use super::evaluators::{
    evaluate_domains, evaluate_fingerprint_methods, evaluate_scripts, evaluate_storage_keys,
};
use super::recommendations;
use super::rules::{
    DetectionThresholds, DOMAIN_SIGNAL_WEIGHT, FINGERPRINT_SIGNAL_WEIGHT, MAX_RISK_SCORE,
    SCRIPT_SIGNAL_WEIGHT, STORAGE_SIGNAL_WEIGHT,
};
use super::types::{PageContext, SignalBundle, SignalType, TargetDetectionResult};

// ============================================================================
// MAIN SCORING FUNCTION
// ============================================================================

/// Score one profile against the observed signals
pub fn score_profile(
    profile: &AdversaryProfile,
    bundle: &SignalBundle,
    context: Option<&PageContext>,
) -> TargetDetectionResult {
    score_profile_with_thresholds(profile, bundle, context, &DetectionThresholds::default())
}

/// Scoring with custom thresholds
pub fn score_profile_with_thresholds(
    profile: &AdversaryProfile,
    bundle: &SignalBundle,
    context: Option<&PageContext>,
    thresholds: &DetectionThresholds,
) -> TargetDetectionResult {
    // Evaluator order is canonical: domain, script, fingerprint, storage
    let mut signals = evaluate_domains(profile, bundle, context);
    signals.extend(evaluate_scripts(profile, bundle, context));
    signals.extend(evaluate_fingerprint_methods(profile, bundle, context));
    signals.extend(evaluate_storage_keys(profile, bundle, context));

    let found_count = |signal_type: SignalType| -> u32 {
        signals
            .iter()
            .filter(|s| s.found && s.signal_type == signal_type)
            .count() as u32
    };

    let raw_score = DOMAIN_SIGNAL_WEIGHT * found_count(SignalType::Domain)
        + SCRIPT_SIGNAL_WEIGHT * found_count(SignalType::Script)
        + FINGERPRINT_SIGNAL_WEIGHT * found_count(SignalType::Fingerprint)
        + STORAGE_SIGNAL_WEIGHT * found_count(SignalType::Storage);
    let risk_score = raw_score.min(MAX_RISK_SCORE);

    let detected = risk_score >= thresholds.detection_min;

    let total = signals.len();
    let found_total = signals.iter().filter(|s| s.found).count();
    let confidence = if total == 0 {
        0
    } else {
        (100.0 * found_total as f64 / total as f64).round() as u8
    };

    log::debug!(
        "scored profile {}: risk={} confidence={} found={}/{} detected={}",
        profile.id,
        risk_score,
        confidence,
        found_total,
        total,
        detected
    );

    let recommendations = recommendations::generate(profile, &signals);

    // Callers only ever see the found evidence, in evaluator order
    signals.retain(|s| s.found);

    TargetDetectionResult {
        profile: profile.clone(),
        detected,
        confidence,
        signals,
        risk_score,
        recommendations,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::profiles::find_profile;
    use crate::logic::detection::types::Severity;

    #[test]
    fn test_quiet_inputs_score_zero() {
        // Wish declares only canvas fingerprinting, which the default bundle
        // gates out, so quiet inputs really produce zero evidence
        let profile = find_profile("wish").unwrap();
        let result = score_profile(profile, &SignalBundle::default(), None);

        assert_eq!(result.risk_score, 0);
        assert_eq!(result.confidence, 0);
        assert!(!result.detected);
        assert!(result.signals.is_empty());
    }

    #[test]
    fn test_ungated_methods_still_count_on_quiet_inputs() {
        // fonts/behavioral have no bundle gate, so a profile declaring them
        // carries a floor of 10 points even with nothing observed
        let profile = find_profile("aliexpress").unwrap();
        let result = score_profile(profile, &SignalBundle::default(), None);

        assert_eq!(result.risk_score, 10);
        assert!(!result.detected);
        // 2 found of 31 emitted signals (18 domain + 7 script + 6 fingerprint)
        assert_eq!(result.confidence, 6);
    }

    #[test]
    fn test_worked_example_aliexpress() {
        // Bundle: canvas+webgl supported, audio not; page shows one primary
        // domain hit and one tracker hit, no scripts, no local storage.
        let profile = find_profile("aliexpress").unwrap();
        let bundle = SignalBundle::new().with_canvas(true).with_webgl(true);
        let ctx = PageContext::new().with_domains(vec![
            "g.alicdn.com".to_string(),
            "criteo.com".to_string(),
        ]);

        let result = score_profile(profile, &bundle, Some(&ctx));

        // 2 domain hits x10 + 0 scripts + 4 fingerprint hits x5 + 0 storage
        assert_eq!(result.risk_score, 40);
        assert!(result.detected);

        let fingerprints: Vec<_> = result
            .signals
            .iter()
            .filter(|s| s.signal_type == SignalType::Fingerprint)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(fingerprints, vec!["canvas", "webgl", "fonts", "behavioral"]);
    }

    #[test]
    fn test_signals_keep_evaluator_order() {
        let profile = find_profile("aliexpress").unwrap();
        let bundle = SignalBundle::new().with_canvas(true);
        let ctx = PageContext::new()
            .with_domains(vec!["criteo.com".to_string()])
            .with_scripts(vec!["https://g.alicdn.com/alilog/aplus.js".to_string()]);

        let result = score_profile(profile, &bundle, Some(&ctx));
        let types: Vec<_> = result.signals.iter().map(|s| s.signal_type).collect();

        // Domain hits before script hits before fingerprint hits
        assert_eq!(
            types,
            vec![
                SignalType::Domain,
                SignalType::Script,
                SignalType::Fingerprint,
                SignalType::Fingerprint,
                SignalType::Fingerprint,
            ]
        );
    }

    #[test]
    fn test_score_clamped_to_100() {
        // Everything on, everything observed: far more than 100 raw points
        let profile = find_profile("temu").unwrap();
        let bundle = SignalBundle {
            canvas_supported: true,
            webgl_supported: true,
            audio_supported: true,
            sensors_supported: true,
            battery_supported: true,
            webrtc_supported: true,
            local_storage_available: true,
        };
        let ctx = PageContext::new()
            .with_domains(
                profile
                    .tracking_infra
                    .primary_domains
                    .iter()
                    .chain(&profile.tracking_infra.tracker_domains)
                    .cloned()
                    .collect(),
            )
            .with_scripts(profile.tracking_infra.script_indicators.clone());

        let result = score_profile(profile, &bundle, Some(&ctx));
        assert_eq!(result.risk_score, 100);
        assert!(result.detected);
        assert!(result.confidence <= 100);
    }

    #[test]
    fn test_detection_threshold_boundary() {
        // Three domain hits = 30 points, exactly at the threshold
        let profile = find_profile("wish").unwrap();
        let bundle = SignalBundle::default();
        let ctx = PageContext::new().with_domains(vec![
            "wish.com".to_string(),
            "doubleclick.net".to_string(),
            "facebook.net".to_string(),
        ]);

        let result = score_profile(profile, &bundle, Some(&ctx));
        assert_eq!(result.risk_score, 30);
        assert!(result.detected);
    }

    #[test]
    fn test_custom_thresholds() {
        let profile = find_profile("wish").unwrap();
        let ctx = PageContext::new().with_domains(vec![
            "wish.com".to_string(),
            "doubleclick.net".to_string(),
            "facebook.net".to_string(),
        ]);

        let strict = score_profile_with_thresholds(
            profile,
            &SignalBundle::default(),
            Some(&ctx),
            &DetectionThresholds::low_sensitivity(),
        );
        assert_eq!(strict.risk_score, 30);
        assert!(!strict.detected);
    }

    #[test]
    fn test_empty_profile_confidence_is_zero() {
        use crate::logic::profiles::{
            AdversaryProfile, Countermeasures, FingerprintMethods, RiskLevel, TrackingInfra,
        };

        // A profile declaring nothing produces zero signals; the confidence
        // division must resolve to 0 rather than panic
        let empty = AdversaryProfile {
            id: "empty".to_string(),
            name: "Empty".to_string(),
            description: String::new(),
            risk_level: RiskLevel::Low,
            category: "test".to_string(),
            tracking_infra: TrackingInfra::default(),
            fingerprint_methods: FingerprintMethods::default(),
            storage_keys: vec![],
            countermeasures: Countermeasures::default(),
            vulnerabilities: None,
            region: None,
        };

        let result = score_profile(&empty, &SignalBundle::default(), None);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.risk_score, 0);
        assert!(!result.detected);
        assert!(result.signals.is_empty());
    }

    #[test]
    fn test_recommendations_capped() {
        let profile = find_profile("aliexpress").unwrap();
        let ctx = PageContext::new()
            .with_scripts(vec!["https://g.alicdn.com/alilog/aplus.js".to_string()]);

        let result = score_profile(profile, &SignalBundle::default(), Some(&ctx));
        assert!(result.recommendations.len() <= 5);
        assert!(result
            .signals
            .iter()
            .any(|s| s.severity == Severity::Critical));
    }
}
