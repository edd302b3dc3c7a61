//! Signal Evaluators
//!
//! Four independent evidence extractors, one per category. Each is a pure
//! function of (profile, bundle, page context) and returns one signal per
//! declared indicator - found or not. The scorer concatenates their outputs
//! in the order domain, script, fingerprint, storage; that concatenation is
//! the canonical signal ordering everywhere downstream.

use crate::logic::profiles::AdversaryProfile;

use super::rules::MAX_STORAGE_KEY_SIGNALS;
use super::types::{DetectionSignal, PageContext, Severity, SignalBundle, SignalType};

// ============================================================================
// DOMAIN EVALUATOR
// ============================================================================

/// One signal per primary domain and per third-party tracker fragment.
///
/// An indicator is found when any observed domain contains it as a
/// case-sensitive substring. No context means nothing was observed, so
/// every signal comes back not-found.
pub fn evaluate_domains(
    profile: &AdversaryProfile,
    _bundle: &SignalBundle,
    context: Option<&PageContext>,
) -> Vec<DetectionSignal> {
    let observed: &[String] = context.map(|c| c.domains.as_slice()).unwrap_or(&[]);
    let mut signals = Vec::new();

    for domain in &profile.tracking_infra.primary_domains {
        let found = observed.iter().any(|d| d.contains(domain.as_str()));
        let severity = if found { Severity::High } else { Severity::Low };
        signals.push(DetectionSignal::new(
            SignalType::Domain,
            domain.clone(),
            found,
            severity,
            format!("Primary domain of {}", profile.name),
        ));
    }

    for tracker in &profile.tracking_infra.tracker_domains {
        let found = observed.iter().any(|d| d.contains(tracker.as_str()));
        let severity = if found { Severity::Medium } else { Severity::Low };
        signals.push(DetectionSignal::new(
            SignalType::Domain,
            tracker.clone(),
            found,
            severity,
            format!("Third-party tracker embedded by {}", profile.name),
        ));
    }

    signals
}

// ============================================================================
// SCRIPT EVALUATOR
// ============================================================================

/// One signal per declared tracking-library indicator. Found when any
/// observed script URL contains the indicator substring. A matched script
/// is direct evidence of the platform's code running, hence Critical.
pub fn evaluate_scripts(
    profile: &AdversaryProfile,
    _bundle: &SignalBundle,
    context: Option<&PageContext>,
) -> Vec<DetectionSignal> {
    let observed: &[String] = context.map(|c| c.scripts.as_slice()).unwrap_or(&[]);
    let mut signals = Vec::new();

    for indicator in &profile.tracking_infra.script_indicators {
        let found = observed.iter().any(|s| s.contains(indicator.as_str()));
        let severity = if found { Severity::Critical } else { Severity::Low };
        signals.push(DetectionSignal::new(
            SignalType::Script,
            indicator.clone(),
            found,
            severity,
            format!("Tracking script shipped by {}", profile.name),
        ));
    }

    signals
}

// ============================================================================
// FINGERPRINT-METHOD EVALUATOR
// ============================================================================

/// One signal per fingerprinting method the profile declares.
///
/// A declared method is found only when the bundle reports the matching
/// browser capability, since the platform cannot exercise an API the
/// environment does not expose. `fonts` and `behavioral` have no bundle
/// gate and count as found whenever declared.
pub fn evaluate_fingerprint_methods(
    profile: &AdversaryProfile,
    bundle: &SignalBundle,
    _context: Option<&PageContext>,
) -> Vec<DetectionSignal> {
    let methods = &profile.fingerprint_methods;

    // (name, declared, gate, severity)
    let table: [(&str, bool, bool, Severity); 8] = [
        ("canvas", methods.canvas, bundle.canvas_supported, Severity::High),
        ("webgl", methods.webgl, bundle.webgl_supported, Severity::High),
        ("audio", methods.audio, bundle.audio_supported, Severity::Medium),
        ("fonts", methods.fonts, true, Severity::Medium),
        ("sensors", methods.sensors, bundle.sensors_supported, Severity::Medium),
        ("battery", methods.battery, bundle.battery_supported, Severity::Medium),
        ("webrtc", methods.webrtc, bundle.webrtc_supported, Severity::High),
        ("behavioral", methods.behavioral, true, Severity::High),
    ];

    let mut signals = Vec::new();

    for (name, declared, supported, severity) in table {
        if !declared {
            continue;
        }
        signals.push(DetectionSignal::new(
            SignalType::Fingerprint,
            name,
            supported,
            severity,
            format!("{} uses {} fingerprinting", profile.name, name),
        ));
    }

    signals
}

// ============================================================================
// STORAGE-KEY EVALUATOR
// ============================================================================

/// Up to the first 10 declared storage keys, only when the bundle reports
/// local storage as available.
///
/// Signals are always emitted not-found: the engine has no view into actual
/// storage content, so the keys act as a watch list for the caller.
// TODO: diff declared keys against PageContext::local_storage once the
// collector starts populating it.
pub fn evaluate_storage_keys(
    profile: &AdversaryProfile,
    bundle: &SignalBundle,
    _context: Option<&PageContext>,
) -> Vec<DetectionSignal> {
    if !bundle.local_storage_available {
        return Vec::new();
    }

    profile
        .storage_keys
        .iter()
        .take(MAX_STORAGE_KEY_SIGNALS)
        .map(|key| {
            DetectionSignal::new(
                SignalType::Storage,
                key.clone(),
                false,
                Severity::Medium,
                format!("Storage key associated with {}", profile.name),
            )
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
