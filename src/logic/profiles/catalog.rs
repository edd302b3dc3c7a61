//! Built-in Adversary Profile Catalog
//!
//! Static registry of known tracking platforms. Loaded once behind a Lazy
//! and never mutated - detection runs only ever read from it.
//!
//! Adding or removing an entry here requires no changes anywhere else:
//! the detection engine iterates the catalog generically.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::types::{
    AdversaryProfile, Countermeasures, FingerprintMethods, KnownVulnerability, RegionScope,
    RiskLevel, TrackingInfra, VulnerabilityStatus,
};

// ============================================================================
// STATIC CATALOG
// ============================================================================

static CATALOG: Lazy<Vec<AdversaryProfile>> = Lazy::new(build_catalog);

/// Full catalog in registration order
pub fn catalog() -> &'static [AdversaryProfile] {
    &CATALOG
}

/// Look up one profile by id
pub fn find_profile(id: &str) -> Option<&'static AdversaryProfile> {
    CATALOG.iter().find(|p| p.id == id)
}

/// All profiles in a category, in registration order
pub fn profiles_by_category(category: &str) -> Vec<&'static AdversaryProfile> {
    CATALOG.iter().filter(|p| p.category == category).collect()
}

/// All profiles at a given risk level, in registration order
pub fn profiles_by_risk(level: RiskLevel) -> Vec<&'static AdversaryProfile> {
    CATALOG.iter().filter(|p| p.risk_level == level).collect()
}

// ============================================================================
// STATISTICS
// ============================================================================

/// Catalog composition summary for the presentation layer
#[derive(Debug, Clone, serde::Serialize)]
pub struct CatalogStats {
    pub total_profiles: usize,
    pub critical_count: usize,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
    pub canvas_users: usize,
    pub webgl_users: usize,
    pub audio_users: usize,
    pub behavioral_users: usize,
    pub by_category: HashMap<String, usize>,
}

pub fn catalog_stats() -> CatalogStats {
    let mut stats = CatalogStats {
        total_profiles: CATALOG.len(),
        critical_count: 0,
        high_count: 0,
        medium_count: 0,
        low_count: 0,
        canvas_users: 0,
        webgl_users: 0,
        audio_users: 0,
        behavioral_users: 0,
        by_category: HashMap::new(),
    };

    for profile in CATALOG.iter() {
        match profile.risk_level {
            RiskLevel::Critical => stats.critical_count += 1,
            RiskLevel::High => stats.high_count += 1,
            RiskLevel::Medium => stats.medium_count += 1,
            RiskLevel::Low => stats.low_count += 1,
        }

        if profile.fingerprint_methods.canvas {
            stats.canvas_users += 1;
        }
        if profile.fingerprint_methods.webgl {
            stats.webgl_users += 1;
        }
        if profile.fingerprint_methods.audio {
            stats.audio_users += 1;
        }
        if profile.fingerprint_methods.behavioral {
            stats.behavioral_users += 1;
        }

        *stats.by_category.entry(profile.category.clone()).or_insert(0) += 1;
    }

    stats
}

// ============================================================================
// CATALOG CONTENT
// ============================================================================

fn svec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build_catalog() -> Vec<AdversaryProfile> {
    vec![
        aliexpress(),
        temu(),
        shein(),
        tiktok(),
        wish(),
    ]
}

fn aliexpress() -> AdversaryProfile {
    AdversaryProfile {
        id: "aliexpress".to_string(),
        name: "AliExpress".to_string(),
        description: "Alibaba-group marketplace with ecosystem-wide device fingerprinting \
                      and shared identifiers across all group properties"
            .to_string(),
        risk_level: RiskLevel::Critical,
        category: "e-commerce".to_string(),
        tracking_infra: TrackingInfra {
            primary_domains: svec(&[
                "aliexpress.com",
                "aliexpress.us",
                "alibaba.com",
                "alicdn.com",
                "alipay.com",
                "aliyun.com",
                "taobao.com",
                "tmall.com",
            ]),
            tracker_domains: svec(&[
                "mmstat.com",
                "umeng.com",
                "cnzz.com",
                "criteo.com",
                "doubleclick.net",
                "googletagmanager.com",
                "google-analytics.com",
                "facebook.net",
                "bat.bing.com",
                "yandex.ru",
            ]),
            script_indicators: svec(&[
                "aplus.js",
                "aplus_wap.js",
                "alilog.js",
                "aes.js",
                "beacon_handler.js",
                "um.js",
                "collina.js",
            ]),
        },
        fingerprint_methods: FingerprintMethods {
            canvas: true,
            webgl: true,
            audio: true,
            fonts: true,
            sensors: false,
            battery: true,
            webrtc: false,
            behavioral: true,
        },
        storage_keys: svec(&[
            "ali_apache_id",
            "ali_apache_track",
            "ali_apache_tracktmp",
            "cna",
            "xman_us_f",
            "xman_us_t",
            "aep_usuc_f",
            "intl_common_forever",
            "_m_h5_tk",
            "JSESSIONID",
            "acs_usuc_t",
        ]),
        countermeasures: Countermeasures {
            block_domains: true,
            spoof_fingerprint: true,
            clear_cookies: true,
            use_container: true,
        },
        vulnerabilities: Some(vec![KnownVulnerability {
            id: "ALI-2022-UMID".to_string(),
            description: "UMID device identifier survives cookie clearing via \
                          localStorage and ETag respawn"
                .to_string(),
            status: VulnerabilityStatus::Unpatched,
        }]),
        region: Some(RegionScope {
            region: "CN".to_string(),
            data_transfer_destinations: svec(&["CN", "SG", "US"]),
        }),
    }
}

fn temu() -> AdversaryProfile {
    AdversaryProfile {
        id: "temu".to_string(),
        name: "Temu".to_string(),
        description: "PDD Holdings marketplace; aggressive device profiling ported from \
                      the Pinduoduo app ecosystem"
            .to_string(),
        risk_level: RiskLevel::Critical,
        category: "e-commerce".to_string(),
        tracking_infra: TrackingInfra {
            primary_domains: svec(&[
                "temu.com",
                "kwcdn.com",
                "pinduoduo.com",
                "yangkeduo.com",
            ]),
            tracker_domains: svec(&[
                "criteo.com",
                "doubleclick.net",
                "facebook.net",
                "tiktok.com/i18n",
                "snapchat.com",
                "googletagmanager.com",
            ]),
            script_indicators: svec(&[
                "report.js",
                "pmm.js",
                "abc.js",
                "fingerprint_bundle.js",
            ]),
        },
        fingerprint_methods: FingerprintMethods {
            canvas: true,
            webgl: true,
            audio: true,
            fonts: true,
            sensors: true,
            battery: true,
            webrtc: true,
            behavioral: true,
        },
        storage_keys: svec(&[
            "api_uid",
            "_nano_fp",
            "webp_enable",
            "_bee",
            "njrpl",
            "dilx",
            "hfsc",
        ]),
        countermeasures: Countermeasures {
            block_domains: true,
            spoof_fingerprint: true,
            clear_cookies: true,
            use_container: true,
        },
        vulnerabilities: Some(vec![KnownVulnerability {
            id: "TEMU-2023-FP".to_string(),
            description: "Bundled fingerprint library probes sensors and WebRTC without \
                          user interaction"
                .to_string(),
            status: VulnerabilityStatus::Unpatched,
        }]),
        region: Some(RegionScope {
            region: "CN".to_string(),
            data_transfer_destinations: svec(&["CN", "US"]),
        }),
    }
}

fn shein() -> AdversaryProfile {
    AdversaryProfile {
        id: "shein".to_string(),
        name: "SHEIN".to_string(),
        description: "Fast-fashion retailer with heavy third-party ad-tech integration \
                      and session-replay tooling"
            .to_string(),
        risk_level: RiskLevel::High,
        category: "e-commerce".to_string(),
        tracking_infra: TrackingInfra {
            primary_domains: svec(&["shein.com", "sheincdn.com", "shein.co.uk", "romwe.com"]),
            tracker_domains: svec(&[
                "hotjar.com",
                "criteo.com",
                "doubleclick.net",
                "facebook.net",
                "clarity.ms",
                "tiktok.com/i18n",
            ]),
            script_indicators: svec(&["sa.js", "gb_track.js", "risk_fp.js"]),
        },
        fingerprint_methods: FingerprintMethods {
            canvas: true,
            webgl: true,
            audio: false,
            fonts: true,
            sensors: false,
            battery: false,
            webrtc: false,
            behavioral: true,
        },
        storage_keys: svec(&[
            "armorToken",
            "sessionID_shein",
            "cookieId",
            "default_currency",
            "fita.sid.shein",
        ]),
        countermeasures: Countermeasures {
            block_domains: true,
            spoof_fingerprint: true,
            clear_cookies: true,
            use_container: false,
        },
        vulnerabilities: None,
        region: Some(RegionScope {
            region: "SG".to_string(),
            data_transfer_destinations: svec(&["SG", "CN", "US"]),
        }),
    }
}

fn tiktok() -> AdversaryProfile {
    AdversaryProfile {
        id: "tiktok".to_string(),
        name: "TikTok".to_string(),
        description: "ByteDance social platform; pixel and SDK embed device and \
                      behavioral signals across partner sites"
            .to_string(),
        risk_level: RiskLevel::High,
        category: "social".to_string(),
        tracking_infra: TrackingInfra {
            primary_domains: svec(&[
                "tiktok.com",
                "tiktokcdn.com",
                "ttwstatic.com",
                "byteoversea.com",
                "ibytedtos.com",
            ]),
            tracker_domains: svec(&[
                "analytics.tiktok.com",
                "ads.tiktok.com",
                "business-api.tiktok.com",
                "doubleclick.net",
            ]),
            script_indicators: svec(&["events.js", "pixel/sdk.js", "secsdk.js", "webmssdk.js"]),
        },
        fingerprint_methods: FingerprintMethods {
            canvas: true,
            webgl: true,
            audio: true,
            fonts: true,
            sensors: true,
            battery: false,
            webrtc: true,
            behavioral: true,
        },
        storage_keys: svec(&[
            "tt_webid",
            "tt_webid_v2",
            "ttwid",
            "tt_csrf_token",
            "msToken",
            "s_v_web_id",
        ]),
        countermeasures: Countermeasures {
            block_domains: true,
            spoof_fingerprint: true,
            clear_cookies: true,
            use_container: true,
        },
        vulnerabilities: Some(vec![KnownVulnerability {
            id: "TT-2022-KEYLOG".to_string(),
            description: "In-app browser instrumentation can observe keystrokes on \
                          third-party pages"
                .to_string(),
            status: VulnerabilityStatus::Mitigated,
        }]),
        region: Some(RegionScope {
            region: "CN".to_string(),
            data_transfer_destinations: svec(&["CN", "SG", "US", "MY"]),
        }),
    }
}

fn wish() -> AdversaryProfile {
    AdversaryProfile {
        id: "wish".to_string(),
        name: "Wish".to_string(),
        description: "Discount marketplace with standard commercial ad-tech tracking"
            .to_string(),
        risk_level: RiskLevel::Medium,
        category: "e-commerce".to_string(),
        tracking_infra: TrackingInfra {
            primary_domains: svec(&["wish.com", "wishassets.com"]),
            tracker_domains: svec(&[
                "doubleclick.net",
                "facebook.net",
                "google-analytics.com",
                "branch.io",
            ]),
            script_indicators: svec(&["wish_tag.js", "branch-latest.min.js"]),
        },
        fingerprint_methods: FingerprintMethods {
            canvas: true,
            webgl: false,
            audio: false,
            fonts: false,
            sensors: false,
            battery: false,
            webrtc: false,
            behavioral: false,
        },
        storage_keys: svec(&["_wish_session", "sweeper_uuid", "bsid"]),
        countermeasures: Countermeasures {
            block_domains: true,
            spoof_fingerprint: false,
            clear_cookies: true,
            use_container: false,
        },
        vulnerabilities: None,
        region: None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
