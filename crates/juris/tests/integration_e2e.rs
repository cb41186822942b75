//! End-to-end integration test: "Does it actually work?"
//!
//! Exercises the engine's observable contract through the public facade:
//! consent round-trips, the necessary invariant, renewal boundaries, score
//! clamping, category gating, refused-cookie deletion, and the audit
//! export document.

use std::sync::Arc;

use juris::{
    classify, needs_renewal_at, summarize, ConsentCategory, ConsentMethod, ConsentSettings,
    CookieJar, InMemoryJar, JurisConfig, JurisError, Runtime, Timestamp, CONSENT_COOKIE,
};
use juris_audit::{ISSUE_NO_CONSENT, ISSUE_SENSITIVE_DATA};
use juris_consent::RENEWAL_PERIOD_SECS;

fn runtime_with_jar() -> (Runtime, Arc<InMemoryJar>) {
    let jar = Arc::new(InMemoryJar::new());
    let rt = Runtime::new(JurisConfig::default(), Arc::clone(&jar) as Arc<dyn CookieJar>);
    (rt, jar)
}

// ============================================================================
// Scenario 1: a pre-existing analytics cookie with consent refused
// ============================================================================

#[test]
fn analytics_cookie_without_consent_is_flagged() {
    let (rt, jar) = runtime_with_jar();
    jar.seed(
        CONSENT_COOKIE,
        r#"{"necessary":true,"analytics":false,"marketing":false,"preferences":false}"#,
    );
    jar.seed("_ga", "GA1.2.12345");

    let results = rt.engine().run().unwrap();
    let ga = results.iter().find(|r| r.name == "_ga").unwrap();

    assert_eq!(ga.category, ConsentCategory::Analytics);
    assert!(!ga.has_consent);
    assert!(ga
        .compliance_issues
        .contains(&"Cookie set without user consent".to_string()));
}

// ============================================================================
// Scenario 2: accept-all clears no-consent findings for classified cookies
// ============================================================================

#[test]
fn accept_all_then_audit_has_no_consent_issues_on_classified_cookies() {
    let (rt, jar) = runtime_with_jar();
    jar.seed("_ga", "GA1.2.12345");
    jar.seed("_fbp", "fb.1.999");
    jar.seed("theme_mode", "dark");
    jar.seed("mystery", "data");

    rt.store().accept_all(ConsentMethod::Banner).unwrap();

    let results = rt.engine().run().unwrap();
    for result in results
        .iter()
        .filter(|r| r.category != ConsentCategory::Unknown)
    {
        assert!(
            !result
                .compliance_issues
                .contains(&ISSUE_NO_CONSENT.to_string()),
            "{} should be consented after accept-all",
            result.name
        );
    }
}

// ============================================================================
// Scenario 3: reject-all returns the necessary-only baseline
// ============================================================================

#[test]
fn reject_all_reads_back_as_essential_only() {
    let (rt, _) = runtime_with_jar();
    rt.store().accept_all(ConsentMethod::Banner).unwrap();
    rt.store().reject_all(ConsentMethod::Banner).unwrap();

    assert_eq!(
        rt.store().settings(),
        Some(ConsentSettings {
            necessary: true,
            analytics: false,
            marketing: false,
            preferences: false,
        })
    );
}

// ============================================================================
// Scenario 4: sensitive data is flagged regardless of consent state
// ============================================================================

#[test]
fn card_number_in_cookie_value_is_flagged() {
    let (rt, jar) = runtime_with_jar();
    rt.store().accept_all(ConsentMethod::Api).unwrap();
    jar.seed("session_abc", "4111-1111-1111-1111");

    let results = rt.engine().run().unwrap();
    let session = results.iter().find(|r| r.name == "session_abc").unwrap();
    assert!(session
        .compliance_issues
        .contains(&"Cookie may contain sensitive data".to_string()));
}

// ============================================================================
// Scenario 5 + P3: renewal boundary on both sides
// ============================================================================

#[test]
fn renewal_boundary_is_exact() {
    let now = Timestamp::from_seconds(2_000_000_000);
    let at = |offset_secs: u64| Timestamp::from_seconds(now.seconds_since_epoch - offset_secs);

    assert!(needs_renewal_at(None, now, RENEWAL_PERIOD_SECS));
    assert!(needs_renewal_at(
        Some(at(400 * 86_400)),
        now,
        RENEWAL_PERIOD_SECS
    ));
    assert!(!needs_renewal_at(
        Some(at(30 * 86_400)),
        now,
        RENEWAL_PERIOD_SECS
    ));
    // 365 days minus one second vs plus one second.
    assert!(!needs_renewal_at(
        Some(at(RENEWAL_PERIOD_SECS - 1)),
        now,
        RENEWAL_PERIOD_SECS
    ));
    assert!(needs_renewal_at(
        Some(at(RENEWAL_PERIOD_SECS + 1)),
        now,
        RENEWAL_PERIOD_SECS
    ));
}

// ============================================================================
// Scenario 6: toggling a category off deletes its cookies
// ============================================================================

#[test]
fn disabling_preferences_deletes_preference_cookies() {
    let (rt, jar) = runtime_with_jar();
    jar.seed("juris_preferences", "compact");
    jar.seed("theme_mode", "dark");

    let first = ConsentSettings {
        necessary: true,
        analytics: true,
        marketing: false,
        preferences: true,
    };
    rt.store()
        .save_settings(first, ConsentMethod::Settings)
        .unwrap();
    assert!(jar.get("juris_preferences").unwrap().is_some());

    let second = ConsentSettings {
        preferences: false,
        ..first
    };
    rt.store()
        .save_settings(second, ConsentMethod::Settings)
        .unwrap();

    assert!(jar.get("juris_preferences").unwrap().is_none());
    assert!(jar.get("theme_mode").unwrap().is_none());
}

// ============================================================================
// P1: audit idempotence
// ============================================================================

#[test]
fn repeated_audit_runs_are_identical() {
    let (rt, jar) = runtime_with_jar();
    rt.store().accept_all(ConsentMethod::Api).unwrap();
    jar.seed("_ga", "GA1.2.12345");
    jar.seed("mystery", "user@example.com");

    let first = rt.engine().run().unwrap();
    let second = rt.engine().run().unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// P2: the necessary invariant is a hard rejection
// ============================================================================

#[test]
fn necessary_false_never_persists() {
    let (rt, _) = runtime_with_jar();
    let bad = ConsentSettings {
        necessary: false,
        analytics: true,
        marketing: true,
        preferences: true,
    };
    let err = rt
        .store()
        .save_settings(bad, ConsentMethod::Api)
        .unwrap_err();
    assert!(matches!(err, JurisError::Validation(_)));
    assert_eq!(rt.store().settings(), None);
}

// ============================================================================
// P4: both scores stay clamped to [0, 100]
// ============================================================================

#[test]
fn scores_are_clamped_under_many_violations() {
    // Audit side: a jar full of unconsented sensitive unknowns.
    let (rt, jar) = runtime_with_jar();
    for i in 0..30 {
        jar.seed(&format!("rogue_{}", i), "123-45-6789");
    }
    let results = rt.engine().run().unwrap();
    let summary = summarize(&results);
    assert_eq!(summary.compliance_score, 0);
    assert!(summary.issues.contains(&ISSUE_SENSITIVE_DATA.to_string()));

    // Validator side: an empty document violates every rule at once.
    let report = juris::validate(
        &serde_json::json!({}),
        Some(&juris::StaticSurface::default()),
    );
    assert_eq!(report.compliance_score, 0);

    // Clean inputs sit at the top of the range.
    let clean = summarize(&[]);
    assert_eq!(clean.compliance_score, 100);
}

// ============================================================================
// P5: category gating for refused marketing
// ============================================================================

#[test]
fn marketing_cookie_is_gated_when_marketing_refused() {
    let (rt, jar) = runtime_with_jar();
    rt.store()
        .save_settings(
            ConsentSettings {
                necessary: true,
                analytics: true,
                marketing: false,
                preferences: true,
            },
            ConsentMethod::Settings,
        )
        .unwrap();
    // The save deleted refused marketing cookies; drop one in afterwards,
    // as a third-party script would.
    jar.seed("_fbp", "fb.1.1234");

    let results = rt.engine().run().unwrap();
    let fbp = results.iter().find(|r| r.name == "_fbp").unwrap();
    assert_eq!(fbp.category, ConsentCategory::Marketing);
    assert!(!fbp.has_consent);
    assert!(fbp
        .compliance_issues
        .contains(&"Cookie set without user consent".to_string()));
}

// ============================================================================
// P6: save/read round-trip
// ============================================================================

#[test]
fn save_then_get_round_trips_exactly() {
    let (rt, _) = runtime_with_jar();
    let settings = ConsentSettings {
        necessary: true,
        analytics: false,
        marketing: true,
        preferences: false,
    };
    rt.store()
        .save_settings(settings, ConsentMethod::Api)
        .unwrap();
    assert_eq!(rt.store().settings(), Some(settings));
}

// ============================================================================
// The export artifact
// ============================================================================

#[test]
fn audit_export_is_a_complete_json_document() {
    let (rt, jar) = runtime_with_jar();
    rt.store().accept_all(ConsentMethod::Banner).unwrap();
    jar.seed("_ga", "GA1.2.12345");
    jar.seed("mystery", "data");

    let doc = rt.audit().unwrap();
    assert_eq!(doc.version, "1.0");
    assert_eq!(doc.summary.total_cookies, doc.details.len());
    assert!(Timestamp::from_rfc3339(&doc.export_date).is_some());

    let json = serde_json::to_string(&doc).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed.get("summary").is_some());
    assert!(parsed.get("details").is_some());
    assert_eq!(parsed["version"], "1.0");
}

// ============================================================================
// Classification sanity through the facade
// ============================================================================

#[test]
fn classification_is_shared_and_closed() {
    assert_eq!(
        classify("juris_cookie_consent").category,
        ConsentCategory::Necessary
    );
    assert_eq!(classify("_ga_XYZ").category, ConsentCategory::Analytics);
    assert_eq!(classify("_fbp").category, ConsentCategory::Marketing);
    assert_eq!(
        classify("nobody_knows_me").category,
        ConsentCategory::Unknown
    );
}
