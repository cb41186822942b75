use serde::{Deserialize, Serialize};
use serde_json::Value;

use juris_core::ConsentSettings;

use crate::surface::UiSurface;

/// Penalty per blocking rule violation.
const ERROR_PENALTY: u8 = 25;
/// Penalty per advisory rule violation.
const WARNING_PENALTY: u8 = 10;

/// The outcome of validating a consent settings document.
///
/// `compliance_score` is the rule-penalty score (100 − 25 per error − 10
/// per warning, floored at 0). It is a separate number from the audit
/// engine's issue-count score; the two are never reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub compliance_score: u8,
    pub recommendations: Vec<String>,
}

/// Validate a raw consent settings document against the rule set.
///
/// Operating on raw JSON keeps the granularity rule honest: a missing or
/// mistyped field is reported as a violation, never papered over by a
/// default. Rules are evaluated independently; every violation lands in
/// the report.
pub fn validate(doc: &Value, surface: Option<&dyn UiSurface>) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // R1: necessary must be true.
    if doc.get("necessary").and_then(Value::as_bool) != Some(true) {
        errors.push("Necessary cookies cannot be disabled".to_string());
    }

    // R2: all four category fields must be present and boolean-typed.
    for field in ["necessary", "analytics", "marketing", "preferences"] {
        match doc.get(field) {
            Some(Value::Bool(_)) => {}
            Some(_) => errors.push(format!("Field '{}' must be a boolean", field)),
            None => errors.push(format!("Field '{}' is missing", field)),
        }
    }

    // R3/R4: environment-dependent discoverability checks. With no surface
    // to observe they are skipped, not failed.
    if let Some(surface) = surface {
        if !surface.has_policy_link() {
            warnings.push("No discoverable link to a cookie or privacy policy".to_string());
        }
        if !surface.has_preference_controls() {
            warnings
                .push("No discoverable mechanism for changing cookie preferences".to_string());
        }
    }

    let recommendations = derive_recommendations(doc, &errors);
    let compliance_score = score(errors.len(), warnings.len());

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        compliance_score,
        recommendations,
    }
}

/// Validate an already-typed settings value. Field presence is guaranteed by
/// the type, so this can only trip R1 and the environment checks.
pub fn validate_settings(
    settings: &ConsentSettings,
    surface: Option<&dyn UiSurface>,
) -> ValidationReport {
    match serde_json::to_value(settings) {
        Ok(doc) => validate(&doc, surface),
        // ConsentSettings serialization is infallible in practice; treat a
        // failure as a blocking violation rather than panicking.
        Err(e) => ValidationReport {
            is_valid: false,
            errors: vec![format!("settings not serializable: {}", e)],
            warnings: Vec::new(),
            compliance_score: score(1, 0),
            recommendations: vec![FIX_ERRORS_RECOMMENDATION.to_string()],
        },
    }
}

pub const FIX_ERRORS_RECOMMENDATION: &str =
    "Fix critical compliance errors before deployment";

fn derive_recommendations(doc: &Value, errors: &[String]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !errors.is_empty() {
        recommendations.push(FIX_ERRORS_RECOMMENDATION.to_string());
    }

    let granted = |field: &str| doc.get(field).and_then(Value::as_bool).unwrap_or(false);

    if granted("marketing") && !granted("analytics") {
        recommendations.push(
            "Marketing cookies typically require analytics for proper attribution".to_string(),
        );
    }

    if !granted("analytics") && !granted("marketing") && !granted("preferences") {
        recommendations.push(
            "Consider explaining the benefits of optional cookies to users".to_string(),
        );
    }

    recommendations
}

fn score(errors: usize, warnings: usize) -> u8 {
    let penalty = errors as u64 * ERROR_PENALTY as u64 + warnings as u64 * WARNING_PENALTY as u64;
    100u64.saturating_sub(penalty).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::StaticSurface;
    use serde_json::json;

    fn full_surface() -> StaticSurface {
        StaticSurface {
            policy_link: true,
            preference_controls: true,
        }
    }

    #[test]
    fn test_valid_settings_score_100() {
        let report = validate_settings(&ConsentSettings::accept_all(), Some(&full_surface()));
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(report.compliance_score, 100);
    }

    #[test]
    fn test_necessary_false_is_blocking() {
        let doc = json!({
            "necessary": false,
            "analytics": true,
            "marketing": true,
            "preferences": true
        });
        let report = validate(&doc, Some(&full_surface()));
        assert!(!report.is_valid);
        assert!(report
            .errors
            .iter()
            .any(|e| e == "Necessary cookies cannot be disabled"));
        assert_eq!(report.compliance_score, 75);
    }

    #[test]
    fn test_missing_field_is_violation_not_default() {
        let doc = json!({ "necessary": true, "analytics": false });
        let report = validate(&doc, None);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e == "Field 'marketing' is missing"));
        assert!(report
            .errors
            .iter()
            .any(|e| e == "Field 'preferences' is missing"));
    }

    #[test]
    fn test_mistyped_field_is_violation() {
        let doc = json!({
            "necessary": true,
            "analytics": "yes",
            "marketing": false,
            "preferences": false
        });
        let report = validate(&doc, None);
        assert!(report
            .errors
            .iter()
            .any(|e| e == "Field 'analytics' must be a boolean"));
    }

    #[test]
    fn test_environment_checks_skipped_without_surface() {
        let report = validate_settings(&ConsentSettings::accept_all(), None);
        assert!(report.warnings.is_empty());
        assert_eq!(report.compliance_score, 100);
    }

    #[test]
    fn test_environment_checks_warn_with_bare_surface() {
        let report =
            validate_settings(&ConsentSettings::accept_all(), Some(&StaticSurface::default()));
        assert!(report.is_valid); // warnings are advisory
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.compliance_score, 80);
    }

    #[test]
    fn test_score_floors_at_zero() {
        // Everything wrong at once: R1 + four R2 misses + both warnings.
        let report = validate(&json!({}), Some(&StaticSurface::default()));
        assert!(!report.is_valid);
        assert_eq!(report.compliance_score, 0);
    }

    #[test]
    fn test_marketing_without_analytics_recommendation() {
        let doc = json!({
            "necessary": true,
            "analytics": false,
            "marketing": true,
            "preferences": false
        });
        let report = validate(&doc, None);
        assert!(report.recommendations.iter().any(|r| r
            == "Marketing cookies typically require analytics for proper attribution"));
    }

    #[test]
    fn test_all_optional_off_recommendation() {
        let report = validate_settings(&ConsentSettings::essential_only(), None);
        assert!(report.is_valid);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r == "Consider explaining the benefits of optional cookies to users"));
    }

    #[test]
    fn test_errors_produce_fix_recommendation() {
        let doc = json!({ "necessary": false });
        let report = validate(&doc, None);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r == FIX_ERRORS_RECOMMENDATION));
    }
}
