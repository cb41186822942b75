use std::collections::BTreeMap;

use juris_core::{ConsentCategory, CookieAuditResult, CookieAuditSummary, Timestamp};

use crate::engine::{
    ISSUE_NO_CONSENT, ISSUE_OVERSIZE, ISSUE_SENSITIVE_DATA, ISSUE_UNDOCUMENTED,
};

/// Penalty per detected issue in the audit score.
const ISSUE_PENALTY: u64 = 10;

/// Aggregate per-cookie audit results into a summary.
///
/// The score is issue-count based — `max(0, 100 - 10 * total issues)` — and
/// deliberately independent of the validator's rule-penalty score. The two
/// numbers are reported separately and never reconciled.
pub fn summarize(results: &[CookieAuditResult]) -> CookieAuditSummary {
    let mut category_counts: BTreeMap<ConsentCategory, usize> = BTreeMap::new();
    let mut issues: Vec<String> = Vec::new();
    let mut total_issue_count: u64 = 0;

    for result in results {
        *category_counts.entry(result.category).or_insert(0) += 1;
        total_issue_count += result.compliance_issues.len() as u64;
        for issue in &result.compliance_issues {
            if !issues.contains(issue) {
                issues.push(issue.clone());
            }
        }
    }

    let compliance_score = 100u64
        .saturating_sub(total_issue_count.saturating_mul(ISSUE_PENALTY))
        .min(100) as u8;

    CookieAuditSummary {
        total_cookies: results.len(),
        recommendations: derive_recommendations(results, &issues),
        category_counts,
        compliance_score,
        issues,
        last_audit: Timestamp::now(),
    }
}

fn derive_recommendations(results: &[CookieAuditResult], issues: &[String]) -> Vec<String> {
    let mut recommendations = Vec::new();
    let has = |needle: &str| issues.iter().any(|i| i == needle);

    if has(ISSUE_NO_CONSENT) {
        recommendations.push("Implement proper cookie consent management".to_string());
    }
    if has(ISSUE_SENSITIVE_DATA) {
        recommendations
            .push("Review cookies for sensitive data and implement encryption".to_string());
    }
    if has(ISSUE_OVERSIZE) {
        recommendations.push("Optimize cookie sizes or use server-side storage".to_string());
    }
    if has(ISSUE_UNDOCUMENTED) {
        let unknown = results
            .iter()
            .filter(|r| r.category == ConsentCategory::Unknown)
            .count();
        recommendations.push(format!("Classify {} unknown cookies", unknown));
    }
    if results.iter().any(|r| !r.is_first_party) {
        recommendations
            .push("Review third-party cookie usage and data sharing agreements".to_string());
    }

    recommendations
}
