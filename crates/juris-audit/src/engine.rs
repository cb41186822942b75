use std::sync::Arc;

use juris_classify::classify;
use juris_consent::ConsentStore;
use juris_core::{
    ConsentCategory, CookieAttributes, CookieAuditResult, CookieJar, JurisError, JurisResult,
};

use crate::sensitive::contains_sensitive_data;

/// Display truncation applied to audited cookie values.
const VALUE_DISPLAY_LIMIT: usize = 50;

/// Combined name+value size above which a cookie is flagged.
const COOKIE_SIZE_LIMIT: usize = 4096;

// Per-cookie compliance issue strings. The summary's recommendation
// derivation keys off these exact values.
pub const ISSUE_NO_CONSENT: &str = "Cookie set without user consent";
pub const ISSUE_SENSITIVE_DATA: &str = "Cookie may contain sensitive data";
pub const ISSUE_OVERSIZE: &str = "Cookie exceeds the 4096 byte size limit";
pub const ISSUE_MISSING_SECURE_PREFIX: &str =
    "Sensitive cookie lacks a __Secure- or __Host- name prefix";
pub const ISSUE_UNDOCUMENTED: &str = "Cookie is not documented in the classification registry";

/// Enumerates the live jar, classifies every cookie, gates it against the
/// consent store, and detects per-cookie compliance issues.
///
/// Stateless between invocations and idempotent: repeated runs over an
/// unchanged jar and unchanged settings produce identical results, so
/// overlapping invocations are redundant, not corrupting.
pub struct AuditEngine {
    jar: Arc<dyn CookieJar>,
    store: Arc<ConsentStore>,
}

impl AuditEngine {
    pub fn new(jar: Arc<dyn CookieJar>, store: Arc<ConsentStore>) -> Self {
        Self { jar, store }
    }

    /// One audit pass over the live jar.
    ///
    /// An unavailable jar yields an empty result set rather than failing —
    /// audit output is advisory and must never block the caller.
    pub fn run(&self) -> JurisResult<Vec<CookieAuditResult>> {
        let pairs = match self.jar.enumerate() {
            Ok(pairs) => pairs,
            Err(JurisError::StorageUnavailable) => {
                tracing::warn!("audit pass skipped: cookie storage unavailable");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut results: Vec<CookieAuditResult> = pairs
            .iter()
            .map(|(name, value)| self.audit_cookie(name, value))
            .collect();
        // Jar enumeration order is not defined; fix it for stable output.
        results.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(cookies = results.len(), "audit pass complete");
        Ok(results)
    }

    fn audit_cookie(&self, name: &str, value: &str) -> CookieAuditResult {
        let classification = classify(name);
        let category = classification.category;

        let has_consent = category == ConsentCategory::Necessary
            || self.store.is_category_consented(category);

        let sensitive = contains_sensitive_data(value);
        let mut compliance_issues = Vec::new();

        if category != ConsentCategory::Necessary && !has_consent {
            compliance_issues.push(ISSUE_NO_CONSENT.to_string());
        }
        if sensitive {
            compliance_issues.push(ISSUE_SENSITIVE_DATA.to_string());
        }
        if name.len() + value.len() > COOKIE_SIZE_LIMIT {
            compliance_issues.push(ISSUE_OVERSIZE.to_string());
        }
        if self.store.secure_transport()
            && (category == ConsentCategory::Necessary || sensitive)
            && !has_secure_name_prefix(name)
        {
            compliance_issues.push(ISSUE_MISSING_SECURE_PREFIX.to_string());
        }
        if category == ConsentCategory::Unknown {
            compliance_issues.push(ISSUE_UNDOCUMENTED.to_string());
        }

        let attrs = self
            .jar
            .describe(name)
            .ok()
            .flatten()
            .unwrap_or_else(CookieAttributes::default);

        CookieAuditResult {
            name: name.to_string(),
            value: truncate_for_display(value),
            domain: attrs.domain,
            path: attrs.path,
            secure: attrs.secure,
            http_only: attrs.http_only,
            same_site: Some(attrs.same_site),
            size_bytes: name.len() + value.len(),
            category,
            purpose: classification.purpose.to_string(),
            is_first_party: classification.is_first_party,
            has_consent,
            compliance_issues,
        }
    }
}

fn has_secure_name_prefix(name: &str) -> bool {
    name.starts_with("__Secure-") || name.starts_with("__Host-")
}

fn truncate_for_display(value: &str) -> String {
    value.chars().take(VALUE_DISPLAY_LIMIT).collect()
}
