use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Persisted cookie names and notification event name
// ---------------------------------------------------------------------------

/// Cookie entry holding the JSON-serialized [`ConsentSettings`].
pub const CONSENT_COOKIE: &str = "juris_cookie_consent";

/// Cookie entry holding the RFC 3339 instant of the current decision.
pub const CONSENT_TIMESTAMP_COOKIE: &str = "juris_consent_timestamp";

/// Name of the change-notification event dispatched after persistence.
pub const CONSENT_CHANGED_EVENT: &str = "cookieConsentChanged";

/// Consent records are re-prompted after this many days.
pub const RENEWAL_PERIOD_DAYS: u64 = 365;

/// Max-age applied to both persisted consent entries (one year).
pub const CONSENT_COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Bounded length of the consent audit trail.
pub const CONSENT_HISTORY_LIMIT: usize = 10;

/// Schema version stamped on audit export documents.
pub const AUDIT_EXPORT_VERSION: &str = "1.0";

// ---------------------------------------------------------------------------
// ConsentCategory — the closed five-value taxonomy
// ---------------------------------------------------------------------------

/// The closed cookie taxonomy shared by the classifier, the validator, and
/// the audit engine. Exhaustive (no #[non_exhaustive]) so a new category
/// forces compile-time review of all match sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentCategory {
    Necessary,
    Analytics,
    Marketing,
    Preferences,
    /// A cookie matching no known pattern. Not an error — surfaces as an
    /// undocumented finding in the audit output.
    Unknown,
}

impl ConsentCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentCategory::Necessary => "necessary",
            ConsentCategory::Analytics => "analytics",
            ConsentCategory::Marketing => "marketing",
            ConsentCategory::Preferences => "preferences",
            ConsentCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ConsentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConsentSettings — the canonical per-category decision
// ---------------------------------------------------------------------------

/// The user's per-category consent decision.
///
/// Invariant: `necessary` is always `true` in any accepted settings object.
/// A value with `necessary == false` must be rejected by the store, never
/// silently corrected. The record is replaced wholesale on every save —
/// never merged — which rules out interleaved partial-update races.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentSettings {
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
    pub preferences: bool,
}

impl ConsentSettings {
    /// All categories granted.
    pub fn accept_all() -> Self {
        Self {
            necessary: true,
            analytics: true,
            marketing: true,
            preferences: true,
        }
    }

    /// The necessary-only baseline used by reject-all and clear flows.
    pub fn essential_only() -> Self {
        Self {
            necessary: true,
            analytics: false,
            marketing: false,
            preferences: false,
        }
    }

    /// Whether this settings object grants the given category.
    ///
    /// Necessary is implicitly granted; Unknown is never granted.
    pub fn granted(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Necessary => true,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
            ConsentCategory::Preferences => self.preferences,
            ConsentCategory::Unknown => false,
        }
    }
}

impl Default for ConsentSettings {
    fn default() -> Self {
        Self::essential_only()
    }
}

// ---------------------------------------------------------------------------
// Timestamp — canonical time representation (seconds + nanoseconds)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds_since_epoch: u64,
    pub nanoseconds: u32,
}

impl Timestamp {
    pub fn now() -> Self {
        let now = chrono::Utc::now();
        Self {
            seconds_since_epoch: now.timestamp() as u64,
            nanoseconds: now.timestamp_subsec_nanos(),
        }
    }

    pub fn from_seconds(seconds: u64) -> Self {
        Self {
            seconds_since_epoch: seconds,
            nanoseconds: 0,
        }
    }

    pub fn to_rfc3339(&self) -> String {
        let dt =
            chrono::DateTime::from_timestamp(self.seconds_since_epoch as i64, self.nanoseconds);
        dt.map(|d| d.to_rfc3339())
            .unwrap_or_else(|| "invalid".to_string())
    }

    /// Parse an RFC 3339 instant. Returns `None` on any malformed input —
    /// a garbled persisted timestamp degrades to "no timestamp".
    pub fn from_rfc3339(s: &str) -> Option<Self> {
        let dt = chrono::DateTime::parse_from_rfc3339(s).ok()?;
        let seconds = dt.timestamp();
        if seconds < 0 {
            return None;
        }
        Some(Self {
            seconds_since_epoch: seconds as u64,
            nanoseconds: dt.timestamp_subsec_nanos(),
        })
    }

    /// Whole seconds elapsed from `earlier` to `self`, zero if `earlier`
    /// is in the future.
    pub fn seconds_since(&self, earlier: &Timestamp) -> u64 {
        self.seconds_since_epoch
            .saturating_sub(earlier.seconds_since_epoch)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for Timestamp {
    fn from(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            seconds_since_epoch: dt.timestamp() as u64,
            nanoseconds: dt.timestamp_subsec_nanos(),
        }
    }
}

// ---------------------------------------------------------------------------
// ConsentMethod + ConsentRecord — the bounded audit trail
// ---------------------------------------------------------------------------

/// How a consent decision was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentMethod {
    Banner,
    Settings,
    Api,
}

impl fmt::Display for ConsentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsentMethod::Banner => write!(f, "banner"),
            ConsentMethod::Settings => write!(f, "settings"),
            ConsentMethod::Api => write!(f, "api"),
        }
    }
}

/// One append-only audit-trail entry. The store keeps the most recent
/// [`CONSENT_HISTORY_LIMIT`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub timestamp: Timestamp,
    pub settings: ConsentSettings,
    pub user_agent: Option<String>,
    pub method: ConsentMethod,
    pub version: String,
}

// ---------------------------------------------------------------------------
// Cookie attributes — the delivery contract for persisted entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => write!(f, "Strict"),
            SameSite::Lax => write!(f, "Lax"),
            SameSite::None => write!(f, "None"),
        }
    }
}

/// Attributes supplied alongside a cookie write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieAttributes {
    pub max_age_secs: Option<u64>,
    pub path: String,
    pub domain: Option<String>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
}

impl CookieAttributes {
    /// The attribute contract for both persisted consent entries:
    /// `path=/`, `max-age=31536000`, `SameSite=Lax`, `Secure` when the
    /// transport is encrypted.
    pub fn consent_record(secure_transport: bool, max_age_secs: u64) -> Self {
        Self {
            max_age_secs: Some(max_age_secs),
            path: "/".to_string(),
            domain: None,
            secure: secure_transport,
            http_only: false,
            same_site: SameSite::Lax,
        }
    }
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self {
            max_age_secs: None,
            path: "/".to_string(),
            domain: None,
            secure: false,
            http_only: false,
            same_site: SameSite::Lax,
        }
    }
}

// ---------------------------------------------------------------------------
// Audit output — per-cookie results and the aggregated summary
// ---------------------------------------------------------------------------

/// One audit finding per live cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieAuditResult {
    pub name: String,
    /// Truncated to 50 characters for display; `size_bytes` reflects the
    /// full value.
    pub value: String,
    pub domain: Option<String>,
    pub path: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
    pub size_bytes: usize,
    pub category: ConsentCategory,
    pub purpose: String,
    pub is_first_party: bool,
    pub has_consent: bool,
    pub compliance_issues: Vec<String>,
}

/// Aggregated view of one audit pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieAuditSummary {
    pub total_cookies: usize,
    pub category_counts: BTreeMap<ConsentCategory, usize>,
    /// Issue-count score: `max(0, 100 - 10 * total issues)`. Independent of
    /// the validator's rule-penalty score.
    pub compliance_score: u8,
    /// Deduplicated union of every per-cookie issue, first-seen order.
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub last_audit: Timestamp,
}

/// The downloadable audit artifact: summary, full detail list, export
/// instant, and schema version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditExport {
    pub summary: CookieAuditSummary,
    pub details: Vec<CookieAuditResult>,
    /// RFC 3339 instant of the export.
    pub export_date: String,
    pub version: String,
}
