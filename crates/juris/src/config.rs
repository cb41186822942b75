use serde::{Deserialize, Serialize};

use juris_core::{
    JurisError, JurisResult, CONSENT_COOKIE_MAX_AGE_SECS, CONSENT_HISTORY_LIMIT,
    RENEWAL_PERIOD_DAYS,
};

/// Engine configuration. Defaults encode the standard contract, so an
/// empty document (`{}`) yields a fully working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurisConfig {
    /// Whether the transport is encrypted. Drives the Secure attribute on
    /// persisted entries and the secure-prefix audit check.
    #[serde(default)]
    pub secure_transport: bool,

    /// Recorded on consent history entries.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Days before a recorded decision requires re-prompting.
    #[serde(default = "default_renewal_days")]
    pub renewal_days: u64,

    /// Max-age applied to persisted consent entries.
    #[serde(default = "default_cookie_max_age_secs")]
    pub cookie_max_age_secs: u64,

    /// Bound on the consent audit trail.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Interval for the periodic audit scheduler; `None` disables it.
    #[serde(default)]
    pub audit_interval_secs: Option<u64>,
}

fn default_renewal_days() -> u64 {
    RENEWAL_PERIOD_DAYS
}

fn default_cookie_max_age_secs() -> u64 {
    CONSENT_COOKIE_MAX_AGE_SECS
}

fn default_history_limit() -> usize {
    CONSENT_HISTORY_LIMIT
}

impl Default for JurisConfig {
    fn default() -> Self {
        Self {
            secure_transport: false,
            user_agent: None,
            renewal_days: default_renewal_days(),
            cookie_max_age_secs: default_cookie_max_age_secs(),
            history_limit: default_history_limit(),
            audit_interval_secs: None,
        }
    }
}

impl JurisConfig {
    pub fn from_json_str(raw: &str) -> JurisResult<Self> {
        serde_json::from_str(raw).map_err(|e| JurisError::Serialization(e.to_string()))
    }
}
