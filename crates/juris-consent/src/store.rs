use std::sync::{Arc, Mutex};

use juris_classify::classify;
use juris_core::{
    ConsentCategory, ConsentMethod, ConsentRecord, ConsentSettings, CookieAttributes, CookieJar,
    JurisError, JurisResult, Timestamp, CONSENT_COOKIE, CONSENT_COOKIE_MAX_AGE_SECS,
    CONSENT_HISTORY_LIMIT, CONSENT_TIMESTAMP_COOKIE,
};

use crate::events::{ChangeNotifier, ConsentListener, ListenerId};
use crate::history::ConsentHistory;
use crate::renewal;

/// Construction options for a [`ConsentStore`]. Defaults encode the
/// standard contract: one-year cookie lifetime, 365-day renewal window,
/// ten-entry history.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Whether the transport is encrypted; sets the Secure attribute on
    /// persisted consent entries.
    pub secure_transport: bool,
    /// Recorded on each history entry.
    pub user_agent: Option<String>,
    pub renewal_period_secs: u64,
    pub cookie_max_age_secs: u64,
    pub history_limit: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            secure_transport: false,
            user_agent: None,
            renewal_period_secs: renewal::RENEWAL_PERIOD_SECS,
            cookie_max_age_secs: CONSENT_COOKIE_MAX_AGE_SECS,
            history_limit: CONSENT_HISTORY_LIMIT,
        }
    }
}

/// The single owner of the persisted consent decision.
///
/// All mutation goes through [`save_settings`](ConsentStore::save_settings),
/// which replaces the record wholesale — never a partial merge — so there
/// are no interleaved partial-update races to guard against. Reads degrade
/// to "no settings" on storage failure or a malformed record; the only
/// hard rejection is a settings object with `necessary == false`.
pub struct ConsentStore {
    jar: Arc<dyn CookieJar>,
    notifier: ChangeNotifier,
    history: Mutex<ConsentHistory>,
    options: StoreOptions,
}

impl ConsentStore {
    pub fn new(jar: Arc<dyn CookieJar>) -> Self {
        Self::with_options(jar, StoreOptions::default())
    }

    pub fn with_options(jar: Arc<dyn CookieJar>, options: StoreOptions) -> Self {
        Self {
            jar,
            notifier: ChangeNotifier::new(),
            history: Mutex::new(ConsentHistory::new(options.history_limit)),
            options,
        }
    }

    /// The current consent decision, or `None` when no record exists, the
    /// jar is unavailable, or the persisted value is malformed. Never
    /// errors — every failure here means "consent required".
    pub fn settings(&self) -> Option<ConsentSettings> {
        let raw = match self.jar.get(CONSENT_COOKIE) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!(error = %e, "consent read degraded to none");
                return None;
            }
        };

        match serde_json::from_str::<ConsentSettings>(&raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(error = %e, "malformed consent record; treating as absent");
                None
            }
        }
    }

    /// When the current decision was recorded, if a parseable timestamp
    /// exists.
    pub fn timestamp(&self) -> Option<Timestamp> {
        let raw = self.jar.get(CONSENT_TIMESTAMP_COOKIE).ok()??;
        Timestamp::from_rfc3339(&raw)
    }

    /// Persist a new consent decision.
    ///
    /// Rejects `necessary == false` outright. On success the settings and a
    /// fresh timestamp are written as two independent entries, every live
    /// cookie in a now-refused category is deleted, a history record is
    /// appended, and listeners are notified synchronously — all before this
    /// returns.
    pub fn save_settings(
        &self,
        settings: ConsentSettings,
        method: ConsentMethod,
    ) -> JurisResult<()> {
        if !settings.necessary {
            return Err(JurisError::Validation(
                "necessary cookies cannot be disabled".to_string(),
            ));
        }

        let now = Timestamp::now();
        let attrs = CookieAttributes::consent_record(
            self.options.secure_transport,
            self.options.cookie_max_age_secs,
        );

        let payload = serde_json::to_string(&settings)
            .map_err(|e| JurisError::Serialization(e.to_string()))?;

        self.jar
            .set(CONSENT_COOKIE, &payload, &attrs)
            .map_err(|e| {
                tracing::warn!(error = %e, "consent persistence failed");
                e
            })?;
        self.jar
            .set(CONSENT_TIMESTAMP_COOKIE, &now.to_rfc3339(), &attrs)?;

        self.delete_refused(&settings);
        self.record_history(settings, now, method);

        tracing::info!(
            method = %method,
            analytics = settings.analytics,
            marketing = settings.marketing,
            preferences = settings.preferences,
            "consent settings saved"
        );

        self.notifier.notify(&settings);
        Ok(())
    }

    /// Whether the given category currently has consent. Necessary is
    /// always consented; unknown never is; everything else reads the
    /// current settings and defaults to `false` when none exist.
    pub fn is_category_consented(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Necessary => true,
            ConsentCategory::Unknown => false,
            _ => self
                .settings()
                .map(|s| s.granted(category))
                .unwrap_or(false),
        }
    }

    pub fn needs_renewal(&self) -> bool {
        renewal::needs_renewal_at(
            self.timestamp(),
            Timestamp::now(),
            self.options.renewal_period_secs,
        )
    }

    pub fn accept_all(&self, method: ConsentMethod) -> JurisResult<()> {
        self.save_settings(ConsentSettings::accept_all(), method)
    }

    pub fn reject_all(&self, method: ConsentMethod) -> JurisResult<()> {
        self.save_settings(ConsentSettings::essential_only(), method)
    }

    /// Reset to the necessary-only baseline and sweep every cookie that is
    /// not classified necessary — including unclassified ones, which the
    /// regular refused-category deletion leaves alone.
    pub fn clear_non_essential(&self) -> JurisResult<()> {
        self.save_settings(ConsentSettings::essential_only(), ConsentMethod::Api)?;

        let names = match self.jar.enumerate() {
            Ok(pairs) => pairs,
            Err(e) => {
                tracing::warn!(error = %e, "non-essential sweep skipped: jar unavailable");
                return Ok(());
            }
        };

        for (name, _) in names {
            if classify(&name).category != ConsentCategory::Necessary {
                let _ = self.jar.delete(&name);
            }
        }
        Ok(())
    }

    /// The retained consent audit trail, oldest first.
    pub fn history(&self) -> Vec<ConsentRecord> {
        self.history
            .lock()
            .map(|h| h.records())
            .unwrap_or_default()
    }

    pub fn on_change(&self, listener: ConsentListener) -> ListenerId {
        self.notifier.on_change(listener)
    }

    pub fn off_change(&self, id: ListenerId) -> bool {
        self.notifier.off_change(id)
    }

    /// The jar this store writes through (shared with the audit engine).
    pub fn jar(&self) -> Arc<dyn CookieJar> {
        Arc::clone(&self.jar)
    }

    /// Whether this store was configured for an encrypted transport.
    pub fn secure_transport(&self) -> bool {
        self.options.secure_transport
    }

    /// Delete live cookies belonging to any category the new settings
    /// refuse. Unknown cookies belong to no refused category and stay.
    fn delete_refused(&self, settings: &ConsentSettings) {
        let pairs = match self.jar.enumerate() {
            Ok(pairs) => pairs,
            Err(e) => {
                tracing::debug!(error = %e, "refused-category deletion skipped");
                return;
            }
        };

        for (name, _) in pairs {
            let category = classify(&name).category;
            let refused = matches!(
                category,
                ConsentCategory::Analytics
                    | ConsentCategory::Marketing
                    | ConsentCategory::Preferences
            ) && !settings.granted(category);

            if refused {
                if let Ok(true) = self.jar.delete(&name) {
                    tracing::debug!(cookie = %name, category = %category, "refused cookie deleted");
                }
            }
        }
    }

    fn record_history(&self, settings: ConsentSettings, now: Timestamp, method: ConsentMethod) {
        if let Ok(mut history) = self.history.lock() {
            history.push(ConsentRecord {
                timestamp: now,
                settings,
                user_agent: self.options.user_agent.clone(),
                method,
                version: env!("CARGO_PKG_VERSION").to_string(),
            });
        }
    }
}
