use std::sync::Arc;
use std::time::Duration;

use juris_audit::{summarize, AuditEngine, AuditScheduler, SchedulerHandle};
use juris_consent::{ConsentStore, StoreOptions};
use juris_core::{
    AuditExport, CookieJar, JurisResult, CONSENT_COOKIE,
};
use juris_validate::{validate, UiSurface, ValidationReport};

use crate::config::JurisConfig;

/// Wires the consent store and audit engine over one shared jar.
///
/// One runtime per process/session; collaborating layers receive the store
/// and engine by reference instead of reaching into ambient storage.
pub struct Runtime {
    config: JurisConfig,
    store: Arc<ConsentStore>,
    engine: Arc<AuditEngine>,
}

impl Runtime {
    pub fn new(config: JurisConfig, jar: Arc<dyn CookieJar>) -> Self {
        let store = Arc::new(ConsentStore::with_options(
            Arc::clone(&jar),
            StoreOptions {
                secure_transport: config.secure_transport,
                user_agent: config.user_agent.clone(),
                renewal_period_secs: config.renewal_days * 86_400,
                cookie_max_age_secs: config.cookie_max_age_secs,
                history_limit: config.history_limit,
            },
        ));
        let engine = Arc::new(AuditEngine::new(jar, Arc::clone(&store)));
        Self {
            config,
            store,
            engine,
        }
    }

    pub fn store(&self) -> &Arc<ConsentStore> {
        &self.store
    }

    pub fn engine(&self) -> &Arc<AuditEngine> {
        &self.engine
    }

    pub fn config(&self) -> &JurisConfig {
        &self.config
    }

    /// One full audit pass: per-cookie results, summary, export document.
    pub fn audit(&self) -> JurisResult<AuditExport> {
        let details = self.engine.run()?;
        let summary = summarize(&details);
        Ok(juris_audit::export(summary, details))
    }

    /// Validate the persisted consent record as raw JSON, so shape
    /// violations (missing or mistyped fields) are reported rather than
    /// papered over. `None` when no record is readable — the caller should
    /// treat that as consent-required, not as a violation.
    pub fn validate_persisted(&self, surface: Option<&dyn UiSurface>) -> Option<ValidationReport> {
        let raw = self.store.jar().get(CONSENT_COOKIE).ok()??;
        let doc: serde_json::Value = serde_json::from_str(&raw).ok()?;
        Some(validate(&doc, surface))
    }

    /// Start the periodic audit scheduler if the config enables it. The
    /// returned handle is the disposer.
    pub fn start_scheduler(&self) -> Option<SchedulerHandle> {
        let interval_secs = self.config.audit_interval_secs?;
        let engine = Arc::clone(&self.engine);
        Some(AuditScheduler::start(
            Duration::from_secs(interval_secs),
            move || match engine.run() {
                Ok(results) => {
                    let summary = summarize(&results);
                    tracing::info!(
                        cookies = summary.total_cookies,
                        score = summary.compliance_score,
                        "scheduled audit pass"
                    );
                }
                Err(e) => tracing::warn!(error = %e, "scheduled audit pass failed"),
            },
        ))
    }
}
