//! juris — cookie consent and compliance audit engine.
//!
//! Models per-category consent decisions, classifies every cookie present
//! in the runtime, detects compliance violations against a GDPR-style rule
//! set, and produces a scored audit report.
//!
//! The pieces:
//! - [`juris_consent::ConsentStore`] — canonical owner of the persisted
//!   decision; full-record replace, synchronous change fan-out, bounded
//!   history, renewal policy.
//! - [`juris_classify::classify`] — longest-prefix-first classification
//!   against a fixed registry; pure and total.
//! - [`juris_validate::validate`] — GDPR-style rule evaluation with a
//!   rule-penalty score.
//! - [`juris_audit::AuditEngine`] — live-jar audit with an issue-count
//!   score; the two scores are deliberately independent.
//!
//! [`Runtime`] wires them over one shared [`juris_core::CookieJar`].

pub mod config;
pub mod runtime;

pub use config::JurisConfig;
pub use runtime::Runtime;

pub use juris_audit::{
    export, export_json, summarize, AuditEngine, AuditScheduler, SchedulerHandle,
};
pub use juris_classify::{classify, Classification};
pub use juris_consent::{needs_renewal, needs_renewal_at, ConsentStore, StoreOptions};
pub use juris_core::{
    AuditExport, ConsentCategory, ConsentMethod, ConsentRecord, ConsentSettings,
    CookieAttributes, CookieAuditResult, CookieAuditSummary, CookieJar, JurisError, JurisResult,
    SameSite, Timestamp, CONSENT_CHANGED_EVENT, CONSENT_COOKIE, CONSENT_TIMESTAMP_COOKIE,
};
pub use juris_jar::{InMemoryJar, UnavailableJar};
pub use juris_validate::{validate, validate_settings, StaticSurface, UiSurface, ValidationReport};
