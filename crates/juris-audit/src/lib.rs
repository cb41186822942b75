//! The cookie audit engine.
//!
//! Enumerates the live jar, classifies every cookie, gates each against the
//! consent store, detects per-cookie compliance issues (missing consent,
//! sensitive data, oversize, secure-prefix, undocumented), aggregates a
//! scored summary, and emits the JSON export artifact. An optional
//! scheduler drives periodic passes; its handle is the disposer.

pub mod engine;
pub mod export;
pub mod scheduler;
pub mod sensitive;
pub mod summary;

pub use engine::{
    AuditEngine, ISSUE_MISSING_SECURE_PREFIX, ISSUE_NO_CONSENT, ISSUE_OVERSIZE,
    ISSUE_SENSITIVE_DATA, ISSUE_UNDOCUMENTED,
};
pub use export::{export, export_json};
pub use scheduler::{AuditScheduler, SchedulerHandle};
pub use sensitive::{contains_sensitive_data, matched_pattern};
pub use summary::summarize;
