//! Consent settings validation.
//!
//! Evaluates a settings document against the fixed GDPR-style rule set:
//! two blocking rules (necessary must be granted; all four category fields
//! present and boolean) and two advisory, environment-dependent rules
//! (discoverable policy link, discoverable preference controls). Produces
//! a rule-penalty compliance score and content-derived recommendations.

pub mod surface;
pub mod validator;

pub use surface::{StaticSurface, UiSurface};
pub use validator::{validate, validate_settings, ValidationReport, FIX_ERRORS_RECOMMENDATION};
