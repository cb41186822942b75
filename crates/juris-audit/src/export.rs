use juris_core::{
    AuditExport, CookieAuditResult, CookieAuditSummary, JurisError, JurisResult, Timestamp,
    AUDIT_EXPORT_VERSION,
};

/// Assemble the downloadable audit artifact: summary, full detail list,
/// export instant, schema version.
pub fn export(summary: CookieAuditSummary, details: Vec<CookieAuditResult>) -> AuditExport {
    AuditExport {
        summary,
        details,
        export_date: Timestamp::now().to_rfc3339(),
        version: AUDIT_EXPORT_VERSION.to_string(),
    }
}

/// The export document serialized as a single pretty-printed JSON artifact.
pub fn export_json(summary: CookieAuditSummary, details: Vec<CookieAuditResult>) -> JurisResult<String> {
    serde_json::to_string_pretty(&export(summary, details))
        .map_err(|e| JurisError::Serialization(e.to_string()))
}
