use crate::error::JurisResult;
use crate::types::CookieAttributes;

// ---------------------------------------------------------------------------
// CookieJar — the host cookie storage interface
//
// The engine never touches ambient storage directly. Everything goes through
// this trait so the store and audit engine can be tested against an
// in-memory jar, and so a host can plug in document.cookie or a
// request/response header abstraction.
// ---------------------------------------------------------------------------

pub trait CookieJar: Send + Sync {
    /// All live `(name, value)` pairs.
    fn enumerate(&self) -> JurisResult<Vec<(String, String)>>;

    fn get(&self, name: &str) -> JurisResult<Option<String>>;

    fn set(&self, name: &str, value: &str, attrs: &CookieAttributes) -> JurisResult<()>;

    /// Returns whether a cookie with that name existed.
    fn delete(&self, name: &str) -> JurisResult<bool>;

    /// Attribute metadata for a cookie, where the backing store can see it.
    ///
    /// A browser-side jar cannot observe Secure/HttpOnly from script, so the
    /// default is "unknown"; richer backends override this and the audit
    /// report picks the metadata up.
    fn describe(&self, name: &str) -> JurisResult<Option<CookieAttributes>> {
        let _ = name;
        Ok(None)
    }
}
