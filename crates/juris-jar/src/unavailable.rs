use juris_core::{CookieAttributes, CookieJar, JurisError, JurisResult};

/// A jar that models an inaccessible cookie context (server-side render,
/// storage-blocked browser mode). Every operation fails with
/// [`JurisError::StorageUnavailable`].
///
/// The consent store degrades reads against this jar to "no settings
/// found"; writes surface the error so callers can detect them.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableJar;

impl UnavailableJar {
    pub fn new() -> Self {
        Self
    }
}

impl CookieJar for UnavailableJar {
    fn enumerate(&self) -> JurisResult<Vec<(String, String)>> {
        Err(JurisError::StorageUnavailable)
    }

    fn get(&self, _name: &str) -> JurisResult<Option<String>> {
        Err(JurisError::StorageUnavailable)
    }

    fn set(&self, name: &str, _value: &str, _attrs: &CookieAttributes) -> JurisResult<()> {
        tracing::warn!(cookie = name, "cookie write dropped: storage unavailable");
        Err(JurisError::StorageUnavailable)
    }

    fn delete(&self, _name: &str) -> JurisResult<bool> {
        Err(JurisError::StorageUnavailable)
    }
}
