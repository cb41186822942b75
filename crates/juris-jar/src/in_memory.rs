use juris_core::{CookieAttributes, CookieJar, JurisError, JurisResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// A stored cookie: the value plus the attributes it was written with.
#[derive(Debug, Clone)]
struct StoredCookie {
    value: String,
    attrs: CookieAttributes,
}

/// In-memory cookie jar implementing [`CookieJar`].
///
/// The primary backend for tests and for hosts that mirror their native
/// cookie storage into the engine. Unlike a script-visible browser jar it
/// retains write attributes, so `describe` reports real metadata.
pub struct InMemoryJar {
    cookies: Mutex<HashMap<String, StoredCookie>>,
}

fn lock_cookies(
    mutex: &Mutex<HashMap<String, StoredCookie>>,
) -> JurisResult<std::sync::MutexGuard<'_, HashMap<String, StoredCookie>>> {
    mutex
        .lock()
        .map_err(|e| JurisError::Internal(format!("jar lock poisoned: {}", e)))
}

impl InMemoryJar {
    pub fn new() -> Self {
        Self {
            cookies: Mutex::new(HashMap::new()),
        }
    }

    /// Seed a cookie with default attributes (for tests and host bootstrap).
    pub fn seed(&self, name: &str, value: &str) {
        if let Ok(mut cookies) = lock_cookies(&self.cookies) {
            cookies.insert(
                name.to_string(),
                StoredCookie {
                    value: value.to_string(),
                    attrs: CookieAttributes::default(),
                },
            );
        }
    }

    /// Number of live cookies (for testing/inspection).
    pub fn count(&self) -> usize {
        lock_cookies(&self.cookies).map(|c| c.len()).unwrap_or(0)
    }

    /// All live cookie names (for testing/inspection).
    pub fn names(&self) -> Vec<String> {
        lock_cookies(&self.cookies)
            .map(|c| c.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for InMemoryJar {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieJar for InMemoryJar {
    fn enumerate(&self) -> JurisResult<Vec<(String, String)>> {
        let cookies = lock_cookies(&self.cookies)?;
        Ok(cookies
            .iter()
            .map(|(name, stored)| (name.clone(), stored.value.clone()))
            .collect())
    }

    fn get(&self, name: &str) -> JurisResult<Option<String>> {
        let cookies = lock_cookies(&self.cookies)?;
        Ok(cookies.get(name).map(|stored| stored.value.clone()))
    }

    fn set(&self, name: &str, value: &str, attrs: &CookieAttributes) -> JurisResult<()> {
        let mut cookies = lock_cookies(&self.cookies)?;
        cookies.insert(
            name.to_string(),
            StoredCookie {
                value: value.to_string(),
                attrs: attrs.clone(),
            },
        );
        Ok(())
    }

    fn delete(&self, name: &str) -> JurisResult<bool> {
        let mut cookies = lock_cookies(&self.cookies)?;
        Ok(cookies.remove(name).is_some())
    }

    fn describe(&self, name: &str) -> JurisResult<Option<CookieAttributes>> {
        let cookies = lock_cookies(&self.cookies)?;
        Ok(cookies.get(name).map(|stored| stored.attrs.clone()))
    }
}
