use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use juris_core::{ConsentSettings, CONSENT_CHANGED_EVENT};

/// Handle returned by [`ChangeNotifier::on_change`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A consent-change listener. Opaque to the core — typically a third-party
/// script loader toggling itself on or off.
pub type ConsentListener = Arc<dyn Fn(&ConsentSettings) + Send + Sync>;

/// Synchronous fan-out of consent changes.
///
/// Listeners run in registration order, on the caller's stack, before
/// `save_settings` returns. Each call is wrapped in `catch_unwind` so one
/// panicking listener cannot block consent persistence for the rest.
pub struct ChangeNotifier {
    listeners: Mutex<Vec<(ListenerId, ConsentListener)>>,
    next_id: AtomicU64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn on_change(&self, listener: ConsentListener) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, listener));
        }
        id
    }

    /// Returns whether the listener was registered.
    pub fn off_change(&self, id: ListenerId) -> bool {
        match self.listeners.lock() {
            Ok(mut listeners) => {
                let before = listeners.len();
                listeners.retain(|(lid, _)| *lid != id);
                listeners.len() != before
            }
            Err(_) => false,
        }
    }

    /// Dispatch the named consent-changed event to every listener, in
    /// registration order. Returns how many listeners completed normally.
    pub fn notify(&self, settings: &ConsentSettings) -> usize {
        let snapshot: Vec<(ListenerId, ConsentListener)> = match self.listeners.lock() {
            Ok(listeners) => listeners.clone(),
            Err(_) => return 0,
        };

        let mut delivered = 0;
        for (id, listener) in snapshot {
            let result = catch_unwind(AssertUnwindSafe(|| listener(settings)));
            if result.is_ok() {
                delivered += 1;
            } else {
                tracing::warn!(
                    event = CONSENT_CHANGED_EVENT,
                    listener = id.0,
                    "consent listener panicked; continuing fan-out"
                );
            }
        }

        tracing::debug!(
            event = CONSENT_CHANGED_EVENT,
            delivered,
            "consent change dispatched"
        );
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
