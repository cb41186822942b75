//! The consent store: canonical owner of the persisted consent decision.
//!
//! Persists settings and timestamp as two independent cookie entries,
//! replaces the record wholesale on every save, deletes cookies from
//! refused categories, keeps a bounded audit trail, and fans out changes
//! synchronously to registered listeners. Also home of the pure renewal
//! policy.

pub mod events;
pub mod history;
pub mod renewal;
pub mod store;

pub use events::{ChangeNotifier, ConsentListener, ListenerId};
pub use history::ConsentHistory;
pub use renewal::{needs_renewal, needs_renewal_at, RENEWAL_PERIOD_SECS};
pub use store::{ConsentStore, StoreOptions};
