//! Shared foundation of the juris consent engine.
//!
//! Holds the closed consent taxonomy, the canonical settings and audit data
//! model, the [`CookieJar`] storage seam, and the error taxonomy. Every
//! other crate in the workspace builds on these types; none of them reaches
//! into ambient host storage directly.

pub mod error;
pub mod traits;
pub mod types;

pub use error::*;
pub use traits::*;
pub use types::*;
