//! Cookie classification.
//!
//! Maps observed cookie names to `{category, purpose, first-party}` using a
//! fixed longest-prefix-first registry. Classification is a pure, total
//! function — a name nothing matches is `unknown`, never an error.

pub mod classifier;
pub mod registry;

pub use classifier::{classify, names_in_category, Classification, UNKNOWN_PURPOSE};
pub use registry::{RegistryEntry, FIRST_PARTY_PREFIXES, REGISTRY};
