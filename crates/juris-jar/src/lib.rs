//! Cookie jar backends.
//!
//! The engine depends on the [`juris_core::CookieJar`] trait, not on any
//! particular host storage. This crate ships the two reference backends:
//! [`InMemoryJar`] for tests and embedded use, and [`UnavailableJar`] for
//! exercising the storage-unavailable degradation path.

pub mod in_memory;
pub mod unavailable;

pub use in_memory::InMemoryJar;
pub use unavailable::UnavailableJar;
