//! Port traits (interfaces for adapters).
//!
//! The application layer depends on these traits, not concrete implementations.

mod store;

pub use store::RateStore;
