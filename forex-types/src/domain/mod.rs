//! Domain models for the forex rates service.

pub mod rate;

pub use rate::{Rate, RateId, RatePatch, StoredRate, default_rates};
