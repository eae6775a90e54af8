//! # Forex Types
//!
//! Domain types and port traits for the forex rates service.
//! This crate has no IO dependencies: only data structures, the seed set,
//! and the store contract.
//!
//! ## Architecture
//!
//! - `domain/` - Rate records, partial updates, storage keys
//! - `ports/` - Trait definitions that store adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain, repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Rate, RateId, RatePatch, StoredRate, default_rates};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError};
pub use ports::RateStore;
