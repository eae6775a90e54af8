//! # Forex Hex
//!
//! Application service layer and HTTP adapter for the forex rates service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (pass-through to the rate store, seeding)
//! - `inbound/` - HTTP adapter (Axum server, HTML pages, JSON endpoints)
//!
//! The service is generic over `S: RateStore`, allowing
//! different store implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::RateService;
