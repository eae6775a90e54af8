//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

mod handlers;
mod pages;
mod server;


pub use server::{DEFAULT_STATIC_DIR, HttpServer};
