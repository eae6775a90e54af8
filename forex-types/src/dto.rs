//! Data Transfer Objects (DTOs) for responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Acknowledgement returned by the mutation endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Currency added successfully!")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of the startup seeding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and this many default rates were written.
    Seeded(usize),
    /// The store already held records; nothing was written.
    AlreadyPopulated,
}
