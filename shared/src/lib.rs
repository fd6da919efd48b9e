//! Shared types for the booking platform
//!
//! Wire-format entities and create payloads used by every consumer of the
//! booking API: orders, reviews, their status encodings and drafts.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Approval, Order, OrderDraft, OrderStatus, Review, ReviewDraft};
