//! API route modules
//!
//! One module per resource, each exposing a `router()`:
//!
//! - [`health`] - liveness
//! - [`sessions`] - session minting
//! - [`catalog`] - product listing and filter
//! - [`content`] - static company content (services, company profile)
//! - [`cart`] - per-session cart mutations
//! - [`orders`] - order composition and WhatsApp hand-off
//! - [`advisor`] - AI advisory endpoint

pub mod advisor;
pub mod cart;
pub mod catalog;
pub mod content;
pub mod health;
pub mod orders;
pub mod sessions;

// Re-export common types for handlers
pub use shared::error::{ApiResponse, AppError, AppResult};
