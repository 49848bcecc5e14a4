//! Shared domain core for the Smart Solutions Lanka storefront
//!
//! Pure in-memory logic with no I/O of its own:
//!
//! - **catalog**: static product list filtering (category + free-text search)
//! - **cart**: the cart ledger (line items, quantity rules, derived total)
//! - **pricing**: supplier-to-retail markup rule and LKR formatting
//! - **order**: deterministic order-message composition and the WhatsApp
//!   deep-link builder
//! - **error**: unified error codes, `AppError` and the `ApiResponse` envelope

pub mod cart;
pub mod catalog;
pub mod error;
pub mod models;
pub mod order;
pub mod pricing;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{CartItem, CartLedger};
pub use catalog::CategoryFilter;
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::checkout::{CheckoutInfo, PaymentMethod};
pub use models::product::{Category, Product, Supplier};
pub use order::{ComposedOrder, compose, compose_with_id};
