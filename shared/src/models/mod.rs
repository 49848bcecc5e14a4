//! Domain models
//!
//! Static reference data (products, company content) and the mutable
//! checkout form state. Products are defined once at process start and
//! never mutated.

pub mod checkout;
pub mod content;
pub mod product;

pub use checkout::{CheckoutInfo, PaymentMethod};
pub use content::{Achievement, Executive, Service};
pub use product::{Category, Product, Supplier};
