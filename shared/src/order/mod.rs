//! Order composition and WhatsApp hand-off
//!
//! An order never touches a payment processor or a database here: the
//! checkout flow terminates in a pre-filled WhatsApp message that sales
//! staff reconcile manually.

pub mod composer;
pub mod whatsapp;

pub use composer::{ComposedOrder, compose, compose_with_id};
pub use whatsapp::order_link;
