//! Utilities

pub mod logger;
