//! Unified error codes for the storefront
//!
//! Error codes are shared between the domain core, the HTTP layer and any
//! frontend, organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order / checkout errors
//! - 5xxx: Payment errors
//! - 6xxx: Catalog errors
//! - 7xxx: Session errors
//! - 9xxx: System / advisory errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes are represented as u16 values for efficient serialization and
/// cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Order / Checkout ====================
    /// Cart is empty, nothing to order
    CartEmpty = 4001,
    /// Checkout details are incomplete
    CheckoutIncomplete = 4002,

    // ==================== 5xxx: Payment ====================
    /// Payment method is not one of the supported options
    PaymentInvalidMethod = 5001,

    // ==================== 6xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Category is not part of the fixed catalog enumeration
    CategoryUnknown = 6101,

    // ==================== 7xxx: Session ====================
    /// Session not found (expired tab or never minted)
    SessionNotFound = 7001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// AI advisor call failed (degraded to fallback answer)
    AdvisorUnavailable = 9101,
    /// An advisor request is already in flight for this session
    AdvisorBusy = 9102,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            // Order / checkout
            ErrorCode::CartEmpty => "Cart is empty",
            ErrorCode::CheckoutIncomplete => "Checkout details are incomplete",

            // Payment
            ErrorCode::PaymentInvalidMethod => "Invalid payment method",

            // Catalog
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::CategoryUnknown => "Unknown category",

            // Session
            ErrorCode::SessionNotFound => "Session not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::AdvisorUnavailable => "Advisor service unavailable",
            ErrorCode::AdvisorBusy => "An advisor request is already in flight",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            5 => ErrorCode::InvalidRequest,
            7 => ErrorCode::RequiredField,
            4001 => ErrorCode::CartEmpty,
            4002 => ErrorCode::CheckoutIncomplete,
            5001 => ErrorCode::PaymentInvalidMethod,
            6001 => ErrorCode::ProductNotFound,
            6101 => ErrorCode::CategoryUnknown,
            7001 => ErrorCode::SessionNotFound,
            9001 => ErrorCode::InternalError,
            9003 => ErrorCode::NetworkError,
            9004 => ErrorCode::TimeoutError,
            9005 => ErrorCode::ConfigError,
            9101 => ErrorCode::AdvisorUnavailable,
            9102 => ErrorCode::AdvisorBusy,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::CartEmpty,
            ErrorCode::CheckoutIncomplete,
            ErrorCode::ProductNotFound,
            ErrorCode::SessionNotFound,
            ErrorCode::AdvisorUnavailable,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ErrorCode::CartEmpty.to_string(), "E4001");
        assert_eq!(ErrorCode::Success.to_string(), "E0000");
    }

    #[test]
    fn test_serialize_as_u16() {
        let json = serde_json::to_string(&ErrorCode::ProductNotFound).unwrap();
        assert_eq!(json, "6001");
        let back: ErrorCode = serde_json::from_str("6001").unwrap();
        assert_eq!(back, ErrorCode::ProductNotFound);
    }
}
