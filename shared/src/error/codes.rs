//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Recipe composition errors
//! - 5xxx: Record errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare `u16` so the front-end can switch on the number.
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

    // ==================== 1xxx: Auth ====================
    /// Operator is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 4xxx: Recipe ====================
    /// Not every skin axis has a selection
    SelectionIncomplete = 4001,
    /// Manual selection already holds the maximum number of ingredients
    ManualLimitExceeded = 4002,
    /// Ingredient is not part of the additive menu
    UnknownIngredient = 4003,
    /// Base formulation id is not in the catalog
    BaseNotFound = 4004,
    /// Fragrance name is not in the catalog
    UnknownFragrance = 4005,
    /// Confirmation preconditions are not met
    ConfirmBlocked = 4006,
    /// Save attempted without a confirmed recipe
    RecipeNotConfirmed = 4007,
    /// Skin mark does not belong to the axis it was selected for
    InvalidSkinMark = 4008,

    // ==================== 5xxx: Record ====================
    /// Record not found
    RecordNotFound = 5001,
    /// Search needs a customer name
    CustomerNameRequired = 5002,

    // ==================== 6xxx: Catalog ====================
    /// Catalog asset could not be read or parsed
    CatalogLoadFailed = 6001,
    /// Catalog asset is internally inconsistent
    CatalogInvalid = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Document store unreachable or not ready
    StoreUnavailable = 9003,
    /// Configuration error
    ConfigError = 9004,
    /// Network error
    NetworkError = 9101,
    /// Timeout error
    TimeoutError = 9102,
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

            // Auth
            ErrorCode::NotAuthenticated => "Authentication required",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Token is invalid",

            // Recipe
            ErrorCode::SelectionIncomplete => "Skin type selection is incomplete",
            ErrorCode::ManualLimitExceeded => "Manual ingredient limit reached",
            ErrorCode::UnknownIngredient => "Ingredient is not on the additive menu",
            ErrorCode::BaseNotFound => "Base formulation not found",
            ErrorCode::UnknownFragrance => "Fragrance not found",
            ErrorCode::ConfirmBlocked => "Recipe cannot be confirmed yet",
            ErrorCode::RecipeNotConfirmed => "Recipe has not been confirmed",
            ErrorCode::InvalidSkinMark => "Skin mark does not belong to this axis",

            // Record
            ErrorCode::RecordNotFound => "Record not found",
            ErrorCode::CustomerNameRequired => "Customer name is required",

            // Catalog
            ErrorCode::CatalogLoadFailed => "Catalog could not be loaded",
            ErrorCode::CatalogInvalid => "Catalog is invalid",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::StoreUnavailable => "Document store unavailable",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
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
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Recipe
            4001 => Ok(ErrorCode::SelectionIncomplete),
            4002 => Ok(ErrorCode::ManualLimitExceeded),
            4003 => Ok(ErrorCode::UnknownIngredient),
            4004 => Ok(ErrorCode::BaseNotFound),
            4005 => Ok(ErrorCode::UnknownFragrance),
            4006 => Ok(ErrorCode::ConfirmBlocked),
            4007 => Ok(ErrorCode::RecipeNotConfirmed),
            4008 => Ok(ErrorCode::InvalidSkinMark),

            // Record
            5001 => Ok(ErrorCode::RecordNotFound),
            5002 => Ok(ErrorCode::CustomerNameRequired),

            // Catalog
            6001 => Ok(ErrorCode::CatalogLoadFailed),
            6002 => Ok(ErrorCode::CatalogInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::StoreUnavailable),
            9004 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::NetworkError),
            9102 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::ManualLimitExceeded.code(), 4002);
        assert_eq!(ErrorCode::RecordNotFound.code(), 5001);
        assert_eq!(ErrorCode::CatalogInvalid.code(), 6002);
        assert_eq!(ErrorCode::StoreUnavailable.code(), 9003);
    }

    #[test]
    fn test_try_from_every_code() {
        let all = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::InvalidRequest,
            ErrorCode::RequiredField,
            ErrorCode::NotAuthenticated,
            ErrorCode::TokenExpired,
            ErrorCode::TokenInvalid,
            ErrorCode::SelectionIncomplete,
            ErrorCode::ManualLimitExceeded,
            ErrorCode::UnknownIngredient,
            ErrorCode::BaseNotFound,
            ErrorCode::UnknownFragrance,
            ErrorCode::ConfirmBlocked,
            ErrorCode::RecipeNotConfirmed,
            ErrorCode::InvalidSkinMark,
            ErrorCode::RecordNotFound,
            ErrorCode::CustomerNameRequired,
            ErrorCode::CatalogLoadFailed,
            ErrorCode::CatalogInvalid,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::StoreUnavailable,
            ErrorCode::ConfigError,
            ErrorCode::NetworkError,
            ErrorCode::TimeoutError,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
        assert_eq!(
            InvalidErrorCode(4999).to_string(),
            "invalid error code: 4999"
        );
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::BaseNotFound).unwrap();
        assert_eq!(json, "4004");

        let code: ErrorCode = serde_json::from_str("5002").unwrap();
        assert_eq!(code, ErrorCode::CustomerNameRequired);

        assert!(serde_json::from_str::<ErrorCode>("4242").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::RecipeNotConfirmed.to_string(), "4007");
    }
}
