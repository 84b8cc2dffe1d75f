//! Unified error codes for the Flock platform
//!
//! This module defines all error codes used across flock-cloud and its
//! clients. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Account / tenant errors
//! - 4xxx: Convert errors
//! - 5xxx: Member errors
//! - 6xxx: Check-in errors
//! - 7xxx: Form configuration errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
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
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// API token is invalid or revoked
    TokenInvalid = 1002,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Platform admin role required
    AdminRequired = 2002,

    // ==================== 3xxx: Account / Tenant ====================
    /// Church account not found
    ChurchNotFound = 3001,
    /// Church account is suspended
    ChurchSuspended = 3002,
    /// Account request not found
    AccountRequestNotFound = 3003,
    /// Account request has already been approved or rejected
    AccountRequestAlreadyDecided = 3004,
    /// Email already associated with an account or request
    EmailAlreadyRegistered = 3005,
    /// Unknown billing plan
    PlanInvalid = 3006,

    // ==================== 4xxx: Convert ====================
    /// Convert record not found
    ConvertNotFound = 4001,

    // ==================== 5xxx: Member ====================
    /// Member record not found
    MemberNotFound = 5001,

    // ==================== 6xxx: Check-in ====================
    /// Check-in record not found
    CheckInNotFound = 6001,

    // ==================== 7xxx: Form Configuration ====================
    /// Form configuration not found
    FormConfigNotFound = 7001,
    /// Saved field list drops or duplicates a locked field
    LockedFieldViolation = 7002,
    /// Custom field definition is invalid
    CustomFieldInvalid = 7003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
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
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "Caller is not authenticated",
            ErrorCode::TokenInvalid => "API token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Platform administrator role is required",

            // Account / Tenant
            ErrorCode::ChurchNotFound => "Church account not found",
            ErrorCode::ChurchSuspended => "Church account is suspended",
            ErrorCode::AccountRequestNotFound => "Account request not found",
            ErrorCode::AccountRequestAlreadyDecided => {
                "Account request has already been decided"
            }
            ErrorCode::EmailAlreadyRegistered => "Email is already registered",
            ErrorCode::PlanInvalid => "Unknown billing plan",

            // Convert
            ErrorCode::ConvertNotFound => "Convert not found",

            // Member
            ErrorCode::MemberNotFound => "Member not found",

            // Check-in
            ErrorCode::CheckInNotFound => "Check-in not found",

            // Form configuration
            ErrorCode::FormConfigNotFound => "Form configuration not found",
            ErrorCode::LockedFieldViolation => {
                "Field list must keep every locked field exactly once"
            }
            ErrorCode::CustomFieldInvalid => "Custom field definition is invalid",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
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
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            1001 => Self::NotAuthenticated,
            1002 => Self::TokenInvalid,
            2001 => Self::PermissionDenied,
            2002 => Self::AdminRequired,
            3001 => Self::ChurchNotFound,
            3002 => Self::ChurchSuspended,
            3003 => Self::AccountRequestNotFound,
            3004 => Self::AccountRequestAlreadyDecided,
            3005 => Self::EmailAlreadyRegistered,
            3006 => Self::PlanInvalid,
            4001 => Self::ConvertNotFound,
            5001 => Self::MemberNotFound,
            6001 => Self::CheckInNotFound,
            7001 => Self::FormConfigNotFound,
            7002 => Self::LockedFieldViolation,
            7003 => Self::CustomFieldInvalid,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::NetworkError,
            9004 => Self::TimeoutError,
            9005 => Self::ConfigError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::ChurchNotFound.code(), 3001);
        assert_eq!(ErrorCode::LockedFieldViolation.code(), 7002);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_round_trip_u16() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::TokenInvalid,
            ErrorCode::AccountRequestAlreadyDecided,
            ErrorCode::ConvertNotFound,
            ErrorCode::FormConfigNotFound,
            ErrorCode::ConfigError,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code_rejected() {
        assert_eq!(ErrorCode::try_from(42).unwrap_err(), InvalidErrorCode(42));
        assert_eq!(
            ErrorCode::try_from(65535).unwrap_err(),
            InvalidErrorCode(65535)
        );
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ErrorCode::Success.to_string(), "E0000");
        assert_eq!(ErrorCode::ChurchNotFound.to_string(), "E3001");
        assert_eq!(ErrorCode::InternalError.to_string(), "E9001");
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::MemberNotFound).unwrap();
        assert_eq!(json, "5001");
        let back: ErrorCode = serde_json::from_str("5001").unwrap();
        assert_eq!(back, ErrorCode::MemberNotFound);
    }
}
