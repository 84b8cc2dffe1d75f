//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Account / tenant errors
/// - 4xxx: Convert errors
/// - 5xxx: Member errors
/// - 6xxx: Check-in errors
/// - 7xxx: Form configuration errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Account / tenant errors (3xxx)
    Account,
    /// Convert errors (4xxx)
    Convert,
    /// Member errors (5xxx)
    Member,
    /// Check-in errors (6xxx)
    CheckIn,
    /// Form configuration errors (7xxx)
    FormConfig,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Account,
            4000..5000 => Self::Convert,
            5000..6000 => Self::Member,
            6000..7000 => Self::CheckIn,
            7000..8000 => Self::FormConfig,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Account => "account",
            Self::Convert => "convert",
            Self::Member => "member",
            Self::CheckIn => "check_in",
            Self::FormConfig => "form_config",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Account);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Convert);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Member);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::CheckIn);
        assert_eq!(ErrorCategory::from_code(7002), ErrorCategory::FormConfig);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::NotAuthenticated.category(), ErrorCategory::Auth);
        assert_eq!(
            ErrorCode::PermissionDenied.category(),
            ErrorCategory::Permission
        );
        assert_eq!(ErrorCode::ChurchNotFound.category(), ErrorCategory::Account);
        assert_eq!(ErrorCode::ConvertNotFound.category(), ErrorCategory::Convert);
        assert_eq!(ErrorCode::MemberNotFound.category(), ErrorCategory::Member);
        assert_eq!(ErrorCode::CheckInNotFound.category(), ErrorCategory::CheckIn);
        assert_eq!(
            ErrorCode::LockedFieldViolation.category(),
            ErrorCategory::FormConfig
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::FormConfig).unwrap();
        assert_eq!(json, "\"form_config\"");
        let back: ErrorCategory = serde_json::from_str("\"account\"").unwrap();
        assert_eq!(back, ErrorCategory::Account);
    }
}
