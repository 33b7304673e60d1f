//! Error codes for the cardroom API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Path segment is not a positive integer game id
    InvalidGameId,
    InvalidMemberId,
    InvalidPlayerId,
    /// General validation error
    ValidationError,
    /// Malformed request body or parameters
    BadRequest,
    /// Same member id supplied more than once
    DuplicateMemberIds,
    /// One or more member ids do not exist
    UnknownMembers,
    /// No card matches the requested number and suit
    UnknownCard,
    /// Attribute name is not patchable on this resource
    UnknownAttribute,
    /// Document `type` does not match the endpoint
    ResourceTypeMismatch,

    // Resource Not Found
    GameNotFound,
    MemberNotFound,
    PlayerNotFound,
    NotFound,

    // Business Logic Conflicts
    UniqueNickname,
    UniqueEmail,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,

    // Database Constraint Violations
    /// Unique constraint violation (SQLSTATE 23505; generic 409)
    UniqueViolation,
    /// Foreign key constraint violation (SQLSTATE 23503; generic 409)
    FkViolation,
    /// Check constraint violation (SQLSTATE 23514; generic 400)
    CheckViolation,
    /// Record not found (generic 404 for DB-driven not-found)
    RecordNotFound,

    /// Internal server error
    Internal,
    /// A single-row lookup matched more than one entity
    ContractViolation,
    /// Data corruption detected
    DataCorruption,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidMemberId => "INVALID_MEMBER_ID",
            Self::InvalidPlayerId => "INVALID_PLAYER_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::DuplicateMemberIds => "DUPLICATE_MEMBER_IDS",
            Self::UnknownMembers => "UNKNOWN_MEMBERS",
            Self::UnknownCard => "UNKNOWN_CARD",
            Self::UnknownAttribute => "UNKNOWN_ATTRIBUTE",
            Self::ResourceTypeMismatch => "RESOURCE_TYPE_MISMATCH",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::MemberNotFound => "MEMBER_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueNickname => "UNIQUE_NICKNAME",
            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",

            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::CheckViolation => "CHECK_VIOLATION",
            Self::RecordNotFound => "RECORD_NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::ContractViolation => "CONTRACT_VIOLATION",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
