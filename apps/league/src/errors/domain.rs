//! Domain-level error type used across services, repos and adapters.
//!
//! This error type is storage-agnostic. Aggregation never produces one;
//! lifecycle guards, round registration and repositories do.

use thiserror::Error;

use crate::errors::ErrorCode;

/// Validation failures on user input or business rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    NotEnoughMembers,
    InvalidTeam,
    PlayerNotInRoster,
    WinnerRequired,
    WinnerNotAllowed,
    InvalidScore,
    GamesPending,
    NoGames,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// Reading records from the backing store failed.
    FetchFailed,
    /// Writing records to the backing store failed.
    PersistFailed,
    Timeout,
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Competition,
    Game,
    Player,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Operation not allowed in the current lifecycle status.
    PhaseMismatch,
    GameFinished,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Shorthand for a failed read against a backing store.
    pub fn fetch_failed(detail: impl Into<String>) -> Self {
        Self::Infra(InfraErrorKind::FetchFailed, detail.into())
    }

    /// True when the error came from the data-access layer rather than
    /// from a business rule.
    pub fn is_infra(&self) -> bool {
        matches!(self, DomainError::Infra(..))
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::NotEnoughMembers => ErrorCode::NotEnoughMembers,
                ValidationKind::InvalidTeam => ErrorCode::InvalidTeam,
                ValidationKind::PlayerNotInRoster => ErrorCode::PlayerNotInRoster,
                ValidationKind::WinnerRequired => ErrorCode::WinnerRequired,
                ValidationKind::WinnerNotAllowed => ErrorCode::WinnerNotAllowed,
                ValidationKind::InvalidScore => ErrorCode::InvalidScore,
                ValidationKind::GamesPending => ErrorCode::GamesPending,
                ValidationKind::NoGames => ErrorCode::NoGames,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ConflictKind::GameFinished => ErrorCode::GameFinished,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Competition => ErrorCode::CompetitionNotFound,
                NotFoundKind::Game => ErrorCode::GameNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::FetchFailed => ErrorCode::FetchFailed,
                InfraErrorKind::PersistFailed => ErrorCode::PersistFailed,
                InfraErrorKind::Timeout => ErrorCode::StoreTimeout,
                InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                InfraErrorKind::Other(_) => ErrorCode::Internal,
            },
        }
    }
}
