//! Error codes for the league crate.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation
    /// Competition roster below the minimum needed to start
    NotEnoughMembers,
    /// Team composition is not two distinct players
    InvalidTeam,
    /// Player is not a member of the competition
    PlayerNotInRoster,
    /// A decided round needs a winning team
    WinnerRequired,
    /// A drawn round cannot have a winning team
    WinnerNotAllowed,
    /// Score outside the allowed range
    InvalidScore,
    /// Competition still has unfinished games
    GamesPending,
    /// Competition has no games
    NoGames,
    /// General validation error
    ValidationError,

    // Not found
    CompetitionNotFound,
    GameNotFound,
    PlayerNotFound,
    NotFound,

    // Conflicts
    /// Operation not allowed in the current status
    PhaseMismatch,
    /// Game already finished
    GameFinished,
    Conflict,

    // Infra
    /// Reading from the backing store failed
    FetchFailed,
    /// Writing to the backing store failed
    PersistFailed,
    StoreTimeout,
    DataCorruption,
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotEnoughMembers => "NOT_ENOUGH_MEMBERS",
            Self::InvalidTeam => "INVALID_TEAM",
            Self::PlayerNotInRoster => "PLAYER_NOT_IN_ROSTER",
            Self::WinnerRequired => "WINNER_REQUIRED",
            Self::WinnerNotAllowed => "WINNER_NOT_ALLOWED",
            Self::InvalidScore => "INVALID_SCORE",
            Self::GamesPending => "GAMES_PENDING",
            Self::NoGames => "NO_GAMES",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::CompetitionNotFound => "COMPETITION_NOT_FOUND",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::GameFinished => "GAME_FINISHED",
            Self::Conflict => "CONFLICT",

            Self::FetchFailed => "FETCH_FAILED",
            Self::PersistFailed => "PERSIST_FAILED",
            Self::StoreTimeout => "STORE_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
