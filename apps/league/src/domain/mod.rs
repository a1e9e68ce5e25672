//! Domain layer: pure competition logic types and helpers.

pub mod competition;
pub mod game;
pub mod ids;
pub mod player;
pub mod results;
pub mod round_scoring;
pub mod rules;
pub mod statistics;
pub mod victory;

#[cfg(test)]
mod tests_competition;
#[cfg(test)]
mod tests_results;

// Re-exports for ergonomics
pub use competition::{
    can_finish_competition, ensure_can_start, finish_eligibility, validate_new_game, Competition,
    CompetitionStatus,
};
pub use game::{Game, GameStatus, Lineup, Outcome, ScoreChange, ScoreEvent, TeamSide};
pub use ids::{CommunityId, CompetitionId, GameId, PairKey, PlayerId};
pub use player::{Player, PlayerRef};
pub use results::{CompetitionResults, PairResult, PlayerResult, StandingRecord};
pub use round_scoring::{adjust_score, finish_game, register_round, RoundApplied};
pub use statistics::{player_statistics, PlayerStatistics};
pub use victory::{SpecialWin, VictoryType};
