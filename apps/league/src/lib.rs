#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod repos;
pub mod services;
pub mod telemetry;


// Re-exports for public API
pub use adapters::MemoryStore;
pub use config::rules::MatchRules;
pub use domain::results::{compute_competition_results, compute_competition_results_with};
pub use domain::{
    Competition, CompetitionId, CompetitionResults, CompetitionStatus, Game, GameId, GameStatus,
    PairResult, Player, PlayerId, PlayerResult, TeamSide, VictoryType,
};
pub use errors::{DomainError, ErrorCode};
pub use repos::{CompetitionRepo, GameRepo, PlayerRepo};
pub use services::{CompetitionService, GameService, RankingService, StatisticsService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
