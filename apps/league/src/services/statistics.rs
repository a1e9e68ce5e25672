//! Per-player activity statistics.

use tracing::debug;

use crate::domain::{player_statistics, PlayerId, PlayerStatistics};
use crate::errors::domain::DomainError;
use crate::repos::{GameRepo, PlayerRepo};

pub struct StatisticsService<P: PlayerRepo, G: GameRepo> {
    players: P,
    games: G,
}

impl<P: PlayerRepo, G: GameRepo> StatisticsService<P, G> {
    pub fn new(players: P, games: G) -> Self {
        Self { players, games }
    }

    /// Statistics over every game the player appears in.
    pub async fn player_statistics(&self, id: &PlayerId) -> Result<PlayerStatistics, DomainError> {
        // Unknown players are an error rather than an all-zero summary.
        self.players.find_by_id(id).await?;
        let games = self.games.list_all().await?;

        let stats = player_statistics(id, &games);
        debug!(player_id = %id, ?stats, "computed player statistics");
        Ok(stats)
    }
}
