//! League-wide rankings across every competition.

use tracing::debug;

use crate::config::rules::MatchRules;
use crate::domain::results::compute_competition_results_with;
use crate::domain::{CompetitionResults, PairResult, PlayerResult};
use crate::errors::domain::DomainError;
use crate::repos::{GameRepo, PlayerRepo};

/// Rankings over all finished games, with every known player on the roster.
pub struct RankingService<P: PlayerRepo, G: GameRepo> {
    players: P,
    games: G,
    rules: MatchRules,
}

impl<P: PlayerRepo, G: GameRepo> RankingService<P, G> {
    pub fn new(players: P, games: G, rules: MatchRules) -> Self {
        Self {
            players,
            games,
            rules,
        }
    }

    async fn standings(&self) -> Result<CompetitionResults, DomainError> {
        let roster = self.players.list_all().await?;
        let games = self.games.list_all().await?;
        debug!(
            players = roster.len(),
            games = games.len(),
            "computing league rankings"
        );
        Ok(compute_competition_results_with(&roster, &games, &self.rules))
    }

    /// Players by win rate; `limit` keeps only the first rows.
    pub async fn top_players(&self, limit: Option<usize>) -> Result<Vec<PlayerResult>, DomainError> {
        let mut players = self.standings().await?.players;
        if let Some(limit) = limit {
            players.truncate(limit);
        }
        Ok(players)
    }

    /// Pairs that played together, by win rate.
    pub async fn top_pairs(&self, limit: Option<usize>) -> Result<Vec<PairResult>, DomainError> {
        let mut pairs = self.standings().await?.pairs;
        if let Some(limit) = limit {
            pairs.truncate(limit);
        }
        Ok(pairs)
    }
}
