//! Game service: creation and score registration.

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::config::rules::MatchRules;
use crate::domain::{
    adjust_score, finish_game, register_round, validate_new_game, CompetitionId, Game, GameId,
    Outcome, PlayerId, RoundApplied, TeamSide, VictoryType,
};
use crate::errors::domain::DomainError;
use crate::repos::{CompetitionRepo, GameRepo};

pub struct GameService<C: CompetitionRepo, G: GameRepo> {
    competitions: C,
    games: G,
    rules: MatchRules,
}

impl<C: CompetitionRepo, G: GameRepo> GameService<C, G> {
    pub fn new(competitions: C, games: G, rules: MatchRules) -> Self {
        Self {
            competitions,
            games,
            rules,
        }
    }

    /// Create a pending game in a running competition.
    pub async fn create(
        &self,
        competition_id: &CompetitionId,
        team1: Vec<PlayerId>,
        team2: Vec<PlayerId>,
    ) -> Result<Game, DomainError> {
        let competition = self.competitions.find_by_id(competition_id).await?;
        let roster = self.competitions.list_members(competition_id).await?;

        let lineup = match validate_new_game(&competition, &roster, &team1, &team2) {
            Ok(lineup) => lineup,
            Err(err) => {
                warn!(competition_id = %competition_id, error = %err, "game creation rejected");
                return Err(err);
            }
        };
        let [a, b] = lineup.team1.map(PlayerId::clone);
        let [c, d] = lineup.team2.map(PlayerId::clone);

        let game = Game::new(
            GameId::generate(),
            competition_id.clone(),
            [a, b],
            [c, d],
            OffsetDateTime::now_utc(),
        );
        self.games.insert(&game).await?;

        info!(competition_id = %competition_id, game_id = %game.id, "game created");
        Ok(game)
    }

    /// Register a round and persist the updated game.
    pub async fn register_round(
        &self,
        game_id: &GameId,
        victory: VictoryType,
        winner: Option<TeamSide>,
    ) -> Result<(Game, RoundApplied), DomainError> {
        let mut game = self.games.find_by_id(game_id).await?;

        let applied = match register_round(&mut game, victory, winner, &self.rules) {
            Ok(applied) => applied,
            Err(err) => {
                warn!(game_id = %game_id, %victory, error = %err, "round rejected");
                return Err(err);
            }
        };
        self.games.save(&game).await?;

        debug!(
            game_id = %game_id,
            %victory,
            points = applied.points_awarded,
            bonus = applied.bonus_used,
            team1_score = game.team1_score,
            team2_score = game.team2_score,
            "round registered"
        );
        if let Some(outcome) = applied.finished {
            info!(game_id = %game_id, ?outcome, special = ?applied.special_win, "game finished");
        }
        Ok((game, applied))
    }

    /// Overwrite both scores of an open game.
    pub async fn adjust_score(
        &self,
        game_id: &GameId,
        team1_score: u16,
        team2_score: u16,
    ) -> Result<Game, DomainError> {
        let mut game = self.games.find_by_id(game_id).await?;

        if let Err(err) = adjust_score(&mut game, team1_score, team2_score, &self.rules) {
            warn!(game_id = %game_id, team1_score, team2_score, error = %err, "score adjustment rejected");
            return Err(err);
        }
        self.games.save(&game).await?;

        info!(game_id = %game_id, team1_score, team2_score, "score adjusted");
        Ok(game)
    }

    /// Close a game on its current score.
    pub async fn finish(&self, game_id: &GameId) -> Result<(Game, Outcome), DomainError> {
        let mut game = self.games.find_by_id(game_id).await?;
        if game.is_finished() {
            debug!(game_id = %game_id, "game already finished");
        }

        let outcome = finish_game(&mut game);
        self.games.save(&game).await?;

        info!(game_id = %game_id, ?outcome, "game finished");
        Ok((game, outcome))
    }
}
