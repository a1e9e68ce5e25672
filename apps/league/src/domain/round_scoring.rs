//! Round-by-round score registration on a single game.

use crate::config::rules::MatchRules;
use crate::domain::game::{Game, GameStatus, Outcome, ScoreChange, ScoreEvent, TeamSide};
use crate::domain::rules::DRAW_CARRY_BONUS;
use crate::domain::victory::{SpecialWin, VictoryType};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// What a registered round did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundApplied {
    /// Points credited this round, carried bonus included.
    pub points_awarded: u16,
    /// Bonus consumed by this round.
    pub bonus_used: u16,
    /// Set when this round ended the game.
    pub finished: Option<Outcome>,
    pub special_win: Option<SpecialWin>,
}

fn ensure_open(game: &Game) -> Result<(), DomainError> {
    if game.is_finished() {
        return Err(DomainError::conflict(
            ConflictKind::GameFinished,
            format!("game {} is already finished", game.id),
        ));
    }
    Ok(())
}

/// Register one round on `game`.
///
/// A drawn round (`empate`) scores nothing and adds a carry-over point; the
/// next decided round credits its victory points plus every carried point to
/// its winner. Scores are capped at the target, and the game finishes as
/// soon as a team reaches it.
pub fn register_round(
    game: &mut Game,
    victory: VictoryType,
    winner: Option<TeamSide>,
    rules: &MatchRules,
) -> Result<RoundApplied, DomainError> {
    ensure_open(game)?;

    let (points_awarded, bonus_used) = match (victory.is_draw(), winner) {
        (true, Some(_)) => {
            return Err(DomainError::validation(
                ValidationKind::WinnerNotAllowed,
                "a drawn round has no winning team",
            ));
        }
        (false, None) => {
            return Err(DomainError::validation(
                ValidationKind::WinnerRequired,
                format!("a {victory} round needs a winning team"),
            ));
        }
        (true, None) => {
            game.pending_bonus = game.pending_bonus.saturating_add(DRAW_CARRY_BONUS);
            (0, 0)
        }
        (false, Some(side)) => {
            let bonus = std::mem::take(&mut game.pending_bonus);
            let points = victory.points().saturating_add(bonus);
            let score = game.score_mut(side);
            *score = score.saturating_add(points).min(rules.target_points);
            (points, bonus)
        }
    };

    game.history.push(ScoreEvent {
        change: ScoreChange::Round {
            victory,
            winner,
            points: points_awarded,
        },
        team1_score: game.team1_score,
        team2_score: game.team2_score,
    });
    game.status = GameStatus::InProgress;

    let finished = winner
        .filter(|side| game.score_of(*side) >= rules.target_points)
        .map(|side| {
            game.status = GameStatus::Finished;
            game.winner_team = Some(side.tag());
            Outcome::Won(side)
        });

    Ok(RoundApplied {
        points_awarded,
        bonus_used,
        finished,
        special_win: game.special_win(rules),
    })
}

/// Manually set both scores, e.g. to correct a registration mistake.
///
/// Scores above the target are rejected. Reaching the target does not
/// finish the game; [`finish_game`] does.
pub fn adjust_score(
    game: &mut Game,
    team1_score: u16,
    team2_score: u16,
    rules: &MatchRules,
) -> Result<(), DomainError> {
    ensure_open(game)?;

    if team1_score > rules.target_points || team2_score > rules.target_points {
        return Err(DomainError::validation(
            ValidationKind::InvalidScore,
            format!(
                "scores must be between 0 and {}, got {team1_score}-{team2_score}",
                rules.target_points
            ),
        ));
    }

    game.team1_score = team1_score;
    game.team2_score = team2_score;
    game.history.push(ScoreEvent {
        change: ScoreChange::Adjustment,
        team1_score,
        team2_score,
    });
    game.status = GameStatus::InProgress;
    Ok(())
}

/// Close the game on its current score: the higher score wins, equal
/// scores are a draw. No-op on a game that is already finished.
pub fn finish_game(game: &mut Game) -> Outcome {
    if game.is_finished() {
        if let Some(outcome) = game.outcome() {
            return outcome;
        }
    }

    let outcome = match game.team1_score.cmp(&game.team2_score) {
        std::cmp::Ordering::Greater => Outcome::Won(TeamSide::Team1),
        std::cmp::Ordering::Less => Outcome::Won(TeamSide::Team2),
        std::cmp::Ordering::Equal => Outcome::Draw,
    };
    game.winner_team = match outcome {
        Outcome::Won(side) => Some(side.tag()),
        Outcome::Draw => None,
    };
    game.status = GameStatus::Finished;
    outcome
}
