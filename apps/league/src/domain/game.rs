use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::config::rules::MatchRules;
use crate::domain::rules::TEAM_SIZE;
use crate::domain::victory::{SpecialWin, VictoryType};
use crate::domain::{CompetitionId, GameId, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

/// Game lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Pending,
    InProgress,
    Finished,
}

/// One of the two teams of a game. Serialized as its tag, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TeamSide {
    Team1,
    Team2,
}

impl TeamSide {
    pub const BOTH: [TeamSide; 2] = [TeamSide::Team1, TeamSide::Team2];

    pub const fn tag(self) -> u8 {
        match self {
            TeamSide::Team1 => 1,
            TeamSide::Team2 => 2,
        }
    }

    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(TeamSide::Team1),
            2 => Some(TeamSide::Team2),
            _ => None,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            TeamSide::Team1 => TeamSide::Team2,
            TeamSide::Team2 => TeamSide::Team1,
        }
    }
}

impl From<TeamSide> for u8 {
    fn from(side: TeamSide) -> Self {
        side.tag()
    }
}

impl TryFrom<u8> for TeamSide {
    type Error = String;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        TeamSide::from_tag(tag).ok_or_else(|| format!("team tag must be 1 or 2, got {tag}"))
    }
}

/// Declared result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(TeamSide),
    Draw,
}

/// What changed the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreChange {
    /// A registered round; `winner` is `None` for a drawn round.
    Round {
        victory: VictoryType,
        winner: Option<TeamSide>,
        points: u16,
    },
    /// Manual override of both scores.
    Adjustment,
}

/// Entry of a game's score history, with the score after it applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    #[serde(flatten)]
    pub change: ScoreChange,
    pub team1_score: u16,
    pub team2_score: u16,
}

impl ScoreEvent {
    pub fn score_of(&self, side: TeamSide) -> u16 {
        match side {
            TeamSide::Team1 => self.team1_score,
            TeamSide::Team2 => self.team2_score,
        }
    }
}

/// A game between two teams of two players within a competition.
///
/// Team and winner fields stay loosely typed because stored rows are not
/// guaranteed to be well formed; [`Game::lineup`] and [`Game::outcome`]
/// give the validated views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub competition_id: CompetitionId,
    pub team1: Vec<PlayerId>,
    pub team2: Vec<PlayerId>,
    pub team1_score: u16,
    pub team2_score: u16,
    pub status: GameStatus,
    /// 1 or 2 for the winning team, `None` for a draw or an undecided game.
    pub winner_team: Option<u8>,
    /// Bonus points the next decided round will carry.
    #[serde(default)]
    pub pending_bonus: u16,
    #[serde(default)]
    pub history: Vec<ScoreEvent>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Validated team composition: two disjoint teams of two distinct players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lineup<'a> {
    pub team1: [&'a PlayerId; TEAM_SIZE],
    pub team2: [&'a PlayerId; TEAM_SIZE],
}

impl<'a> Lineup<'a> {
    pub fn team(&self, side: TeamSide) -> [&'a PlayerId; TEAM_SIZE] {
        match side {
            TeamSide::Team1 => self.team1,
            TeamSide::Team2 => self.team2,
        }
    }

    pub fn players(&self) -> impl Iterator<Item = &'a PlayerId> {
        self.team1.into_iter().chain(self.team2)
    }
}

/// Check that both teams have exactly two distinct players and share none.
pub fn lineup<'a>(
    team1: &'a [PlayerId],
    team2: &'a [PlayerId],
) -> Result<Lineup<'a>, DomainError> {
    let (Ok(t1), Ok(t2)) = (
        <&[PlayerId; TEAM_SIZE]>::try_from(team1),
        <&[PlayerId; TEAM_SIZE]>::try_from(team2),
    ) else {
        return Err(DomainError::validation(
            ValidationKind::InvalidTeam,
            format!(
                "each team needs exactly {TEAM_SIZE} players, got {} and {}",
                team1.len(),
                team2.len()
            ),
        ));
    };

    if t1[0] == t1[1] || t2[0] == t2[1] {
        return Err(DomainError::validation(
            ValidationKind::InvalidTeam,
            "a player cannot fill both seats of a team",
        ));
    }
    if t1.iter().any(|p| t2.contains(p)) {
        return Err(DomainError::validation(
            ValidationKind::InvalidTeam,
            "a player cannot be on both teams",
        ));
    }

    Ok(Lineup {
        team1: [&t1[0], &t1[1]],
        team2: [&t2[0], &t2[1]],
    })
}

impl Game {
    /// New pending game at 0-0.
    pub fn new(
        id: GameId,
        competition_id: CompetitionId,
        team1: [PlayerId; TEAM_SIZE],
        team2: [PlayerId; TEAM_SIZE],
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            competition_id,
            team1: team1.into(),
            team2: team2.into(),
            team1_score: 0,
            team2_score: 0,
            status: GameStatus::Pending,
            winner_team: None,
            pending_bonus: 0,
            history: Vec::new(),
            created_at,
        }
    }

    pub fn lineup(&self) -> Result<Lineup<'_>, DomainError> {
        lineup(&self.team1, &self.team2)
    }

    pub fn score_of(&self, side: TeamSide) -> u16 {
        match side {
            TeamSide::Team1 => self.team1_score,
            TeamSide::Team2 => self.team2_score,
        }
    }

    pub(crate) fn score_mut(&mut self, side: TeamSide) -> &mut u16 {
        match side {
            TeamSide::Team1 => &mut self.team1_score,
            TeamSide::Team2 => &mut self.team2_score,
        }
    }

    pub fn side_of(&self, player: &PlayerId) -> Option<TeamSide> {
        if self.team1.contains(player) {
            Some(TeamSide::Team1)
        } else if self.team2.contains(player) {
            Some(TeamSide::Team2)
        } else {
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Declared outcome; `None` when the winner tag is neither 1, 2 nor absent.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner_team {
            None => Some(Outcome::Draw),
            Some(tag) => TeamSide::from_tag(tag).map(Outcome::Won),
        }
    }

    /// Whether `side` was ever scoreless while the opponent sat at the
    /// deficit threshold (0-5 under default rules).
    pub fn trailed_from_nil(&self, side: TeamSide, rules: &MatchRules) -> bool {
        let threshold = rules.deficit_threshold();
        self.history
            .iter()
            .any(|e| e.score_of(side) == 0 && e.score_of(side.other()) >= threshold)
    }

    /// Special classification of a finished, decided game.
    ///
    /// Buchuda needs the final (target, 0) score. Buchuda de ré needs the
    /// final (target, target - 1) score; when the game has a score history
    /// the winner must also have trailed from nil at some point.
    pub fn special_win(&self, rules: &MatchRules) -> Option<SpecialWin> {
        if !self.is_finished() {
            return None;
        }
        let Some(Outcome::Won(winner)) = self.outcome() else {
            return None;
        };

        let final_score = (self.score_of(winner), self.score_of(winner.other()));
        if final_score == rules.buchuda_score() {
            return Some(SpecialWin::Buchuda);
        }

        if final_score != rules.buchuda_de_re_score() {
            return None;
        }
        let comeback = self.history.is_empty() || self.trailed_from_nil(winner, rules);
        comeback.then_some(SpecialWin::BuchudaDeRe)
    }
}
