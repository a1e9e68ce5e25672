//! Input document: a roster and the games played by it.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use league::domain::{CompetitionId, GameId, GameStatus, Player, PlayerId, ScoreEvent};
use league::Game;
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct StandingsInput {
    pub roster: Vec<Player>,
    /// Kept raw so one unreadable row does not reject the whole document.
    #[serde(default)]
    pub games: Vec<serde_json::Value>,
}

/// A game as exported by the league store. Team lists are kept as given so
/// the aggregator can skip malformed rows.
#[derive(Debug, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    /// Null ids are gaps and are dropped.
    #[serde(default)]
    pub team1: Vec<Option<PlayerId>>,
    #[serde(default)]
    pub team2: Vec<Option<PlayerId>>,
    #[serde(default)]
    pub team1_score: u16,
    #[serde(default)]
    pub team2_score: u16,
    pub status: GameStatus,
    /// Any integer is accepted; tags other than 1 and 2 are left unknown.
    #[serde(default)]
    pub winner_team: Option<i64>,
    #[serde(default)]
    pub history: Vec<ScoreEvent>,
}

impl GameRecord {
    fn into_game(self, competition_id: &CompetitionId) -> Game {
        Game {
            id: self.id,
            competition_id: competition_id.clone(),
            team1: self.team1.into_iter().flatten().collect(),
            team2: self.team2.into_iter().flatten().collect(),
            team1_score: self.team1_score,
            team2_score: self.team2_score,
            status: self.status,
            winner_team: self
                .winner_team
                .map(|tag| u8::try_from(tag).unwrap_or(u8::MAX)),
            pending_bonus: 0,
            history: self.history,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }
}

impl StandingsInput {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read from a file, or from stdin when `path` is `-`.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(path)?
        };
        Ok(Self::parse(&raw)?)
    }

    pub fn into_domain(self) -> (Vec<Player>, Vec<Game>) {
        let competition_id = CompetitionId::from("standings");
        let games = self
            .games
            .into_iter()
            .enumerate()
            .filter_map(|(row, raw)| match serde_json::from_value::<GameRecord>(raw) {
                Ok(record) => Some(record.into_game(&competition_id)),
                Err(err) => {
                    warn!(row, error = %err, "skipping unreadable game row");
                    None
                }
            })
            .collect();
        (self.roster, games)
    }
}
