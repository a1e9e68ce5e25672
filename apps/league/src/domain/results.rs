//! Competition standings: per-player and per-pair aggregation of finished
//! games.
//!
//! Standings are always rebuilt from the complete game list; nothing here
//! mutates its input or keeps state between calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::rules::MatchRules;
use crate::domain::game::{Game, Outcome, TeamSide};
use crate::domain::player::PlayerRef;
use crate::domain::victory::SpecialWin;
use crate::domain::{PairKey, Player, PlayerId};

/// Aggregated counters shared by player and pair rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRecord {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Points scored by the player's (or pair's) team, summed over games.
    pub score: u32,
    pub buchudas: u32,
    pub buchudas_de_re: u32,
    /// `wins / total_games * 100`, 0 without games.
    pub win_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SideResult {
    Win(Option<SpecialWin>),
    Loss,
    Draw,
}

/// One team's view of one finished game.
#[derive(Debug, Clone, Copy)]
struct TeamTally {
    score: u16,
    result: SideResult,
}

impl TeamTally {
    fn for_side(game: &Game, side: TeamSide, outcome: Outcome, special: Option<SpecialWin>) -> Self {
        let result = match outcome {
            Outcome::Won(winner) if winner == side => SideResult::Win(special),
            Outcome::Won(_) => SideResult::Loss,
            Outcome::Draw => SideResult::Draw,
        };
        Self {
            score: game.score_of(side),
            result,
        }
    }
}

impl StandingRecord {
    fn apply(&mut self, tally: &TeamTally) {
        self.total_games += 1;
        self.score += u32::from(tally.score);
        match tally.result {
            SideResult::Win(special) => {
                self.wins += 1;
                match special {
                    Some(SpecialWin::Buchuda) => self.buchudas += 1,
                    Some(SpecialWin::BuchudaDeRe) => self.buchudas_de_re += 1,
                    None => {}
                }
            }
            SideResult::Loss => self.losses += 1,
            SideResult::Draw => self.draws += 1,
        }
    }

    fn finalize(&mut self) {
        self.win_rate = if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total_games) * 100.0
        };
    }
}

/// Individual standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    #[serde(flatten)]
    pub player: PlayerRef,
    #[serde(flatten)]
    pub record: StandingRecord,
}

/// Standing of two players as teammates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairResult {
    pub id: PairKey,
    /// Member whose id sorts first.
    pub player1: PlayerRef,
    pub player2: PlayerRef,
    #[serde(flatten)]
    pub record: StandingRecord,
}

/// Output of the aggregator, both lists sorted by win rate descending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitionResults {
    pub players: Vec<PlayerResult>,
    pub pairs: Vec<PairResult>,
}

impl CompetitionResults {
    pub fn player(&self, id: &PlayerId) -> Option<&PlayerResult> {
        self.players.iter().find(|r| &r.player.id == id)
    }

    pub fn pair(&self, a: &PlayerId, b: &PlayerId) -> Option<&PairResult> {
        let (key, _, _) = PairKey::of(a, b);
        self.pairs.iter().find(|r| r.id == key)
    }
}

/// Standings under the default rules.
pub fn compute_competition_results(roster: &[Player], games: &[Game]) -> CompetitionResults {
    compute_competition_results_with(roster, games, &MatchRules::default())
}

/// Build individual and pair standings from `games`.
///
/// Every roster player gets a row, games or not. Only finished games count;
/// malformed ones (bad team sizes, repeated players, unknown winner tag) are
/// skipped. Ids missing from the roster are ignored, and a pair is only
/// tracked when both members are on the roster. Ties in win rate keep
/// insertion order: roster order for players, first appearance for pairs.
pub fn compute_competition_results_with(
    roster: &[Player],
    games: &[Game],
    rules: &MatchRules,
) -> CompetitionResults {
    let mut players: Vec<PlayerResult> = Vec::with_capacity(roster.len());
    let mut player_index: HashMap<&PlayerId, usize> = HashMap::with_capacity(roster.len());
    for p in roster {
        if player_index.contains_key(&p.id) {
            continue;
        }
        player_index.insert(&p.id, players.len());
        players.push(PlayerResult {
            player: PlayerRef::from(p),
            record: StandingRecord::default(),
        });
    }

    let mut pairs: Vec<PairResult> = Vec::new();
    let mut pair_index: HashMap<PairKey, usize> = HashMap::new();
    let mut counted = 0usize;

    for game in games.iter().filter(|g| g.is_finished()) {
        let lineup = match game.lineup() {
            Ok(lineup) => lineup,
            Err(err) => {
                debug!(game_id = %game.id, error = %err, "skipping game with malformed teams");
                continue;
            }
        };
        let Some(outcome) = game.outcome() else {
            debug!(game_id = %game.id, winner_team = ?game.winner_team, "skipping game with unknown winner tag");
            continue;
        };
        let special = game.special_win(rules);
        counted += 1;

        for side in TeamSide::BOTH {
            let tally = TeamTally::for_side(game, side, outcome, special);
            let team = lineup.team(side);

            for id in team {
                if let Some(&i) = player_index.get(id) {
                    players[i].record.apply(&tally);
                }
            }

            let (Some(_), Some(_)) = (player_index.get(team[0]), player_index.get(team[1])) else {
                continue;
            };
            let (key, first, second) = PairKey::of(team[0], team[1]);
            let idx = match pair_index.get(&key) {
                Some(&idx) => idx,
                None => {
                    let player1 = players[player_index[&first]].player.clone();
                    let player2 = players[player_index[&second]].player.clone();
                    pairs.push(PairResult {
                        id: key.clone(),
                        player1,
                        player2,
                        record: StandingRecord::default(),
                    });
                    pair_index.insert(key, pairs.len() - 1);
                    pairs.len() - 1
                }
            };
            pairs[idx].record.apply(&tally);
        }
    }

    for row in &mut players {
        row.record.finalize();
    }
    for row in &mut pairs {
        row.record.finalize();
    }

    // `sort_by` is stable, which is what keeps ties in insertion order.
    players.sort_by(|a, b| b.record.win_rate.total_cmp(&a.record.win_rate));
    pairs.sort_by(|a, b| b.record.win_rate.total_cmp(&a.record.win_rate));

    debug!(
        roster = players.len(),
        games = games.len(),
        counted,
        pairs = pairs.len(),
        "competition results computed"
    );

    CompetitionResults { players, pairs }
}
