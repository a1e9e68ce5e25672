use serde::{Deserialize, Serialize};

use crate::domain::game::Game;
use crate::domain::PlayerId;

/// Activity summary for one player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    /// Games the player is lined up in, whatever their status.
    pub total_games: u32,
    pub finished_games: u32,
    /// Mean score of the player's team over finished games, one decimal.
    pub average_score: f64,
}

pub fn player_statistics(player: &PlayerId, games: &[Game]) -> PlayerStatistics {
    let mut stats = PlayerStatistics::default();
    let mut score_sum = 0u32;

    for game in games {
        let Some(side) = game.side_of(player) else {
            continue;
        };
        stats.total_games += 1;
        if game.is_finished() {
            stats.finished_games += 1;
            score_sum += u32::from(game.score_of(side));
        }
    }

    if stats.finished_games > 0 {
        let mean = f64::from(score_sum) / f64::from(stats.finished_games);
        stats.average_score = (mean * 10.0).round() / 10.0;
    }
    stats
}
