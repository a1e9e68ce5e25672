use std::env;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::domain::rules::{MIN_COMPETITION_MEMBERS, TARGET_POINTS};

/// Match rules shared by the round engine, lifecycle guards and the
/// result aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    /// Points a team needs to win a game.
    pub target_points: u16,
    /// Members required before a competition can start.
    pub min_competition_members: usize,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            target_points: TARGET_POINTS,
            min_competition_members: MIN_COMPETITION_MEMBERS,
        }
    }
}

impl MatchRules {
    /// Build rules from `LEAGUE_TARGET_POINTS` and `LEAGUE_MIN_MEMBERS`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let target_points = positive_var("LEAGUE_TARGET_POINTS")?
            .map(|v| v as u16)
            .unwrap_or(defaults.target_points);
        let min_competition_members = positive_var("LEAGUE_MIN_MEMBERS")?
            .map(|v| v as usize)
            .unwrap_or(defaults.min_competition_members);

        Ok(Self {
            target_points,
            min_competition_members,
        })
    }

    pub fn with_target_points(mut self, target_points: u16) -> Self {
        self.target_points = target_points;
        self
    }

    /// Final score of a shutout win: (target, 0).
    pub fn buchuda_score(&self) -> (u16, u16) {
        (self.target_points, 0)
    }

    /// Final score of a comeback from the 0-5 deficit: (target, target - 1).
    pub fn buchuda_de_re_score(&self) -> (u16, u16) {
        (self.target_points, self.deficit_threshold())
    }

    /// Opponent score at which a scoreless team counts as trailing 0-5.
    pub fn deficit_threshold(&self) -> u16 {
        self.target_points.saturating_sub(1)
    }
}

fn positive_var(name: &'static str) -> Result<Option<u32>, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };
    match raw.trim().parse::<u32>() {
        Ok(v) if v > 0 && v <= u16::MAX as u32 => Ok(Some(v)),
        _ => Err(ConfigError::InvalidNumber { name, value: raw }),
    }
}
