use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::config::rules::MatchRules;
use crate::domain::game::{lineup, Game, GameStatus, Lineup};
use crate::domain::{CommunityId, CompetitionId, Player, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Competition lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionStatus {
    Pending,
    InProgress,
    Finished,
}

/// A competition inside a community.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    pub community_id: CommunityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: CompetitionStatus,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Competition {
    pub fn new(
        id: CompetitionId,
        community_id: CommunityId,
        name: impl Into<String>,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            community_id,
            name: name.into(),
            description: String::new(),
            status: CompetitionStatus::Pending,
            start_date: None,
            created_at,
        }
    }
}

fn ensure_status(
    competition: &Competition,
    expected: CompetitionStatus,
    action: &str,
) -> Result<(), DomainError> {
    if competition.status != expected {
        return Err(DomainError::conflict(
            ConflictKind::PhaseMismatch,
            format!(
                "cannot {action} competition {} in status {:?}",
                competition.id, competition.status
            ),
        ));
    }
    Ok(())
}

/// Guard for pending -> in_progress.
pub fn ensure_can_start(
    competition: &Competition,
    member_count: usize,
    rules: &MatchRules,
) -> Result<(), DomainError> {
    ensure_status(competition, CompetitionStatus::Pending, "start")?;
    if member_count < rules.min_competition_members {
        return Err(DomainError::validation(
            ValidationKind::NotEnoughMembers,
            format!(
                "competition needs at least {} members to start, has {member_count}",
                rules.min_competition_members
            ),
        ));
    }
    Ok(())
}

/// Guard for in_progress -> finished: at least one game, and all of them
/// finished.
pub fn finish_eligibility(competition: &Competition, games: &[Game]) -> Result<(), DomainError> {
    ensure_status(competition, CompetitionStatus::InProgress, "finish")?;
    if games.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::NoGames,
            format!("competition {} has no games", competition.id),
        ));
    }
    let open = games
        .iter()
        .filter(|g| g.status != GameStatus::Finished)
        .count();
    if open > 0 {
        return Err(DomainError::validation(
            ValidationKind::GamesPending,
            format!("competition {} has {open} unfinished games", competition.id),
        ));
    }
    Ok(())
}

pub fn can_finish_competition(competition: &Competition, games: &[Game]) -> bool {
    finish_eligibility(competition, games).is_ok()
}

/// Validate the teams of a game about to be created in `competition`.
pub fn validate_new_game<'a>(
    competition: &Competition,
    roster: &[Player],
    team1: &'a [PlayerId],
    team2: &'a [PlayerId],
) -> Result<Lineup<'a>, DomainError> {
    ensure_status(competition, CompetitionStatus::InProgress, "add games to")?;
    let lineup = lineup(team1, team2)?;

    let members: HashSet<&PlayerId> = roster.iter().map(|p| &p.id).collect();
    if let Some(outsider) = lineup.players().find(|p| !members.contains(*p)) {
        return Err(DomainError::validation(
            ValidationKind::PlayerNotInRoster,
            format!(
                "player {outsider} is not a member of competition {}",
                competition.id
            ),
        ));
    }
    Ok(lineup)
}
