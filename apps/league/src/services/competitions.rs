//! Competition lifecycle service.

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::config::rules::MatchRules;
use crate::domain::results::compute_competition_results_with;
use crate::domain::{
    ensure_can_start, finish_eligibility, Competition, CompetitionId, CompetitionResults,
    CompetitionStatus,
};
use crate::errors::domain::DomainError;
use crate::repos::{CompetitionRepo, GameRepo};

/// Drives competitions through pending -> in_progress -> finished.
pub struct CompetitionService<C: CompetitionRepo, G: GameRepo> {
    competitions: C,
    games: G,
    rules: MatchRules,
}

impl<C: CompetitionRepo, G: GameRepo> CompetitionService<C, G> {
    pub fn new(competitions: C, games: G, rules: MatchRules) -> Self {
        Self {
            competitions,
            games,
            rules,
        }
    }

    /// Start a pending competition that has enough members.
    pub async fn start(&self, id: &CompetitionId) -> Result<Competition, DomainError> {
        let mut competition = self.competitions.find_by_id(id).await?;
        let members = self.competitions.list_members(id).await?;

        if let Err(err) = ensure_can_start(&competition, members.len(), &self.rules) {
            warn!(competition_id = %id, members = members.len(), error = %err, "start rejected");
            return Err(err);
        }

        competition.status = CompetitionStatus::InProgress;
        competition
            .start_date
            .get_or_insert_with(OffsetDateTime::now_utc);
        self.competitions.update_status(&competition).await?;

        info!(competition_id = %id, members = members.len(), "competition started");
        Ok(competition)
    }

    /// Whether [`Self::finish`] would currently succeed.
    pub async fn can_finish(&self, id: &CompetitionId) -> Result<bool, DomainError> {
        let competition = self.competitions.find_by_id(id).await?;
        let games = self.games.list_by_competition(id).await?;
        let eligible = finish_eligibility(&competition, &games);
        if let Err(err) = &eligible {
            debug!(competition_id = %id, reason = %err, "competition cannot finish yet");
        }
        Ok(eligible.is_ok())
    }

    /// Close a running competition and return its final standings.
    pub async fn finish(&self, id: &CompetitionId) -> Result<CompetitionResults, DomainError> {
        let mut competition = self.competitions.find_by_id(id).await?;
        let games = self.games.list_by_competition(id).await?;

        if let Err(err) = finish_eligibility(&competition, &games) {
            warn!(competition_id = %id, games = games.len(), error = %err, "finish rejected");
            return Err(err);
        }
        let roster = self.competitions.list_members(id).await?;

        // Status write is the last fallible step.
        competition.status = CompetitionStatus::Finished;
        self.competitions.update_status(&competition).await?;
        info!(competition_id = %id, games = games.len(), "competition finished");

        Ok(compute_competition_results_with(&roster, &games, &self.rules))
    }

    /// Current standings of a competition, whatever its status.
    pub async fn results(&self, id: &CompetitionId) -> Result<CompetitionResults, DomainError> {
        let roster = self.competitions.list_members(id).await?;
        let games = self.games.list_by_competition(id).await?;
        debug!(
            competition_id = %id,
            roster = roster.len(),
            games = games.len(),
            "computing competition results"
        );
        Ok(compute_competition_results_with(&roster, &games, &self.rules))
    }
}
