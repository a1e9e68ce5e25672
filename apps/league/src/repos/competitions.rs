//! Competition repository trait.

use async_trait::async_trait;

use crate::domain::{Competition, CompetitionId, Player};
use crate::errors::domain::DomainError;

/// Storage for competitions and their rosters.
#[async_trait]
pub trait CompetitionRepo: Send + Sync {
    /// Fails with `NotFound(Competition)` when the id is unknown.
    async fn find_by_id(&self, id: &CompetitionId) -> Result<Competition, DomainError>;

    /// Members of the competition, in the order they joined.
    async fn list_members(&self, id: &CompetitionId) -> Result<Vec<Player>, DomainError>;

    /// Persist status and start date of an existing competition.
    async fn update_status(&self, competition: &Competition) -> Result<(), DomainError>;
}
