//! Game repository trait.

use async_trait::async_trait;

use crate::domain::{CompetitionId, Game, GameId};
use crate::errors::domain::DomainError;

#[async_trait]
pub trait GameRepo: Send + Sync {
    /// Fails with `NotFound(Game)` when the id is unknown.
    async fn find_by_id(&self, id: &GameId) -> Result<Game, DomainError>;

    /// Games of one competition, oldest first.
    async fn list_by_competition(&self, id: &CompetitionId) -> Result<Vec<Game>, DomainError>;

    /// Every stored game, oldest first.
    async fn list_all(&self) -> Result<Vec<Game>, DomainError>;

    async fn insert(&self, game: &Game) -> Result<(), DomainError>;

    /// Overwrite an existing game.
    async fn save(&self, game: &Game) -> Result<(), DomainError>;
}
