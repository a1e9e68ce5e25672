//! Player repository trait.

use async_trait::async_trait;

use crate::domain::{Player, PlayerId};
use crate::errors::domain::DomainError;

#[async_trait]
pub trait PlayerRepo: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Player>, DomainError>;

    /// Fails with `NotFound(Player)` when the id is unknown.
    async fn find_by_id(&self, id: &PlayerId) -> Result<Player, DomainError>;
}
