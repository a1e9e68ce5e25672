//! Seeding helpers for the in-memory store.

use league::adapters::MemoryStore;
use league::domain::{CommunityId, Competition, CompetitionId, Player, PlayerId};
use league::DomainError;
use time::OffsetDateTime;

/// Player whose display name is the id upper-cased.
pub fn player(id: &str) -> Player {
    Player::new(id, id.to_uppercase())
}

pub fn pid(id: &str) -> PlayerId {
    PlayerId::from(id)
}

pub fn team(a: &str, b: &str) -> Vec<PlayerId> {
    vec![pid(a), pid(b)]
}

/// Builder for a store holding one competition and its members.
#[derive(Debug)]
pub struct CompetitionFixture {
    id: CompetitionId,
    name: String,
    members: Vec<String>,
    outsiders: Vec<String>,
}

impl CompetitionFixture {
    pub fn new(id: &str) -> Self {
        Self {
            id: CompetitionId::from(id),
            name: format!("Competition {id}"),
            members: Vec::new(),
            outsiders: Vec::new(),
        }
    }

    pub fn members(mut self, ids: &[&str]) -> Self {
        self.members.extend(ids.iter().map(|s| s.to_string()));
        self
    }

    /// Players known to the store but not enrolled in the competition.
    pub fn outsiders(mut self, ids: &[&str]) -> Self {
        self.outsiders.extend(ids.iter().map(|s| s.to_string()));
        self
    }

    /// Seed `store` and return the competition id.
    pub fn seed(self, store: &MemoryStore) -> Result<CompetitionId, DomainError> {
        store.insert_competition(Competition::new(
            self.id.clone(),
            CommunityId::from("community-1"),
            self.name,
            OffsetDateTime::UNIX_EPOCH,
        ));
        for id in self.members.iter().chain(&self.outsiders) {
            store.insert_player(player(id));
        }
        for id in &self.members {
            store.add_member(&self.id, &pid(id))?;
        }
        Ok(self.id)
    }
}
