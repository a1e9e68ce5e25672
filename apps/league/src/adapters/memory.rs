//! In-memory implementation of the competition, game and player repositories.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{Competition, CompetitionId, Game, GameId, Player, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::{CompetitionRepo, GameRepo, PlayerRepo};

#[derive(Debug, Default)]
struct State {
    players: Vec<Player>,
    competitions: HashMap<CompetitionId, Competition>,
    members: HashMap<CompetitionId, Vec<PlayerId>>,
    games: Vec<Game>,
    fail_reads: bool,
}

impl State {
    fn ensure_readable(&self, what: &str) -> Result<(), DomainError> {
        if self.fail_reads {
            return Err(DomainError::fetch_failed(format!("failed to fetch {what}")));
        }
        Ok(())
    }

    fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }
}

/// Shared in-memory store. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a player.
    pub fn insert_player(&self, player: Player) {
        let mut state = self.state.write();
        match state.players.iter_mut().find(|p| p.id == player.id) {
            Some(existing) => *existing = player,
            None => state.players.push(player),
        }
    }

    /// Add or replace a competition.
    pub fn insert_competition(&self, competition: Competition) {
        let mut state = self.state.write();
        state.members.entry(competition.id.clone()).or_default();
        state
            .competitions
            .insert(competition.id.clone(), competition);
    }

    /// Enroll a player in a competition. Repeated enrollment is a no-op.
    pub fn add_member(
        &self,
        competition: &CompetitionId,
        player: &PlayerId,
    ) -> Result<(), DomainError> {
        let mut state = self.state.write();
        if !state.competitions.contains_key(competition) {
            return Err(DomainError::not_found(
                NotFoundKind::Competition,
                format!("competition {competition} not found"),
            ));
        }
        if state.player(player).is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("player {player} not found"),
            ));
        }
        let members = state.members.entry(competition.clone()).or_default();
        if !members.contains(player) {
            members.push(player.clone());
        }
        Ok(())
    }

    /// Make every subsequent read fail with a fetch error until switched back.
    pub fn set_fail_reads(&self, fail: bool) {
        self.state.write().fail_reads = fail;
    }
}

#[async_trait]
impl CompetitionRepo for MemoryStore {
    async fn find_by_id(&self, id: &CompetitionId) -> Result<Competition, DomainError> {
        let state = self.state.read();
        state.ensure_readable("competition")?;
        state.competitions.get(id).cloned().ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Competition,
                format!("competition {id} not found"),
            )
        })
    }

    async fn list_members(&self, id: &CompetitionId) -> Result<Vec<Player>, DomainError> {
        let state = self.state.read();
        state.ensure_readable("competition members")?;
        let Some(ids) = state.members.get(id) else {
            return Err(DomainError::not_found(
                NotFoundKind::Competition,
                format!("competition {id} not found"),
            ));
        };
        let members: Vec<Player> = ids
            .iter()
            .filter_map(|pid| state.player(pid).cloned())
            .collect();
        debug!(competition_id = %id, count = members.len(), "listed competition members");
        Ok(members)
    }

    async fn update_status(&self, competition: &Competition) -> Result<(), DomainError> {
        let mut state = self.state.write();
        let Some(stored) = state.competitions.get_mut(&competition.id) else {
            return Err(DomainError::not_found(
                NotFoundKind::Competition,
                format!("competition {} not found", competition.id),
            ));
        };
        stored.status = competition.status;
        stored.start_date = competition.start_date;
        Ok(())
    }
}

#[async_trait]
impl GameRepo for MemoryStore {
    async fn find_by_id(&self, id: &GameId) -> Result<Game, DomainError> {
        let state = self.state.read();
        state.ensure_readable("game")?;
        state
            .games
            .iter()
            .find(|g| &g.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("game {id} not found")))
    }

    async fn list_by_competition(&self, id: &CompetitionId) -> Result<Vec<Game>, DomainError> {
        let state = self.state.read();
        state.ensure_readable("games")?;
        Ok(state
            .games
            .iter()
            .filter(|g| &g.competition_id == id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Game>, DomainError> {
        let state = self.state.read();
        state.ensure_readable("games")?;
        Ok(state.games.clone())
    }

    async fn insert(&self, game: &Game) -> Result<(), DomainError> {
        self.state.write().games.push(game.clone());
        Ok(())
    }

    async fn save(&self, game: &Game) -> Result<(), DomainError> {
        let mut state = self.state.write();
        let Some(stored) = state.games.iter_mut().find(|g| g.id == game.id) else {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("game {} not found", game.id),
            ));
        };
        *stored = game.clone();
        Ok(())
    }
}

#[async_trait]
impl PlayerRepo for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Player>, DomainError> {
        let state = self.state.read();
        state.ensure_readable("players")?;
        Ok(state.players.clone())
    }

    async fn find_by_id(&self, id: &PlayerId) -> Result<Player, DomainError> {
        let state = self.state.read();
        state.ensure_readable("player")?;
        state.player(id).cloned().ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("player {id} not found"))
        })
    }
}
