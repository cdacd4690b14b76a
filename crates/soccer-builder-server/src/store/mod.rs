// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use soccer_builder_model::{Player, Stats, Team};
use std::sync::Arc;

mod memory;
mod mongo;

pub use memory::MemoryBackend;
pub use mongo::MongoBackend;

/// Fixed identifier of the one persisted team record per deployment.
pub const DEFAULT_TEAM_KEY: &str = "default_team";

#[derive(Debug)]
pub struct StoreError(pub String);

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for StoreError {}

/// Failures the HTTP layer translates into distinguishable responses.
#[derive(Debug)]
pub enum RosterError {
    TeamNotFound,
    PlayerNotFound,
    Store(StoreError),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::TeamNotFound => write!(f, "team not found"),
            RosterError::PlayerNotFound => write!(f, "player not found"),
            RosterError::Store(cause) => write!(f, "store failure: {cause}"),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Store(cause) => Some(cause),
            _ => None,
        }
    }
}

impl From<StoreError> for RosterError {
    fn from(err: StoreError) -> Self {
        RosterError::Store(err)
    }
}

/// Durable key-value document access, one whole [`Team`] per key.
#[async_trait]
pub trait TeamStoreBackend: Send + Sync + 'static {
    fn backend_tag(&self) -> &'static str {
        "unknown"
    }

    async fn load(&self, key: &str) -> Result<Option<Team>, StoreError>;
    async fn save(&self, key: &str, team: &Team) -> Result<(), StoreError>;
}

/// Persistence service for the singleton team record.
///
/// No locking or versioning guards the record: concurrent read-modify-write
/// sequences are last-write-wins over the entire document, so a competing
/// writer's roster changes can be silently dropped. Known limitation; a
/// version stamp compared on write would close it.
#[derive(Clone)]
pub struct TeamStore {
    backend: Arc<dyn TeamStoreBackend>,
    key: &'static str,
}

impl TeamStore {
    #[must_use]
    pub fn new(backend: Arc<dyn TeamStoreBackend>) -> Self {
        Self {
            backend,
            key: DEFAULT_TEAM_KEY,
        }
    }

    #[must_use]
    pub fn backend_tag(&self) -> &'static str {
        self.backend.backend_tag()
    }

    /// Load the team record, creating and persisting the default one on
    /// first access. Writes at most once per deployment lifetime.
    pub async fn get_or_create(&self) -> Result<Team, RosterError> {
        if let Some(team) = self.backend.load(self.key).await? {
            return Ok(team);
        }
        let team = Team::default();
        self.backend.save(self.key, &team).await?;
        Ok(team)
    }

    /// Unconditional full overwrite of the team record (upsert). No merge or
    /// patch semantics.
    pub async fn replace(&self, team: Team) -> Result<Team, RosterError> {
        self.backend.save(self.key, &team).await?;
        Ok(team)
    }

    /// Look up one player by id, scanning the roster in order. Does not
    /// auto-create the team record.
    pub async fn find_player(&self, player_id: &str) -> Result<Player, RosterError> {
        let team = self
            .backend
            .load(self.key)
            .await?
            .ok_or(RosterError::TeamNotFound)?;
        team.player(player_id)
            .cloned()
            .ok_or(RosterError::PlayerNotFound)
    }

    /// Apply one vote to one player, recompute that player's displayed stats,
    /// and persist the whole updated team. Returns the updated team and the
    /// recomputed stats.
    pub async fn record_vote(
        &self,
        player_id: &str,
        vote: Stats,
    ) -> Result<(Team, Stats), RosterError> {
        let mut team = self
            .backend
            .load(self.key)
            .await?
            .ok_or(RosterError::TeamNotFound)?;
        let index = team
            .player_index(player_id)
            .ok_or(RosterError::PlayerNotFound)?;
        let new_stats = team.players[index].record_vote(vote);
        self.backend.save(self.key, &team).await?;
        Ok((team, new_stats))
    }
}
