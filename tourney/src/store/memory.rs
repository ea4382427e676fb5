//! In-memory store for tournaments and players.

use super::{
    errors::{StoreError, StoreResult},
    models::{Player, PlayerAttributes, PlayerId, Tournament, TournamentId},
};
use chrono::Utc;
use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// Both collections live behind one lock so a player insert and the
/// existence check for its tournament happen in the same critical section.
#[derive(Debug, Default)]
struct Collections {
    tournaments: Vec<Tournament>,
    tournament_index: HashMap<TournamentId, usize>,
    players: Vec<Player>,
    player_index: HashMap<PlayerId, usize>,
}

impl Collections {
    fn tournament(&self, id: &TournamentId) -> Option<&Tournament> {
        self.tournament_index
            .get(id)
            .map(|&index| &self.tournaments[index])
    }
}

/// Store owning the tournament and player collections
///
/// Records are append-only: nothing is ever updated or removed, which is what
/// keeps the player → tournament reference valid once it has been checked.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<Collections>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // Writers never leave the collections half-updated, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a new tournament
    ///
    /// Always succeeds. Empty names are accepted.
    pub fn create_tournament(&self, name: impl Into<String>) -> Tournament {
        let tournament = Tournament {
            id: TournamentId::new(),
            name: name.into(),
            created_at: Utc::now(),
        };

        let mut collections = self.write();
        let index = collections.tournaments.len();
        collections.tournaments.push(tournament.clone());
        collections.tournament_index.insert(tournament.id, index);
        drop(collections);

        log::info!("Created tournament {} '{}'", tournament.id, tournament.name);
        tournament
    }

    /// Look up a tournament by ID
    pub fn get_tournament(&self, id: &TournamentId) -> Option<Tournament> {
        self.read().tournament(id).cloned()
    }

    /// All tournaments in creation order
    pub fn list_tournaments(&self) -> Vec<Tournament> {
        self.read().tournaments.clone()
    }

    /// Insert a player into an existing tournament
    ///
    /// The tournament is looked up again under the write lock, so a player can
    /// never be stored without its tournament being visible to readers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TournamentNotFound`] if `tournament_id` does not
    /// resolve at the moment of insertion.
    pub fn create_player(
        &self,
        name: impl Into<String>,
        tournament_id: TournamentId,
        attributes: PlayerAttributes,
    ) -> StoreResult<Player> {
        let mut collections = self.write();

        if collections.tournament(&tournament_id).is_none() {
            return Err(StoreError::TournamentNotFound(tournament_id));
        }

        let player = Player {
            id: PlayerId::new(),
            name: name.into(),
            tournament_id,
            attributes,
        };

        let index = collections.players.len();
        collections.players.push(player.clone());
        collections.player_index.insert(player.id, index);

        Ok(player)
    }

    /// Look up a player by ID
    pub fn get_player(&self, id: &PlayerId) -> Option<Player> {
        let collections = self.read();
        collections
            .player_index
            .get(id)
            .map(|&index| collections.players[index].clone())
    }

    /// Players registered into a tournament, in insertion order
    pub fn list_players(&self, tournament_id: &TournamentId) -> Vec<Player> {
        self.read()
            .players
            .iter()
            .filter(|player| player.tournament_id == *tournament_id)
            .cloned()
            .collect()
    }

    /// Number of stored tournaments
    pub fn tournament_count(&self) -> usize {
        self.read().tournaments.len()
    }

    /// Number of stored players across all tournaments
    pub fn player_count(&self) -> usize {
        self.read().players.len()
    }

    /// Stored players whose tournament cannot be resolved.
    ///
    /// Empty as long as the referential invariant holds.
    pub fn orphaned_players(&self) -> Vec<Player> {
        let collections = self.read();
        collections
            .players
            .iter()
            .filter(|player| collections.tournament(&player.tournament_id).is_none())
            .cloned()
            .collect()
    }
}
