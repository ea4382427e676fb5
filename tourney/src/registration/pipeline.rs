//! End-to-end player registration.

use super::{
    errors::RegistrationResult,
    gate::TournamentGate,
    validation::validate_player_name,
};
use crate::{
    store::{Player, PlayerAttributes, PlayerId, Store, Tournament, TournamentId},
    upstream::{CatalogRecord, UpstreamClient},
};
use std::sync::Arc;

/// Derive the stored attributes from a catalog record
pub fn extract_attributes(record: &CatalogRecord) -> PlayerAttributes {
    PlayerAttributes {
        external_id: record.id,
        types: record.types.clone(),
        height: record.height,
        weight: record.weight,
    }
}

/// Registration pipeline
///
/// Owns the store handle and the catalog client. Every operation the HTTP
/// layer needs goes through here.
pub struct RegistrationPipeline {
    store: Arc<Store>,
    gate: TournamentGate,
    upstream: Arc<UpstreamClient>,
}

impl RegistrationPipeline {
    /// Create a pipeline over `store` and `upstream`
    pub fn new(store: Arc<Store>, upstream: Arc<UpstreamClient>) -> Self {
        Self {
            gate: TournamentGate::new(store.clone()),
            store,
            upstream,
        }
    }

    /// Underlying store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Underlying catalog client
    pub fn upstream(&self) -> &UpstreamClient {
        &self.upstream
    }

    /// Create a tournament
    pub fn create_tournament(&self, name: impl Into<String>) -> Tournament {
        self.store.create_tournament(name)
    }

    /// Look up a tournament by textual ID
    pub fn get_tournament(&self, raw_id: &str) -> Option<Tournament> {
        let id: TournamentId = raw_id.parse().ok()?;
        self.store.get_tournament(&id)
    }

    /// All tournaments in creation order
    pub fn list_tournaments(&self) -> Vec<Tournament> {
        self.store.list_tournaments()
    }

    /// Register a player into a tournament
    ///
    /// Stages run in order and the first failure wins:
    ///
    /// 1. validate the name
    /// 2. check the tournament exists (before paying for a catalog call)
    /// 3. resolve the name against the catalog
    /// 4. extract the attributes
    /// 5. insert, re-checking the tournament atomically
    ///
    /// A failed run stores nothing.
    ///
    /// # Errors
    ///
    /// * `MalformedInput` - the name failed validation
    /// * `TournamentNotFound` - no such tournament
    /// * `InvalidName` - the catalog rejected the name
    /// * `UpstreamUnavailable` - the catalog could not be consulted
    pub async fn register_player(
        &self,
        name: &str,
        tournament_id: &str,
    ) -> RegistrationResult<Player> {
        let name = validate_player_name(name)?;
        let tournament_id = self.gate.check(tournament_id)?;
        let record = self.upstream.resolve(name).await?;
        let attributes = extract_attributes(&record);
        let player = self.store.create_player(name, tournament_id, attributes)?;

        log::info!(
            "Registered player {} '{}' into tournament {}",
            player.id,
            player.name,
            tournament_id
        );
        Ok(player)
    }

    /// Players of a tournament, in registration order
    ///
    /// # Errors
    ///
    /// `TournamentNotFound` if the tournament does not exist.
    pub fn list_players(&self, tournament_id: &str) -> RegistrationResult<Vec<Player>> {
        let tournament_id = self.gate.check(tournament_id)?;
        Ok(self.store.list_players(&tournament_id))
    }

    /// Look up a player by textual ID
    pub fn get_player(&self, raw_id: &str) -> Option<Player> {
        let id: PlayerId = raw_id.parse().ok()?;
        self.store.get_player(&id)
    }
}
