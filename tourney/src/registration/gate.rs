//! Tournament existence check run before any catalog call.

use super::errors::{RegistrationError, RegistrationResult};
use crate::store::{Store, TournamentId};
use std::sync::Arc;

/// Fails fast when the target tournament is missing.
///
/// This only saves a wasted catalog lookup; the store re-checks the tournament
/// when the player is inserted.
#[derive(Debug, Clone)]
pub struct TournamentGate {
    store: Arc<Store>,
}

impl TournamentGate {
    /// Create a gate over `store`
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Succeeds if the tournament exists
    pub fn exists(&self, tournament_id: &TournamentId) -> RegistrationResult<()> {
        self.store
            .get_tournament(tournament_id)
            .map(|_| ())
            .ok_or(RegistrationError::TournamentNotFound)
    }

    /// Parse a textual tournament ID and check it exists.
    ///
    /// Text that is not an ID cannot name a tournament, so it fails the same
    /// way as an unknown ID.
    pub fn check(&self, raw_id: &str) -> RegistrationResult<TournamentId> {
        let tournament_id: TournamentId = raw_id
            .parse()
            .map_err(|_| RegistrationError::TournamentNotFound)?;
        self.exists(&tournament_id)?;
        Ok(tournament_id)
    }
}
