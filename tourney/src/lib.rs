//! # Tourney
//!
//! Registers players into tournaments, accepting a player only when its name
//! is confirmed by an external catalog (PokeAPI by default).
//!
//! ## Architecture
//!
//! Data flows one way through the registration pipeline:
//!
//! - **Validate**: the player name is checked for shape
//! - **Gate**: the tournament must exist before the catalog is consulted
//! - **Resolve**: the name is looked up through a bounded, cached client
//! - **Extract**: catalog id, types, height and weight are kept
//! - **Commit**: the store inserts the player, re-checking the tournament
//!
//! ## Core Modules
//!
//! - [`store`]: In-memory tournaments and players
//! - [`upstream`]: Catalog client, limiter, cache and timeouts
//! - [`registration`]: Pipeline, gate, validation and error classification
//!
//! ## Example
//!
//! ```
//! use tourney::store::Store;
//!
//! let store = Store::new();
//! let tournament = store.create_tournament("Championship");
//! assert_eq!(store.get_tournament(&tournament.id), Some(tournament));
//! ```

/// Tournament and player storage.
pub mod store;

/// Catalog access.
pub mod upstream;

/// Registration pipeline and error classification.
pub mod registration;

pub use registration::{
    ErrorKind, Outcome, RegistrationError, RegistrationPipeline, RegistrationResult,
};
pub use store::{Player, PlayerAttributes, PlayerId, Store, StoreError, Tournament, TournamentId};
pub use upstream::{UpstreamClient, UpstreamConfig, UpstreamError};
