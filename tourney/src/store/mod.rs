//! In-memory storage for tournaments and players.
//!
//! The [`Store`] is the only owner of both collections. It enforces the
//! referential invariant that every player points at an existing tournament
//! by re-checking the tournament inside the same critical section as the
//! insert.
//!
//! ## Example
//!
//! ```
//! use tourney::store::{PlayerAttributes, Store};
//!
//! let store = Store::new();
//! let tournament = store.create_tournament("Championship");
//!
//! let attributes = PlayerAttributes {
//!     external_id: 25,
//!     types: vec!["electric".to_string()],
//!     height: 4,
//!     weight: 60,
//! };
//! let player = store
//!     .create_player("pikachu", tournament.id, attributes)
//!     .unwrap();
//!
//! assert_eq!(store.list_players(&tournament.id), vec![player]);
//! ```

pub mod errors;
pub mod memory;
pub mod models;

pub use errors::{StoreError, StoreResult};
pub use memory::Store;
pub use models::{Player, PlayerAttributes, PlayerId, Tournament, TournamentId};
