//! Player registration pipeline.
//!
//! This module provides:
//! - Input validation for player names
//! - The [`TournamentGate`] existence check
//! - The [`RegistrationPipeline`] running validate → gate → resolve →
//!   extract → commit, short-circuiting on the first failure
//! - Error classification into client-visible outcomes
//!
//! ## Example
//!
//! ```no_run
//! use tourney::registration::RegistrationPipeline;
//! use tourney::store::Store;
//! use tourney::upstream::{UpstreamClient, UpstreamConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let upstream = UpstreamClient::from_config(&UpstreamConfig::default())?;
//!     let pipeline = RegistrationPipeline::new(Arc::new(Store::new()), Arc::new(upstream));
//!
//!     let tournament = pipeline.create_tournament("Championship");
//!     let player = pipeline
//!         .register_player("pikachu", &tournament.id.to_string())
//!         .await?;
//!
//!     assert!(player.attributes.types.contains(&"electric".to_string()));
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod errors;
pub mod gate;
pub mod pipeline;
pub mod validation;

pub use classifier::{ErrorKind, Outcome, classify};
pub use errors::{RegistrationError, RegistrationResult};
pub use gate::TournamentGate;
pub use pipeline::{RegistrationPipeline, extract_attributes};
pub use validation::{MAX_PLAYER_NAME_CHARS, validate_player_name};
