//! Access to the external catalog that confirms player names.
//!
//! This module provides:
//! - A [`CatalogFetcher`] seam with an HTTP implementation for PokeAPI
//! - A counting-semaphore [`ConcurrencyLimiter`] capping in-flight calls
//! - A [`NameCache`] keyed by lower-cased name
//! - Per-call timeouts
//! - The [`UpstreamClient`] tying them together
//!
//! ## Failure classification
//!
//! - **InvalidName**: the catalog has no entry for the name (HTTP 404/400).
//!   Stable; never retry with the same input.
//! - **Unavailable**: network error, timeout, unexpected status or malformed
//!   payload. Transient.
//!
//! ## Example
//!
//! ```no_run
//! use tourney::upstream::{UpstreamClient, UpstreamConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = UpstreamClient::from_config(&UpstreamConfig::default())?;
//!
//!     let record = client.resolve("Pikachu").await?;
//!     assert_eq!(record.id, 25);
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod limiter;
pub mod models;
pub mod timeouts;

pub use cache::NameCache;
pub use client::{UpstreamClient, UpstreamStats, lookup_key};
pub use config::UpstreamConfig;
pub use errors::{FetchError, UpstreamError, UpstreamResult};
pub use fetcher::{CatalogFetcher, PokeApiFetcher};
pub use limiter::ConcurrencyLimiter;
pub use models::CatalogRecord;
