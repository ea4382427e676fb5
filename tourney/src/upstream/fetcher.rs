//! Outbound catalog calls.

use super::{
    errors::FetchError,
    models::{CatalogPayload, CatalogRecord},
};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;

/// Single read-only lookup against the catalog.
///
/// `key` is already normalised (trimmed, lower-cased). Implementations
/// report a missing entry as [`FetchError::NotFound`] and every other failure
/// with one of the remaining variants.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch(&self, key: &str) -> Result<CatalogRecord, FetchError>;
}

/// HTTP fetcher for a PokeAPI-compatible catalog
#[derive(Debug, Clone)]
pub struct PokeApiFetcher {
    base_url: Url,
    client: reqwest::Client,
}

impl PokeApiFetcher {
    /// Create a fetcher for `base_url`
    ///
    /// # Errors
    ///
    /// Fails if `base_url` is not an absolute http(s) URL or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, request_timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!("Catalog URL must be an absolute http(s) URL: {}", base_url);
        }

        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("tourney/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { base_url, client })
    }

    /// URL for a lookup key, percent-encoded as a single path segment
    pub fn lookup_url(&self, key: &str) -> Result<Url, FetchError> {
        // Empty and dot segments would address the listing endpoint
        if matches!(key, "" | "." | "..") {
            return Err(FetchError::NotFound(key.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Transport(format!("invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .push(key);
        Ok(url)
    }
}

#[async_trait]
impl CatalogFetcher for PokeApiFetcher {
    async fn fetch(&self, key: &str) -> Result<CatalogRecord, FetchError> {
        let url = self.lookup_url(key)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {}
            // PokeAPI answers 404 for unknown names and 400 for names it cannot parse
            StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => {
                return Err(FetchError::NotFound(key.to_string()));
            }
            status => return Err(FetchError::Status(status.as_u16())),
        }

        let payload: CatalogPayload = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        payload
            .into_record()
            .ok_or_else(|| FetchError::Malformed(format!("no types listed for '{key}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher(base: &str) -> PokeApiFetcher {
        PokeApiFetcher::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_lookup_url_appends_key() {
        let url = fetcher("https://pokeapi.co/api/v2/pokemon")
            .lookup_url("pikachu")
            .unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/pikachu");
    }

    #[test]
    fn test_lookup_url_tolerates_trailing_slash() {
        let url = fetcher("https://pokeapi.co/api/v2/pokemon/")
            .lookup_url("eevee")
            .unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/eevee");
    }

    #[test]
    fn test_lookup_url_encodes_key() {
        let url = fetcher("http://localhost:8080/pokemon")
            .lookup_url("ash ketchum/../x")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/pokemon/ash%20ketchum%2F..%2Fx"
        );
    }

    #[test]
    fn test_empty_key_is_not_found() {
        let fetcher = fetcher("https://pokeapi.co/api/v2/pokemon");
        assert_eq!(
            fetcher.lookup_url("").unwrap_err(),
            FetchError::NotFound(String::new())
        );
    }

    #[test]
    fn test_dot_segments_are_not_found() {
        let fetcher = fetcher("http://localhost:8080/pokemon");
        assert_eq!(
            fetcher.lookup_url("..").unwrap_err(),
            FetchError::NotFound("..".to_string())
        );
    }

    #[test]
    fn test_rejects_non_http_base() {
        assert!(PokeApiFetcher::new("ftp://example.com/pokemon", Duration::from_secs(1)).is_err());
        assert!(PokeApiFetcher::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_transport_error() {
        // Port 9 (discard) is closed on test machines
        let fetcher = fetcher("http://127.0.0.1:9/pokemon");
        let err = fetcher.fetch("pikachu").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
