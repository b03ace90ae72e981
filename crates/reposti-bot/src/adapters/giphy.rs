//! Giphy GIF search
//!
//! Searches the Giphy API and picks one of the relevant results at random.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use reposti::{DomainError, GifSearch};

const SEARCH_URL: &str = "https://api.giphy.com/v1/gifs/search";
const SEARCH_LIMIT: u32 = 25;

/// Giphy implementation of GifSearch
#[derive(Clone)]
pub struct GiphyClient {
    client: Client,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    data: Vec<Gif>,
}

#[derive(Deserialize)]
struct Gif {
    images: GifImages,
}

#[derive(Deserialize)]
struct GifImages {
    downsized: GifRendition,
}

#[derive(Deserialize)]
struct GifRendition {
    url: String,
}

impl GiphyClient {
    /// Create a client; without a key every lookup returns `None`
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl GifSearch for GiphyClient {
    async fn random_gif(&self, query: &str) -> Result<Option<String>, DomainError> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!(query = %query, "No Giphy key configured, skipping GIF lookup");
            return Ok(None);
        };

        let limit = SEARCH_LIMIT.to_string();
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("api_key", api_key),
                ("q", query),
                ("limit", limit.as_str()),
                ("sort", "relevant"),
            ])
            .send()
            .await
            .map_err(DomainError::transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, query = %query, "Giphy search failed");
            return Err(DomainError::Transport(format!("Giphy API error: {} {}", status, error_text)));
        }

        let search: SearchResponse = response.json().await.map_err(DomainError::transport)?;

        Ok(pick_url(search.data, &mut rand::thread_rng()))
    }
}

fn pick_url<R: rand::Rng + ?Sized>(gifs: Vec<Gif>, rng: &mut R) -> Option<String> {
    gifs.choose(rng).map(|gif| gif.images.downsized.url.clone())
}
