//! Flickr public photo feed adapter.
//!
//! One GET per fetch, no retry, no pagination — the endpoint returns a
//! bounded set in a single response. Decoding is all-or-nothing: a single
//! item with an invalid date fails the whole response, never a partial list.

use serde::Deserialize;
use shutterfeed_core::config::Config;
use shutterfeed_core::{FeedStore, RawItem};

/// Why a fetch failed. Internal taxonomy only — the public [`fetch`] and
/// [`refresh`] surfaces swallow these into an empty result.
///
/// [`fetch`]: FlickrFeed::fetch
/// [`refresh`]: FlickrFeed::refresh
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Connection, timeout, or non-2xx status.
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Body was not the expected JSON shape, or an item failed to decode
    /// (including an invalid `date_taken`).
    #[error("feed body did not decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Wire envelope: the feed nests everything of interest under `items`.
#[derive(Debug, Deserialize)]
struct FeedResponse {
    items: Vec<RawItem>,
}

/// Adapter for the Flickr public photos feed.
pub struct FlickrFeed {
    client: reqwest::Client,
    url: String,
}

impl FlickrFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.feed.url.clone())
    }

    /// The URL this adapter fetches from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// One GET to the feed URL, strictly decoded.
    ///
    /// An empty `items` array is a valid feed, not an error. Timeouts are
    /// whatever the client defaults provide.
    pub async fn try_fetch(&self) -> Result<Vec<RawItem>, FeedError> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: FeedResponse = serde_json::from_str(&body)?;
        Ok(response.items)
    }

    /// Fail-soft fetch: any [`FeedError`] is logged and converted to an
    /// empty list. Consumers only ever see an empty or complete feed.
    pub async fn fetch(&self) -> Vec<RawItem> {
        match self.try_fetch().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), url = %self.url, "feed fetched");
                items
            }
            Err(err) => {
                tracing::warn!(error = %err, url = %self.url, "feed fetch failed; serving empty feed");
                Vec::new()
            }
        }
    }

    /// Fetch and replace the store contents wholesale. On failure the store
    /// becomes empty — there is no stale-list fallback.
    pub async fn refresh(&self, store: &FeedStore) {
        store.replace(self.fetch().await);
    }
}
