//! Message Source Loader

use reqwest::Client;

use crate::error::{CoreError, CoreResult};
use crate::http::HttpUtils;
use crate::types::{FeedSource, Message};

/// Loads candidate messages from the remote feed.
///
/// A fresh fetch happens on every activation: no retry, no caching. The
/// call suspends until the network response resolves.
pub struct FeedService {
    client: Client,
}

impl FeedService {
    /// Create the loader with a plain HTTP client.
    ///
    /// No request timeout is configured: the feed contract applies the
    /// configured timeout period to message content expiry only.
    pub fn new() -> CoreResult<Self> {
        let client = Client::builder().build().map_err(|e| CoreError::Fetch {
            detail: format!("HTTP client initialization failed: {e}"),
        })?;
        Ok(Self { client })
    }

    /// Fetch and parse the feed document for `source`.
    ///
    /// # Returns
    /// * `Ok(messages)` - candidate messages in feed order
    /// * `Err(CoreError::Fetch)` - network failure or non-success status
    /// * `Err(CoreError::Parse)` - body is not a JSON array of messages
    pub async fn load(&self, source: &FeedSource) -> CoreResult<Vec<Message>> {
        let url = source.url();
        let body = HttpUtils::execute_get(&self.client, &url).await?;
        let messages: Vec<Message> = HttpUtils::parse_json(&body)?;

        log::info!("[Feed] Loaded {} candidate messages from {url}", messages.len());
        Ok(messages)
    }
}
