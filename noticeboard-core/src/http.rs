//! Generic HTTP request tools
//!
//! Reusable request processing for the feed fetch: sending the request,
//! logging, reading the response, and parsing JSON. Error policy follows
//! the feed contract: no retry, no caching, no request timeout (the
//! configured timeout period governs message content expiry only).

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Perform a GET request and return the response body.
    ///
    /// # Returns
    /// * `Ok(body)` - response text for a success status
    /// * `Err(CoreError::Fetch)` - network failure or non-success status
    pub async fn execute_get(client: &Client, url: &str) -> CoreResult<String> {
        log::debug!("[Feed] GET {url}");

        let response = client.get(url).send().await.map_err(|e| CoreError::Fetch {
            detail: e.to_string(),
        })?;

        let status = response.status();
        log::debug!("[Feed] Response Status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CoreError::Fetch {
                detail: format!("HTTP {}: {}", status.as_u16(), truncate_for_log(&body)),
            });
        }

        let body = response.text().await.map_err(|e| CoreError::Fetch {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("[Feed] Response Body: {}", truncate_for_log(&body));

        Ok(body)
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(CoreError::Parse)` - body does not match the expected shape
    pub fn parse_json<T>(response_text: &str) -> CoreResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[Feed] JSON parse failed: {e}");
            log::error!("[Feed] Raw response: {}", truncate_for_log(response_text));
            CoreError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Message;

    #[test]
    fn parse_json_message_array() {
        let body = r#"[{"date":"2025-06-01","desc":"a","title":"A","level":"warning"}]"#;
        let msgs: Vec<Message> = HttpUtils::parse_json(body).unwrap();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].title.as_deref(), Some("A"));
    }

    #[test]
    fn parse_json_not_an_array() {
        let result: CoreResult<Vec<Message>> = HttpUtils::parse_json(r#"{"date":"x"}"#);
        assert!(matches!(result, Err(CoreError::Parse { .. })));
    }

    #[test]
    fn parse_json_invalid() {
        let result: CoreResult<Vec<Message>> = HttpUtils::parse_json("not json");
        assert!(matches!(result, Err(CoreError::Parse { .. })));
    }
}
