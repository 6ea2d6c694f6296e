//! Feed source configuration

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Default organization hosting the feed
fn default_org() -> String {
    "newrelic".to_string()
}

/// Default branch
fn default_branch() -> String {
    "main".to_string()
}

/// Default file name (without extension)
fn default_file_name() -> String {
    "messages".to_string()
}

/// Default message timeout: roughly two weeks, in milliseconds
const fn default_timeout_period() -> i64 {
    1_210_000
}

/// Location and expiry configuration for the remote message feed.
///
/// Composes into a raw-content URL of the form
/// `https://raw.githubusercontent.com/<org>/<repo>/<branch>/[<directory>/]<fileName>.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedSource {
    /// Organization where the messages file is located
    #[serde(default = "default_org")]
    pub org: String,
    /// Repository where the messages file is located
    pub repo: String,
    /// Branch where the file is located
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Directory where the file is located (repo root when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// File name without extension
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Age in milliseconds after which messages are no longer displayed.
    /// Governs message content expiry, not request cancellation.
    #[serde(default = "default_timeout_period")]
    pub timeout_period: i64,
}

impl FeedSource {
    /// Create a source for `repo` with all other fields at their defaults.
    #[must_use]
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            org: default_org(),
            repo: repo.into(),
            branch: default_branch(),
            directory: None,
            file_name: default_file_name(),
            timeout_period: default_timeout_period(),
        }
    }

    /// Raw-content URL of the feed document.
    #[must_use]
    pub fn url(&self) -> String {
        let directory = self
            .directory
            .as_ref()
            .map(|d| format!("{d}/"))
            .unwrap_or_default();
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}/{}{}.json",
            self.org, self.repo, self.branch, directory, self.file_name
        )
    }

    /// Message expiry window.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::milliseconds(self.timeout_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_without_directory() {
        let source = FeedSource::new("nr1-status-widgets");
        assert_eq!(
            source.url(),
            "https://raw.githubusercontent.com/newrelic/nr1-status-widgets/main/messages.json"
        );
    }

    #[test]
    fn url_with_directory() {
        let mut source = FeedSource::new("nr1-status-widgets");
        source.directory = Some("config".to_string());
        assert_eq!(
            source.url(),
            "https://raw.githubusercontent.com/newrelic/nr1-status-widgets/main/config/messages.json"
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let source: FeedSource = serde_json::from_str(r#"{"repo":"my-repo"}"#).unwrap();
        assert_eq!(source.org, "newrelic");
        assert_eq!(source.branch, "main");
        assert_eq!(source.directory, None);
        assert_eq!(source.file_name, "messages");
        assert_eq!(source.timeout_period, 1_210_000);
    }

    #[test]
    fn deserializes_camel_case_overrides() {
        let source: FeedSource = serde_json::from_str(
            r#"{"repo":"r","org":"acme","branch":"develop","fileName":"notices","timeoutPeriod":60000}"#,
        )
        .unwrap();
        assert_eq!(source.org, "acme");
        assert_eq!(source.branch, "develop");
        assert_eq!(source.file_name, "notices");
        assert_eq!(source.timeout_period, 60_000);
    }

    #[test]
    fn timeout_is_milliseconds() {
        let source = FeedSource::new("r");
        assert_eq!(source.timeout(), Duration::milliseconds(1_210_000));
    }
}
