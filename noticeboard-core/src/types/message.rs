//! Announcement message types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::banner::{BannerAction, BannerProps, BannerSeverity};
use crate::utils::datetime::parse_message_date;

/// Message severity level as supplied by the feed.
///
/// Unknown strings fall back to [`MessageLevel::Info`], matching the
/// default branch of the host's severity mapping.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    /// Critical announcement
    Critical,
    /// Warning announcement
    Warning,
    /// Informational announcement (default)
    #[default]
    #[serde(other)]
    Info,
}

/// Optional external link carried by a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageLink {
    /// Link label shown as an action
    pub label: String,
    /// Link target
    pub url: String,
}

/// A candidate announcement message from the remote feed.
///
/// `date` and `desc` are optional on the wire: the feed is not schema
/// validated, and entries missing either field are filtered out rather
/// than rejected. Identity is content-derived, not a stored key — see
/// [`Message::id`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Publication timestamp (ISO-8601-parseable string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Banner title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Severity level
    #[serde(default)]
    pub level: MessageLevel,
    /// Optional external link action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<MessageLink>,
}

impl Message {
    /// Derived message identifier: `date` concatenated with `desc`.
    ///
    /// Two messages with equal `date` and `desc` are the same message
    /// for dismissal purposes. `None` when either field is missing.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match (&self.date, &self.desc) {
            (Some(date), Some(desc)) => Some(format!("{date}{desc}")),
            _ => None,
        }
    }

    /// Message age relative to `now`.
    ///
    /// `None` when `date` is missing or not parseable as a timestamp.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        let date = parse_message_date(self.date.as_deref()?)?;
        Some(now - date)
    }

    /// Build the render props for this message.
    ///
    /// The action list carries the optional external link first, then the
    /// mandatory "Dismiss" action.
    #[must_use]
    pub fn to_banner(&self) -> BannerProps {
        let mut actions = Vec::with_capacity(2);
        if let Some(link) = &self.link {
            actions.push(BannerAction {
                label: link.label.clone(),
                url: Some(link.url.clone()),
            });
        }
        actions.push(BannerAction {
            label: "Dismiss".to_string(),
            url: None,
        });

        BannerProps {
            severity: BannerSeverity::from(self.level),
            title: self.title.clone().unwrap_or_default(),
            description: self.desc.clone().unwrap_or_default(),
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(date: &str, desc: &str) -> Message {
        Message {
            date: Some(date.to_string()),
            desc: Some(desc.to_string()),
            title: None,
            level: MessageLevel::default(),
            link: None,
        }
    }

    #[test]
    fn id_concatenates_date_and_desc() {
        let m = message("2025-06-01", "maintenance window");
        assert_eq!(m.id().as_deref(), Some("2025-06-01maintenance window"));
    }

    #[test]
    fn id_ignores_unrelated_fields() {
        let mut a = message("2025-06-01", "maintenance window");
        let mut b = message("2025-06-01", "maintenance window");
        a.title = Some("Heads up".to_string());
        a.level = MessageLevel::Critical;
        b.link = Some(MessageLink {
            label: "Docs".to_string(),
            url: "https://example.com".to_string(),
        });
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn id_none_when_date_missing() {
        let mut m = message("2025-06-01", "x");
        m.date = None;
        assert_eq!(m.id(), None);
    }

    #[test]
    fn id_none_when_desc_missing() {
        let mut m = message("2025-06-01", "x");
        m.desc = None;
        assert_eq!(m.id(), None);
    }

    #[test]
    fn level_deserializes_known_values() {
        let m: Message = serde_json::from_str(r#"{"level":"critical"}"#).unwrap();
        assert_eq!(m.level, MessageLevel::Critical);
        let m: Message = serde_json::from_str(r#"{"level":"warning"}"#).unwrap();
        assert_eq!(m.level, MessageLevel::Warning);
    }

    #[test]
    fn level_unknown_string_is_info() {
        let m: Message = serde_json::from_str(r#"{"level":"notice"}"#).unwrap();
        assert_eq!(m.level, MessageLevel::Info);
    }

    #[test]
    fn level_missing_is_info() {
        let m: Message = serde_json::from_str("{}").unwrap();
        assert_eq!(m.level, MessageLevel::Info);
    }

    #[test]
    fn banner_actions_end_with_dismiss() {
        let mut m = message("2025-06-01", "body");
        m.link = Some(MessageLink {
            label: "Release notes".to_string(),
            url: "https://example.com/notes".to_string(),
        });
        let banner = m.to_banner();
        assert_eq!(banner.actions.len(), 2);
        assert_eq!(banner.actions[0].label, "Release notes");
        assert_eq!(banner.actions[1].label, "Dismiss");
        assert_eq!(banner.actions[1].url, None);
    }

    #[test]
    fn banner_without_link_has_only_dismiss() {
        let banner = message("2025-06-01", "body").to_banner();
        assert_eq!(banner.actions.len(), 1);
        assert_eq!(banner.actions[0].label, "Dismiss");
    }

    #[test]
    fn age_none_for_unparseable_date() {
        let m = message("not a date", "body");
        assert_eq!(m.age(Utc::now()), None);
    }
}
