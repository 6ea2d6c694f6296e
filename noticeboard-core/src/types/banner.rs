//! Banner render props

use serde::{Deserialize, Serialize};

use crate::types::message::MessageLevel;

/// Severity class of a rendered banner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BannerSeverity {
    Critical,
    Warning,
    Info,
}

impl BannerSeverity {
    /// CSS-style class name for the severity.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl From<MessageLevel> for BannerSeverity {
    fn from(level: MessageLevel) -> Self {
        match level {
            MessageLevel::Critical => Self::Critical,
            MessageLevel::Warning => Self::Warning,
            MessageLevel::Info => Self::Info,
        }
    }
}

/// A single banner action (external link or dismiss).
///
/// `url` is `None` for the dismiss action; the host wires it to the
/// dismissal callback instead of a navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BannerAction {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Render props for one dismissible banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BannerProps {
    pub severity: BannerSeverity,
    pub title: String,
    pub description: String,
    pub actions: Vec<BannerAction>,
}
