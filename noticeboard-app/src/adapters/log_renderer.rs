//! Log-based banner renderer for headless hosts.

use noticeboard_core::traits::BannerRenderer;
use noticeboard_core::types::{BannerProps, BannerSeverity};

/// Emits banners through the `log` facade, one line per banner, at a
/// level matching the banner severity.
pub struct LogBannerRenderer;

impl BannerRenderer for LogBannerRenderer {
    fn render(&self, banner: &BannerProps) {
        let actions: Vec<&str> = banner.actions.iter().map(|a| a.label.as_str()).collect();
        let line = format!(
            "[{}] {}: {} (actions: {})",
            banner.severity.as_class(),
            banner.title,
            banner.description,
            actions.join(", ")
        );
        match banner.severity {
            BannerSeverity::Critical => log::error!("{line}"),
            BannerSeverity::Warning => log::warn!("{line}"),
            BannerSeverity::Info => log::info!("{line}"),
        }
    }
}
