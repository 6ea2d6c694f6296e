//! Banner rendering abstraction

use crate::types::BannerProps;

/// Host-provided banner rendering surface.
///
/// The core never renders directly; displayed messages are handed to the
/// host as [`BannerProps`] in display order.
pub trait BannerRenderer: Send + Sync {
    /// Render one dismissible banner.
    fn render(&self, banner: &BannerProps);
}
