//! Platform-agnostic application bootstrap for the noticeboard widget.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter
//! injection), and the host-facing activation/dismissal flows. Hosts
//! construct `AppState` once with their storage and rendering adapters;
//! the included [`adapters`] module covers file-backed storage and a
//! log-based renderer for headless hosts.

pub mod adapters;

use std::sync::Arc;

use noticeboard_core::error::{CoreError, CoreResult};
use noticeboard_core::services::{FeedService, MessageService, Session};
use noticeboard_core::traits::{BannerRenderer, UserStorage};
use noticeboard_core::types::FeedSource;

/// Log a core error at the level its classification calls for.
fn log_error(context: &str, e: &CoreError) {
    if e.is_expected() {
        log::warn!("{context}: {e}");
    } else {
        log::error!("{context}: {e}");
    }
}

/// Platform-agnostic application state.
///
/// Holds the feed loader, the message service, and the injected banner
/// renderer. Every host constructs this once via [`AppStateBuilder`].
pub struct AppState {
    /// Remote feed loader
    pub feed_service: FeedService,
    /// Dismissal filter & store
    pub message_service: MessageService,
    renderer: Arc<dyn BannerRenderer>,
}

impl AppState {
    /// Run the activation sequence and return the session to display.
    ///
    /// This is the top of the load chain and the only place errors are
    /// swallowed: any failure (unreachable feed, malformed body, store
    /// read error) is logged and an empty session is returned, so the
    /// widget fails closed and simply shows nothing.
    pub async fn activate(&self, source: &FeedSource) -> Session {
        match self
            .message_service
            .activate(&self.feed_service, source)
            .await
        {
            Ok(session) => session,
            Err(e) => {
                log_error("Error loading messages", &e);
                Session::empty()
            }
        }
    }

    /// Render the session's displayed set through the injected renderer,
    /// one banner per message, in display order.
    pub fn render(&self, session: &Session) {
        for banner in session.banners() {
            self.renderer.render(&banner);
        }
    }

    /// Dismiss the displayed message with identifier `id`.
    ///
    /// The local removal always stands; a persistence failure is logged
    /// and not surfaced, matching the host widget's behavior.
    pub async fn dismiss(&self, session: &mut Session, id: &str) {
        if let Err(e) = self.message_service.dismiss(session, id).await {
            log_error("Error saving dismissal", &e);
        }
    }
}

/// Builder for constructing `AppState` with host-specific adapters.
///
/// # Required adapters
/// - `storage` — the per-user key/value document store
/// - `renderer` — the banner rendering surface
pub struct AppStateBuilder {
    storage: Option<Arc<dyn UserStorage>>,
    renderer: Option<Arc<dyn BannerRenderer>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: None,
            renderer: None,
        }
    }

    #[must_use]
    pub fn storage(mut self, storage: Arc<dyn UserStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    #[must_use]
    pub fn renderer(mut self, renderer: Arc<dyn BannerRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if a required adapter is
    /// missing, or `CoreError::Fetch` if the HTTP client cannot be
    /// initialized.
    pub fn build(self) -> CoreResult<AppState> {
        let storage = self
            .storage
            .ok_or_else(|| CoreError::ValidationError("storage is required".to_string()))?;
        let renderer = self
            .renderer
            .ok_or_else(|| CoreError::ValidationError("renderer is required".to_string()))?;

        Ok(AppState {
            feed_service: FeedService::new()?,
            message_service: MessageService::new(storage),
            renderer,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
