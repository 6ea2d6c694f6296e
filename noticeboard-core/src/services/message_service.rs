//! Dismissal Filter & Store

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::error::{CoreError, CoreResult};
use crate::services::FeedService;
use crate::traits::UserStorage;
use crate::types::{BannerProps, DismissalRecord, FeedSource, Message};

/// Collection identifier in the host key/value store
pub const COLLECTION_ID: &str = "USER_MSGS_CONFIG";
/// Document identifier for the dismissal record
pub const DOCUMENT_ID: &str = "dismissed";

/// The session-scoped displayed set plus the current dismissal record.
///
/// Derived once per activation; locally mutated when the user dismisses
/// a banner. There is no lock around the record: updates happen one at a
/// time in response to discrete user actions, with a single writer per
/// session. Multi-session races against the persisted record are an
/// accepted gap (last writer wins).
#[derive(Debug, Default)]
pub struct Session {
    displayed: Vec<Message>,
    record: DismissalRecord,
}

impl Session {
    /// An empty session (nothing to display).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a session by filtering `candidates` against `record`.
    #[must_use]
    pub fn build(
        candidates: Vec<Message>,
        record: DismissalRecord,
        now: DateTime<Utc>,
        timeout: Duration,
    ) -> Self {
        let displayed = filter_messages(candidates, &record, now, timeout);
        Self { displayed, record }
    }

    /// Messages currently eligible for rendering, in feed order.
    #[must_use]
    pub fn displayed(&self) -> &[Message] {
        &self.displayed
    }

    /// The dismissal record backing this session.
    #[must_use]
    pub fn record(&self) -> &DismissalRecord {
        &self.record
    }

    /// Render props for the displayed set, one banner per message.
    #[must_use]
    pub fn banners(&self) -> Vec<BannerProps> {
        self.displayed.iter().map(Message::to_banner).collect()
    }
}

/// Filter candidate messages for display.
///
/// Drops, in order: messages missing `date` or `desc` (an unparseable
/// `date` counts as missing), messages whose age reached `timeout`, and
/// messages whose identifier is already in `record`. Input order is
/// preserved. Idempotent.
#[must_use]
pub fn filter_messages(
    candidates: Vec<Message>,
    record: &DismissalRecord,
    now: DateTime<Utc>,
    timeout: Duration,
) -> Vec<Message> {
    candidates
        .into_iter()
        .filter(|m| m.id().is_some())
        .filter(|m| m.age(now).is_some_and(|age| age < timeout))
        .filter(|m| m.id().is_none_or(|id| !record.contains(&id)))
        .collect()
}

/// Loads, filters and persists per-user dismissal state.
pub struct MessageService {
    storage: Arc<dyn UserStorage>,
}

impl MessageService {
    /// Create the service over an injected storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn UserStorage>) -> Self {
        Self { storage }
    }

    /// Load the current user's dismissal record.
    ///
    /// # Returns
    /// * `Ok(record)` - the persisted record, empty when none exists
    /// * `Err(CoreError::StorageRead)` - host store failure (propagated,
    ///   not retried)
    pub async fn load_dismissals(&self) -> CoreResult<DismissalRecord> {
        match self.storage.read(COLLECTION_ID, DOCUMENT_ID).await? {
            Some(document) => serde_json::from_value(document)
                .map_err(|e| CoreError::SerializationError(e.to_string())),
            None => Ok(DismissalRecord::default()),
        }
    }

    /// Persist the full dismissal record (overwrite, not append).
    pub async fn save_dismissals(&self, record: &DismissalRecord) -> CoreResult<()> {
        let document = serde_json::to_value(record)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        self.storage
            .write(COLLECTION_ID, DOCUMENT_ID, &document)
            .await
    }

    /// Run the activation sequence: load the dismissal record, then
    /// fetch the feed, then filter. The ordering is enforced by
    /// sequential chaining; filtering only starts once both values are
    /// available.
    pub async fn activate(
        &self,
        feed: &FeedService,
        source: &FeedSource,
    ) -> CoreResult<Session> {
        let record = self.load_dismissals().await?;
        let candidates = feed.load(source).await?;
        let session = Session::build(candidates, record, Utc::now(), source.timeout());

        log::info!(
            "[Messages] Displaying {} message(s), dismissal record holds {} id(s)",
            session.displayed.len(),
            session.record.len()
        );
        Ok(session)
    }

    /// Dismiss the displayed message with identifier `id`.
    ///
    /// The message is removed from the displayed set and the identifier
    /// appended to the record before the write is attempted, so the
    /// display updates immediately even when persistence later fails.
    ///
    /// # Returns
    /// * `Err(CoreError::StorageWrite)` - record could not be persisted;
    ///   the local removal stands
    pub async fn dismiss(&self, session: &mut Session, id: &str) -> CoreResult<()> {
        session.displayed.retain(|m| m.id().as_deref() != Some(id));
        session.record.push(id.to_string());
        self.save_dismissals(&session.record).await
    }
}
