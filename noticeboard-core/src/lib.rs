//! Noticeboard Core Library
//!
//! Business logic for the noticeboard announcement widget:
//! - Feed loading (remote JSON message list)
//! - Dismissal filtering and persistence (Message Service)
//!
//! The library is host-independent: the key/value document store and the
//! banner rendering surface are abstracted behind traits, so the same
//! logic runs against the platform store of a dashboard host, a local
//! file store, or an in-memory mock in tests.

pub mod error;
pub mod http;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{FeedService, MessageService, Session};
pub use traits::{BannerRenderer, UserStorage};
pub use types::{
    BannerAction, BannerProps, BannerSeverity, DismissalRecord, FeedSource, Message, MessageLevel,
    MessageLink,
};
