//! Type definitions module

mod banner;
mod dismissal;
mod feed_source;
mod message;

pub use banner::{BannerAction, BannerProps, BannerSeverity};
pub use dismissal::DismissalRecord;
pub use feed_source::FeedSource;
pub use message::{Message, MessageLevel, MessageLink};
