//! Business logic service layer

mod feed_service;
mod message_service;

pub use feed_service::FeedService;
pub use message_service::{filter_messages, MessageService, Session, COLLECTION_ID, DOCUMENT_ID};
