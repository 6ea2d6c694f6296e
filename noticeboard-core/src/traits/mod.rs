//! Host capability abstraction traits

mod banner_renderer;
mod user_storage;

pub use banner_renderer::BannerRenderer;
pub use user_storage::UserStorage;
