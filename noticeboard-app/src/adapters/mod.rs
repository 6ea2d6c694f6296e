//! Host adapter implementations

mod json_file_store;
mod log_renderer;

pub use json_file_store::JsonFileStore;
pub use log_renderer::LogBannerRenderer;
