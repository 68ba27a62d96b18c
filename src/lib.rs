pub mod balloon;
pub mod catalog;
pub mod command;
pub mod config;
pub mod errors;
pub mod figure;
pub mod mood;
pub mod phrases;
pub mod render;
pub mod text;

// Re-export commonly used types
pub use balloon::Mode;
pub use crate::config::AppConfig;
pub use errors::{RenderError, RenderResult};
pub use render::{render, RenderRequest};
