//! Run configuration and template loading for ssmenv

pub mod config;
pub mod loader;

pub use config::{Config, ConfigBuilder, RuntimeSettings};
pub use loader::TemplateLoader;
