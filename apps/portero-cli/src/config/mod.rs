//! Configuration management for the portero CLI

mod paths;
mod settings;

pub use paths::ConfigPaths;
pub use settings::Config;
