//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileAgentsConfig, FileConfig, FileLogConfig, FileServerConfig, FileSimulatorConfig};
pub use loader::ConfigLoader;
