mod config;

pub use config::{ClientConfig, get_config_manager};
