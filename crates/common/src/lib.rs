mod config;

pub mod ethereum;
pub mod files;
pub mod logger;
pub mod spinner;
pub mod wallets;

pub use config::{global_config, init_global_config, GlobalConfig};
