pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, AppConfig};
pub use core::registry::{Registry, UpdateOutcome};
pub use domain::model::Parcel;
pub use utils::error::{RegistryError, Result};
