pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::engine::Engine;
pub use crate::core::store::EntityStore;
pub use crate::utils::error::{RegistrarError, Result};
