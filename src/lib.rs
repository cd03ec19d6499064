pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{AccountzClient, LocalStorage};
pub use config::MapperConfig;
pub use crate::core::{engine::MapperEngine, mapping::build_account_mapping};
pub use utils::error::{MapperError, Result};
