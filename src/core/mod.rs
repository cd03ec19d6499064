pub mod engine;
pub mod mapping;
pub mod script;

pub use crate::domain::model::{AccountMapping, MappingReport, RunSummary};
pub use crate::domain::ports::{AccountSource, ConfigProvider, ScriptStorage};
pub use crate::utils::error::Result;
