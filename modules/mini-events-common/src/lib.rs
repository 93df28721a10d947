pub mod config;
pub mod error;
pub mod file_config;
pub mod types;
pub mod validation;

pub use config::{AppConfig, Environment};
pub use error::{ErrorCode, EventError, EventResult};
pub use file_config::{FileConfig, Limits, SeedEvent};
pub use types::*;
