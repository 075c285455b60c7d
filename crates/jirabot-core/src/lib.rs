pub mod config;
pub mod error;
pub mod types;

pub use config::JirabotConfig;
pub use error::{JirabotError, Result};
pub use types::*;
