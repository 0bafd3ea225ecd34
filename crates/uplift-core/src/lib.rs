pub mod config;
pub mod error;
pub mod types;

pub use config::UpliftConfig;
pub use error::{Result, UpliftError};
pub use types::*;
