pub mod config;
pub mod error;
pub mod geo;
pub mod llm;
pub mod planner;
pub mod server;

pub use error::{ApiError, ApiErrorKind, Error, Result};
