pub mod config;
pub mod csv_format;
pub mod error;
pub mod llm;
pub mod package;
pub mod prompt;
pub mod server;

pub use error::{Error, Result};
