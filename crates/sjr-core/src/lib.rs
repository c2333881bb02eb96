//! Shared building blocks for the weighted JSON reducer: error taxonomy,
//! configuration, character encodings and dotted path access.

pub mod config;
pub mod encoding;
pub mod error;
pub mod path;

pub use config::ReducerConfig;
pub use encoding::Encoding;
pub use error::{Result, SjrError};

#[cfg(test)]
mod tests;
