//! Error handling for the fetchgen code generation library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Only two things can go wrong
//! while generating stubs: the input file cannot be read, or its contents do
//! not decode into a Swagger document. Both are fatal.
//!
//! # Examples
//!
//! ```
//! use fetchgen_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     // Operations that might fail...
//!     Ok(())
//! }
//! ```

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use thiserror::Error;

/// Result type for fetchgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for fetchgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// The input schema file is missing or unreadable
    #[error("failed to read {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not JSON, or does not have the Swagger document shape
    #[error("failed to decode Swagger document: {0}")]
    SchemaDecode(#[from] serde_json::Error),
}

impl Error {
    /// Create a new input read error for `path`
    pub fn input_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputRead {
            path: path.into(),
            source,
        }
    }
}
