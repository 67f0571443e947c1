//! Configuration for stub generation.
//!
//! The `Config` value is passed explicitly into the driver, so the whole
//! pipeline can run as a function of (input text, config) in tests.
//!
//! # Examples
//!
//! ```
//! use fetchgen_core::config::{Config, RouteOrdering};
//!
//! let config = Config::new("petstore.json")
//!     .with_helper("request", "../http.js")
//!     .with_ordering(RouteOrdering::Document);
//! assert_eq!(config.helper.name, "request");
//! ```

// Internal imports (std, crate)
use std::path::PathBuf;

/// Default input file, relative to the working directory
pub const DEFAULT_INPUT: &str = "swagger.json";

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the Swagger v2 JSON file
    pub input: PathBuf,

    /// Helper function every generated stub calls
    pub helper: HelperImport,

    /// Order in which routes are emitted
    pub ordering: RouteOrdering,
}

/// The helper function imported at the top of the generated module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperImport {
    /// Exported name of the helper
    pub name: String,
    /// Relative module path the helper is imported from
    pub module: String,
}

/// Order of emitted routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteOrdering {
    /// Sort by path template, then by method
    #[default]
    Sorted,
    /// Keep paths and methods in the order they appear in the input
    Document,
}

impl Config {
    /// Create a new Config reading from `input`, with default values elsewhere
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            helper: HelperImport::default(),
            ordering: RouteOrdering::default(),
        }
    }

    /// Replace the imported helper
    pub fn with_helper(mut self, name: impl Into<String>, module: impl Into<String>) -> Self {
        self.helper = HelperImport {
            name: name.into(),
            module: module.into(),
        };
        self
    }

    /// Replace the route ordering
    pub fn with_ordering(mut self, ordering: RouteOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT)
    }
}

impl Default for HelperImport {
    fn default() -> Self {
        Self {
            name: "apiFetcher".to_string(),
            module: "./apiUtil.js".to_string(),
        }
    }
}
